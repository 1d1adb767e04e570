use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use tracing::debug;

use crate::ecs::components::{ActiveInstrument, Instrument};

/// Open the instrument interface if it is closed, close it if it is open.
/// Opening needs an `Instrument`; closing does not.
pub(crate) fn toggle_instrument_ui(world: &mut World, entity: Entity, actor: Entity) {
    let Ok(mut target) = world.get_entity_mut(entity) else {
        return;
    };

    if target.contains::<ActiveInstrument>() {
        target.remove::<ActiveInstrument>();
        debug!(?entity, ?actor, "instrument interface closed");
    } else if target.contains::<Instrument>() {
        target.insert(ActiveInstrument);
        debug!(?entity, ?actor, "instrument interface opened");
    }
}

pub(crate) fn clean_instrument(world: &mut World, entity: Entity) {
    if let Some(mut instrument) = world.get_mut::<Instrument>(entity) {
        instrument.clean();
    }
}
