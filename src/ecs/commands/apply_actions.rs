use std::time::Duration;

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use tracing::{debug, warn};

use crate::ecs::components::{ActionCooldown, SessionId};
use crate::ecs::resources::{DialogCallback, QuickDialogs};

use super::apply_metadata::now;

/// Start a cooldown of `length` on `action`, beginning now. Replaces any
/// running cooldown.
pub(crate) fn set_cooldown(world: &mut World, action: Entity, length: Duration) {
    let start = now(world);
    let Ok(mut target) = world.get_entity_mut(action) else {
        warn!(?action, "cooldown skipped: action no longer exists");
        return;
    };
    target.insert(ActionCooldown::starting_at(start, length));
}

pub(crate) fn open_dialog(
    world: &mut World,
    session: SessionId,
    title: String,
    prompt: String,
    on_submit: DialogCallback,
) {
    let opened_at = now(world);
    let Some(mut dialogs) = world.get_resource_mut::<QuickDialogs>() else {
        warn!(?session, "no dialog service, request dropped");
        return;
    };
    let id = dialogs.open(session, title, prompt, on_submit, opened_at);
    debug!(?session, ?id, "dialog opened");
}
