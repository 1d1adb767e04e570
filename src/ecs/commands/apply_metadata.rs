use std::time::Duration;

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use tracing::{debug, warn};

use crate::content::PrototypeRegistry;
use crate::ecs::clock::GameClock;
use crate::ecs::components::EntityMeta;
use crate::ecs::resources::{EventLog, NameChange, Popup, PopupKind};

pub(crate) fn now(world: &World) -> Duration {
    world
        .get_resource::<GameClock>()
        .map(|clock| clock.elapsed)
        .unwrap_or_default()
}

/// Set the display name and record the change. Setting the current name again
/// is a no-op.
pub(crate) fn set_entity_name(world: &mut World, entity: Entity, name: String) {
    let timestamp = now(world);
    let old = {
        let Some(mut meta) = world.get_mut::<EntityMeta>(entity) else {
            warn!(?entity, "rename skipped: entity has no metadata");
            return;
        };
        if meta.name == name {
            return;
        }
        std::mem::replace(&mut meta.name, name.clone())
    };
    if let Some(mut log) = world.get_resource_mut::<EventLog>() {
        log.name_changes.push(NameChange {
            entity,
            old,
            new: name,
            timestamp,
        });
    }
}

/// Restore the name declared by the entity's prototype. Entities without a
/// prototype keep their current name.
pub(crate) fn reset_to_prototype_name(world: &mut World, entity: Entity) {
    let Some(proto_id) = world
        .get::<EntityMeta>(entity)
        .and_then(|meta| meta.prototype.clone())
    else {
        return;
    };
    let Some(name) = world
        .get_resource::<PrototypeRegistry>()
        .and_then(|registry| registry.get(&proto_id))
        .map(|proto| proto.name.clone())
    else {
        debug!(?entity, %proto_id, "unknown prototype, name left as is");
        return;
    };
    set_entity_name(world, entity, name);
}

pub(crate) fn popup(world: &mut World, entity: Entity, message: String, kind: PopupKind) {
    if world.get_entity(entity).is_err() {
        return;
    }
    let timestamp = now(world);
    if let Some(mut log) = world.get_resource_mut::<EventLog>() {
        log.popups.push(Popup {
            entity,
            message,
            kind,
            timestamp,
        });
    }
}
