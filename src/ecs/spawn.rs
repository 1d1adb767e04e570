use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use tracing::warn;

use crate::content::PrototypeRegistry;
use crate::ecs::components::*;

/// Spawn an entity from a registered prototype.
///
/// Device prototypes also get an empty `MindContainer` and a rename action
/// entity linked through `PaiDevice::rename_action`. Returns `None` for an
/// unknown prototype id.
pub fn spawn_from_prototype(world: &mut World, proto_id: &str) -> Option<Entity> {
    let Some(proto) = world
        .get_resource::<PrototypeRegistry>()
        .and_then(|registry| registry.get(proto_id))
        .cloned()
    else {
        warn!(%proto_id, "cannot spawn unknown prototype");
        return None;
    };

    let entity = world
        .spawn(EntityMeta {
            name: proto.name,
            description: proto.description,
            prototype: Some(proto.id),
        })
        .id();

    if let Some(pai) = &proto.pai {
        let action = world.spawn(Action { owner: entity }).id();
        let mut device = PaiDevice::from_prototype(pai);
        device.rename_action = Some(action);
        world
            .entity_mut(entity)
            .insert((device, MindContainer::default()));
    }
    if let Some(instrument) = &proto.instrument {
        world
            .entity_mut(entity)
            .insert(Instrument::new(instrument.program, instrument.bank));
    }
    if let Some(role) = proto.ghost_role {
        world.entity_mut(entity).insert(ToggleableGhostRole {
            name_key: role.name_key,
            description_key: role.description_key,
        });
    }

    Some(entity)
}

/// Spawn a mind, optionally bound to a player session.
pub fn spawn_mind(world: &mut World, session: Option<SessionId>) -> Entity {
    world
        .spawn(Mind {
            owned_entity: None,
            session,
        })
        .id()
}

/// Spawn a named body that can hold a mind. Used for players and NPCs.
pub fn spawn_body(world: &mut World, name: impl Into<String>) -> Entity {
    world
        .spawn((EntityMeta::new(name), MindContainer::default()))
        .id()
}
