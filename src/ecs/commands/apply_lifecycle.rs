use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use tracing::{debug, info};

use crate::ecs::components::{
    ActiveInstrument, Actor, Bricked, GhostRole, GhostTakeoverAvailable, Mind, MindContainer, PaiDevice,
    ToggleableGhostRole,
};

use super::apply_instrument::{clean_instrument, toggle_instrument_ui};
use super::apply_metadata::reset_to_prototype_name;

/// Switch a device off: close its instrument interface, stop the instrument,
/// and restore the prototype name.
///
/// Idempotent. Does nothing for entities that are not (or no longer) devices.
pub fn turn_off_device(world: &mut World, entity: Entity) {
    if world.get::<PaiDevice>(entity).is_none() {
        return;
    }

    if world.get::<ActiveInstrument>(entity).is_some() {
        toggle_instrument_ui(world, entity, entity);
    }
    clean_instrument(world, entity);
    reset_to_prototype_name(world, entity);
    debug!(?entity, "device turned off");
}

/// Permanently disable a device. Terminal: the device components are removed
/// and a `Bricked` marker is left behind.
pub(crate) fn brick_device(world: &mut World, entity: Entity) {
    wipe_ghost_role(world, entity);

    let Ok(mut target) = world.get_entity_mut(entity) else {
        return;
    };
    target.remove::<(PaiDevice, ToggleableGhostRole)>();
    target.insert(Bricked);
    info!(?entity, "device bricked");
}

/// Withdraw any ghost-role offer and release the occupying mind.
///
/// The mind is detached silently: no `MindRemoved` event is raised, so the
/// device is not turned off and keeps whatever name it has.
pub(crate) fn wipe_ghost_role(world: &mut World, entity: Entity) {
    let released = world
        .get_mut::<MindContainer>(entity)
        .and_then(|mut container| container.mind.take());

    if let Some(mind) = released {
        if let Some(mut mind_state) = world.get_mut::<Mind>(mind) {
            if mind_state.owned_entity == Some(entity) {
                mind_state.owned_entity = None;
            }
        }
        debug!(?entity, ?mind, "mind wiped");
    }

    if let Ok(mut target) = world.get_entity_mut(entity) {
        target.remove::<(GhostRole, GhostTakeoverAvailable)>();
        if released.is_some() {
            target.remove::<Actor>();
        }
    }
}

/// Offer the entity to ghosts. Requires `ToggleableGhostRole`, so a device
/// bricked earlier in the same batch stays silent.
pub(crate) fn start_ghost_search(world: &mut World, entity: Entity, role: GhostRole) {
    let Ok(mut target) = world.get_entity_mut(entity) else {
        return;
    };
    if !target.contains::<ToggleableGhostRole>() {
        return;
    }
    target.insert((role, GhostTakeoverAvailable));
}

pub(crate) fn end_ghost_search(world: &mut World, entity: Entity) {
    if let Ok(mut target) = world.get_entity_mut(entity) {
        target.remove::<GhostTakeoverAvailable>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PrototypeRegistry;
    use crate::ecs::components::{EntityMeta, Instrument};

    fn world_with_registry() -> World {
        let mut world = World::new();
        world.insert_resource(PrototypeRegistry::builtin());
        world
    }

    #[test]
    fn turn_off_restores_prototype_name_and_stops_instrument() {
        let mut world = world_with_registry();
        let device = world
            .spawn((
                EntityMeta::new("Urist's pAI").with_prototype("PersonalAI"),
                PaiDevice::default(),
                Instrument {
                    playing: true,
                    ..Instrument::new(2, 0)
                },
                ActiveInstrument,
            ))
            .id();

        turn_off_device(&mut world, device);

        assert_eq!(world.get::<EntityMeta>(device).unwrap().name, "personal ai device");
        assert!(world.get::<ActiveInstrument>(device).is_none());
        assert!(!world.get::<Instrument>(device).unwrap().playing);
    }

    #[test]
    fn turn_off_without_prototype_keeps_name() {
        let mut world = world_with_registry();
        let device = world
            .spawn((EntityMeta::new("handmade pAI"), PaiDevice::default()))
            .id();

        turn_off_device(&mut world, device);
        turn_off_device(&mut world, device);

        assert_eq!(world.get::<EntityMeta>(device).unwrap().name, "handmade pAI");
    }

    #[test]
    fn turn_off_ignores_non_devices() {
        let mut world = world_with_registry();
        let thing = world
            .spawn((
                EntityMeta::new("renamed microwave").with_prototype("Microwave"),
                ActiveInstrument,
            ))
            .id();

        turn_off_device(&mut world, thing);

        assert_eq!(world.get::<EntityMeta>(thing).unwrap().name, "renamed microwave");
        assert!(world.get::<ActiveInstrument>(thing).is_some());
    }

    #[test]
    fn ghost_search_needs_toggle() {
        let mut world = world_with_registry();
        let role = GhostRole {
            name: "personal ai".into(),
            description: "d".into(),
        };
        let plain = world.spawn(EntityMeta::new("rock")).id();
        start_ghost_search(&mut world, plain, role.clone());
        assert!(world.get::<GhostTakeoverAvailable>(plain).is_none());

        let toggle = world
            .spawn(ToggleableGhostRole {
                name_key: "n".into(),
                description_key: "d".into(),
            })
            .id();
        start_ghost_search(&mut world, toggle, role);
        assert!(world.get::<GhostTakeoverAvailable>(toggle).is_some());

        end_ghost_search(&mut world, toggle);
        assert!(world.get::<GhostTakeoverAvailable>(toggle).is_none());
        assert!(world.get::<GhostRole>(toggle).is_some());
    }

    #[test]
    fn brick_strips_device_and_releases_mind() {
        let mut world = world_with_registry();
        let mind = world.spawn(Mind::default()).id();
        let device = world
            .spawn((
                EntityMeta::new("pAI"),
                PaiDevice::default(),
                ToggleableGhostRole {
                    name_key: "n".into(),
                    description_key: "d".into(),
                },
                GhostTakeoverAvailable,
                MindContainer { mind: Some(mind) },
            ))
            .id();
        world.get_mut::<Mind>(mind).unwrap().owned_entity = Some(device);

        brick_device(&mut world, device);

        assert!(world.get::<PaiDevice>(device).is_none());
        assert!(world.get::<ToggleableGhostRole>(device).is_none());
        assert!(world.get::<GhostTakeoverAvailable>(device).is_none());
        assert!(world.get::<Bricked>(device).is_some());
        assert!(!world.get::<MindContainer>(device).unwrap().has_mind());
        assert!(world.get::<Mind>(mind).unwrap().owned_entity.is_none());
        assert_eq!(world.get::<EntityMeta>(device).unwrap().name, "pAI");
    }
}
