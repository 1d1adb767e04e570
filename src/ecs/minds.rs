use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use tracing::{debug, warn};

use super::components::{Actor, Mind, MindContainer};
use super::events::{ItemEvent, raise};

/// Move `mind` into `target`, or out of any body when `target` is `None`.
///
/// The body the mind leaves gets `MindRemoved`; the body it enters gets
/// `MindAdded`. A mind already in `target` is evicted first. The player's
/// `Actor` follows the mind when it carries a session.
pub fn transfer_mind(world: &mut World, mind: Entity, target: Option<Entity>) {
    let Some(state) = world.get::<Mind>(mind).copied() else {
        warn!(?mind, "cannot transfer: not a mind");
        return;
    };
    if state.owned_entity == target {
        return;
    }
    if let Some(body) = target {
        if world.get::<MindContainer>(body).is_none() {
            warn!(?mind, ?body, "cannot transfer: target cannot hold a mind");
            return;
        }
    }

    if let Some(old) = state.owned_entity {
        detach(world, mind, old);
    }

    let Some(body) = target else {
        return;
    };
    let previous = world.get::<MindContainer>(body).and_then(|c| c.mind);
    if let Some(previous) = previous {
        detach(world, previous, body);
    }

    if let Some(mut container) = world.get_mut::<MindContainer>(body) {
        container.mind = Some(mind);
    }
    if let Some(mut state) = world.get_mut::<Mind>(mind) {
        state.owned_entity = Some(body);
    }
    if let Some(session) = state.session {
        world.entity_mut(body).insert(Actor { session });
    }
    debug!(?mind, ?body, "mind transferred");
    raise(world, ItemEvent::MindAdded { item: body, mind });
}

fn detach(world: &mut World, mind: Entity, body: Entity) {
    match world.get_mut::<MindContainer>(body) {
        Some(mut container) if container.mind == Some(mind) => container.mind = None,
        _ => return,
    }
    if let Some(mut state) = world.get_mut::<Mind>(mind) {
        state.owned_entity = None;
    }
    if let Ok(mut entity) = world.get_entity_mut(body) {
        entity.remove::<Actor>();
    }
    raise(world, ItemEvent::MindRemoved { item: body, mind });
}

#[cfg(test)]
mod tests {
    use bevy_ecs::message::{MessageRegistry, Messages};

    use super::*;
    use crate::ecs::components::SessionId;

    fn world() -> World {
        let mut world = World::new();
        MessageRegistry::register_message::<ItemEvent>(&mut world);
        world
    }

    fn drain(world: &mut World) -> Vec<ItemEvent> {
        world
            .resource_mut::<Messages<ItemEvent>>()
            .drain()
            .collect()
    }

    #[test]
    fn transfer_between_bodies_raises_both_events() {
        let mut world = world();
        let mind = world
            .spawn(Mind {
                owned_entity: None,
                session: Some(SessionId(7)),
            })
            .id();
        let body = world.spawn(MindContainer::default()).id();
        let device = world.spawn(MindContainer::default()).id();

        transfer_mind(&mut world, mind, Some(body));
        assert_eq!(world.get::<Actor>(body).unwrap().session, SessionId(7));
        drain(&mut world);

        transfer_mind(&mut world, mind, Some(device));

        assert_eq!(
            drain(&mut world),
            vec![
                ItemEvent::MindRemoved { item: body, mind },
                ItemEvent::MindAdded { item: device, mind },
            ]
        );
        assert!(world.get::<Actor>(body).is_none());
        assert!(world.get::<Actor>(device).is_some());
        assert!(!world.get::<MindContainer>(body).unwrap().has_mind());
        assert_eq!(world.get::<Mind>(mind).unwrap().owned_entity, Some(device));
    }

    #[test]
    fn previous_occupant_is_evicted() {
        let mut world = world();
        let first = world.spawn(Mind::default()).id();
        let second = world.spawn(Mind::default()).id();
        let device = world.spawn(MindContainer::default()).id();

        transfer_mind(&mut world, first, Some(device));
        transfer_mind(&mut world, second, Some(device));

        assert!(world.get::<Mind>(first).unwrap().owned_entity.is_none());
        assert_eq!(world.get::<MindContainer>(device).unwrap().mind, Some(second));
        assert!(drain(&mut world).contains(&ItemEvent::MindRemoved {
            item: device,
            mind: first
        }));
    }

    #[test]
    fn target_without_container_is_refused() {
        let mut world = world();
        let mind = world.spawn(Mind::default()).id();
        let rock = world.spawn_empty().id();

        transfer_mind(&mut world, mind, Some(rock));

        assert!(world.get::<Mind>(mind).unwrap().owned_entity.is_none());
        assert!(drain(&mut world).is_empty());
    }

    #[test]
    fn ghosting_out_only_raises_removal() {
        let mut world = world();
        let mind = world.spawn(Mind::default()).id();
        let device = world.spawn(MindContainer::default()).id();
        transfer_mind(&mut world, mind, Some(device));
        drain(&mut world);

        transfer_mind(&mut world, mind, None);

        assert_eq!(
            drain(&mut world),
            vec![ItemEvent::MindRemoved { item: device, mind }]
        );
    }
}
