use bevy_ecs::entity::Entity;
use bevy_ecs::message::{Message, Messages};
use bevy_ecs::world::World;
use tracing::warn;

use crate::ecs::components::{MindContainer, SessionId};
use crate::ecs::resources::dialogs::DialogId;

/// Events the host raises on an item entity.
///
/// Handlers read them in `ServerPhase::Update` in the order they were written.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum ItemEvent {
    /// `occupied` is whether a mind held the item when the event was raised.
    /// Build it with [`ItemEvent::use_in_hand`].
    UseInHand {
        item: Entity,
        user: Entity,
        occupied: bool,
    },
    MindAdded {
        item: Entity,
        mind: Entity,
    },
    MindRemoved {
        item: Entity,
        mind: Entity,
    },
    BeingMicrowaved {
        item: Entity,
        microwave: Entity,
    },
    /// The item's rename action was used. `performer` is the entity that
    /// gets renamed; `action` is the action entity that goes on cooldown.
    RenameAction {
        item: Entity,
        performer: Entity,
        action: Entity,
    },
}

impl ItemEvent {
    /// A use-in-hand event with the item's occupancy read from `world` now.
    /// Mind transfers later in the same tick do not change what the
    /// handlers see.
    pub fn use_in_hand(world: &World, item: Entity, user: Entity) -> Self {
        let occupied = world
            .get::<MindContainer>(item)
            .is_some_and(MindContainer::has_mind);
        Self::UseInHand {
            item,
            user,
            occupied,
        }
    }

    pub fn item(&self) -> Entity {
        match self {
            Self::UseInHand { item, .. }
            | Self::MindAdded { item, .. }
            | Self::MindRemoved { item, .. }
            | Self::BeingMicrowaved { item, .. }
            | Self::RenameAction { item, .. } => *item,
        }
    }
}

/// A player's answer to a quick dialog.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct DialogResponse {
    pub dialog: DialogId,
    pub session: SessionId,
    pub text: String,
}

/// Queue an item event for the next tick.
pub fn raise(world: &mut World, event: ItemEvent) {
    match world.get_resource_mut::<Messages<ItemEvent>>() {
        Some(mut messages) => {
            messages.write(event);
        }
        None => warn!(?event, "item events are not registered, event dropped"),
    }
}

/// Queue a dialog response for the next tick.
pub fn respond(world: &mut World, response: DialogResponse) {
    match world.get_resource_mut::<Messages<DialogResponse>>() {
        Some(mut messages) => {
            messages.write(response);
        }
        None => warn!(?response, "dialog responses are not registered, response dropped"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn use_in_hand_snapshots_occupancy() {
        let mut world = World::new();
        let user = world.spawn_empty().id();
        let mind = world.spawn_empty().id();
        let device = world.spawn(MindContainer::default()).id();

        let empty = ItemEvent::use_in_hand(&world, device, user);
        world.get_mut::<MindContainer>(device).unwrap().mind = Some(mind);
        let full = ItemEvent::use_in_hand(&world, device, user);

        assert!(matches!(empty, ItemEvent::UseInHand { occupied: false, .. }));
        assert!(matches!(full, ItemEvent::UseInHand { occupied: true, .. }));
        assert_eq!(empty.item(), device);
    }
}
