use std::time::Duration;

use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

/// Identifies a connected player session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

/// Attached to an entity a player session is currently controlling.
#[derive(Component, Debug, Clone, Copy)]
pub struct Actor {
    pub session: SessionId,
}

/// A reusable action granted to an entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct Action {
    pub owner: Entity,
}

/// Cooldown window on an action entity, in game-clock time.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ActionCooldown {
    pub start: Duration,
    pub end: Duration,
}

impl ActionCooldown {
    pub fn starting_at(now: Duration, length: Duration) -> Self {
        Self {
            start: now,
            end: now + length,
        }
    }

    pub fn is_cooling_down(&self, now: Duration) -> bool {
        now < self.end
    }

    pub fn remaining(&self, now: Duration) -> Duration {
        self.end.saturating_sub(now)
    }
}
