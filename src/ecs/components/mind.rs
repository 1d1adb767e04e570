use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

use super::actions::SessionId;

/// A player's mind. Lives on its own entity and points at the body it
/// currently controls.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Mind {
    pub owned_entity: Option<Entity>,
    /// Session of the player behind this mind, if one is connected.
    pub session: Option<SessionId>,
}

/// Marks an entity that can be occupied by a mind.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MindContainer {
    pub mind: Option<Entity>,
}

impl MindContainer {
    pub fn has_mind(&self) -> bool {
        self.mind.is_some()
    }
}
