use bevy_ecs::component::Component;

/// Lets a device be offered to ghosts by using it in hand.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ToggleableGhostRole {
    pub name_key: String,
    pub description_key: String,
}

/// An active ghost-role offer with localized text.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct GhostRole {
    pub name: String,
    pub description: String,
}

/// Present while ghosts may take over the entity.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct GhostTakeoverAvailable;
