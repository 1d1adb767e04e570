use bevy_ecs::component::Component;

/// Entity metadata: the display name players see and the prototype the
/// entity was spawned from.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct EntityMeta {
    pub name: String,
    pub description: String,
    pub prototype: Option<String>,
}

impl EntityMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            prototype: None,
        }
    }

    pub fn with_prototype(mut self, prototype: impl Into<String>) -> Self {
        self.prototype = Some(prototype.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Meta-markers
// ---------------------------------------------------------------------------

/// Terminal marker left on a device that was destroyed by a microwave.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Bricked;
