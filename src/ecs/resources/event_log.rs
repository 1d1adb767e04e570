use std::time::Duration;

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

/// Size/severity category of an on-screen popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Small,
    Medium,
    Large,
    LargeCaution,
}

/// A transient notification shown above an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub entity: Entity,
    pub message: String,
    pub kind: PopupKind,
    pub timestamp: Duration,
}

/// A recorded display-name change.
#[derive(Debug, Clone, PartialEq)]
pub struct NameChange {
    pub entity: Entity,
    pub old: String,
    pub new: String,
    pub timestamp: Duration,
}

/// Accumulates host-visible effects between drains: popups for clients and
/// an audit trail of name changes.
#[derive(Resource, Debug, Clone, Default)]
pub struct EventLog {
    pub popups: Vec<Popup>,
    pub name_changes: Vec<NameChange>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name changes recorded for one entity, oldest first.
    pub fn names_of(&self, entity: Entity) -> impl Iterator<Item = &NameChange> {
        self.name_changes.iter().filter(move |c| c.entity == entity)
    }

    pub fn popups_on(&self, entity: Entity) -> impl Iterator<Item = &Popup> {
        self.popups.iter().filter(move |p| p.entity == entity)
    }
}
