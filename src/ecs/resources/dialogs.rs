use std::collections::BTreeMap;
use std::time::Duration;

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

use crate::ecs::components::SessionId;

/// Token identifying one open dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DialogId(pub u64);

/// What to do with the answer once the player submits it.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogCallback {
    /// Rename `performer` to `"{prefix} {text}"` and put `action` on cooldown.
    /// `item` must still be a working device when the answer arrives.
    RenamePerformer {
        item: Entity,
        performer: Entity,
        action: Entity,
        prefix_key: String,
    },
}

/// A dialog waiting for its player's answer.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDialog {
    pub id: DialogId,
    pub session: SessionId,
    pub title: String,
    pub prompt: String,
    pub on_submit: DialogCallback,
    pub opened_at: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    #[error("no open dialog with id {0:?}")]
    UnknownDialog(DialogId),

    #[error("dialog {dialog:?} belongs to another session")]
    WrongSession { dialog: DialogId },

    #[error("dialog answer is empty")]
    EmptyInput,

    #[error("dialog answer is longer than {max} characters")]
    TooLong { max: usize },
}

/// Open single-field text dialogs, keyed by id.
///
/// There is no cancellation or timeout: a dialog stays open until a valid
/// answer from its own session arrives.
#[derive(Resource, Debug, Clone)]
pub struct QuickDialogs {
    next_id: u64,
    max_length: usize,
    pending: BTreeMap<DialogId, PendingDialog>,
}

impl Default for QuickDialogs {
    fn default() -> Self {
        Self::new(100)
    }
}

impl QuickDialogs {
    pub fn new(max_length: usize) -> Self {
        Self {
            next_id: 1,
            max_length,
            pending: BTreeMap::new(),
        }
    }

    pub fn open(
        &mut self,
        session: SessionId,
        title: impl Into<String>,
        prompt: impl Into<String>,
        on_submit: DialogCallback,
        now: Duration,
    ) -> DialogId {
        let id = DialogId(self.next_id);
        self.next_id += 1;
        self.pending.insert(
            id,
            PendingDialog {
                id,
                session,
                title: title.into(),
                prompt: prompt.into(),
                on_submit,
                opened_at: now,
            },
        );
        id
    }

    pub fn get(&self, id: DialogId) -> Option<&PendingDialog> {
        self.pending.get(&id)
    }

    pub fn pending_for(&self, session: SessionId) -> impl Iterator<Item = &PendingDialog> {
        self.pending.values().filter(move |d| d.session == session)
    }

    /// Validate an answer and close the dialog, returning it with the trimmed text.
    ///
    /// Rejected answers leave the dialog open so the player can try again.
    pub fn submit(
        &mut self,
        id: DialogId,
        session: SessionId,
        text: &str,
    ) -> Result<(PendingDialog, String), DialogError> {
        let dialog = self.pending.get(&id).ok_or(DialogError::UnknownDialog(id))?;
        if dialog.session != session {
            return Err(DialogError::WrongSession { dialog: id });
        }

        let text = text.trim();
        if text.is_empty() {
            return Err(DialogError::EmptyInput);
        }
        if text.chars().count() > self.max_length {
            return Err(DialogError::TooLong {
                max: self.max_length,
            });
        }

        let dialog = self
            .pending
            .remove(&id)
            .ok_or(DialogError::UnknownDialog(id))?;
        Ok((dialog, text.to_string()))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use bevy_ecs::world::World;

    use super::*;

    fn callback(world: &mut World) -> DialogCallback {
        let item = world.spawn_empty().id();
        let action = world.spawn_empty().id();
        DialogCallback::RenamePerformer {
            item,
            performer: item,
            action,
            prefix_key: "prefix".to_string(),
        }
    }

    #[test]
    fn ids_are_sequential() {
        let mut world = World::new();
        let mut dialogs = QuickDialogs::default();
        let a = dialogs.open(SessionId(1), "Rename", "Name", callback(&mut world), Duration::ZERO);
        let b = dialogs.open(SessionId(1), "Rename", "Name", callback(&mut world), Duration::ZERO);
        assert_eq!(a, DialogId(1));
        assert_eq!(b, DialogId(2));
        assert_eq!(dialogs.pending_for(SessionId(1)).count(), 2);
    }

    #[test]
    fn submit_trims_and_closes() {
        let mut world = World::new();
        let mut dialogs = QuickDialogs::default();
        let id = dialogs.open(SessionId(3), "Rename", "Name", callback(&mut world), Duration::ZERO);

        let (dialog, text) = dialogs.submit(id, SessionId(3), "  Bob \n").unwrap();
        assert_eq!(dialog.id, id);
        assert_eq!(text, "Bob");
        assert!(dialogs.is_empty());
        assert_eq!(
            dialogs.submit(id, SessionId(3), "Bob"),
            Err(DialogError::UnknownDialog(id))
        );
    }

    #[test]
    fn rejected_answers_keep_dialog_open() {
        let mut world = World::new();
        let mut dialogs = QuickDialogs::new(5);
        let id = dialogs.open(SessionId(3), "Rename", "Name", callback(&mut world), Duration::ZERO);

        assert_eq!(
            dialogs.submit(id, SessionId(4), "Bob").unwrap_err(),
            DialogError::WrongSession { dialog: id }
        );
        assert_eq!(dialogs.submit(id, SessionId(3), "   ").unwrap_err(), DialogError::EmptyInput);
        assert_eq!(
            dialogs.submit(id, SessionId(3), "Bartholomew").unwrap_err(),
            DialogError::TooLong { max: 5 }
        );
        assert!(dialogs.get(id).is_some());
        assert!(dialogs.submit(id, SessionId(3), "Bart").is_ok());
    }
}
