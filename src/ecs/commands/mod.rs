pub mod applicator;
mod apply_actions;
mod apply_instrument;
mod apply_lifecycle;
mod apply_metadata;

use std::time::Duration;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::ecs::components::{GhostRole, SessionId};
use crate::ecs::resources::{DialogCallback, PopupKind};

pub use applicator::{apply_host_command, apply_host_commands};
pub use apply_lifecycle::turn_off_device;

/// A request for a host service or a host-owned state change.
///
/// Systems emit these via `MessageWriter<HostCommand>`. The applicator in
/// `ServerPhase::PostUpdate` applies them in the order they were written.
/// Commands aimed at entities that no longer exist are skipped.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum HostCommand {
    // -- Metadata --
    SetEntityName {
        entity: Entity,
        name: String,
    },

    // -- Notifications --
    Popup {
        entity: Entity,
        message: String,
        kind: PopupKind,
    },

    // -- Instruments --
    ToggleInstrumentUi {
        entity: Entity,
        actor: Entity,
    },

    // -- Device lifecycle --
    /// Close the instrument, stop it, and restore the prototype name.
    TurnOff {
        entity: Entity,
    },
    /// Wipe the ghost role and strip the device components for good.
    Brick {
        entity: Entity,
    },
    /// Offer the entity to ghosts.
    StartGhostSearch {
        entity: Entity,
        role: GhostRole,
    },
    /// Stop offering the entity to ghosts. The role description stays.
    EndGhostSearch {
        entity: Entity,
    },

    // -- Actions & dialogs --
    SetCooldown {
        action: Entity,
        length: Duration,
    },
    OpenDialog {
        session: SessionId,
        title: String,
        prompt: String,
        on_submit: DialogCallback,
    },
}
