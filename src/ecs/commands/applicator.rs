use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use super::HostCommand;
use super::apply_actions;
use super::apply_instrument;
use super::apply_lifecycle;
use super::apply_metadata;

/// Exclusive system that drains all pending `HostCommand` messages and
/// applies them in order.
///
/// Runs in `ServerPhase::PostUpdate`.
pub fn apply_host_commands(world: &mut World) {
    let commands: Vec<HostCommand> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<HostCommand>>() else {
            return;
        };
        messages.drain().collect()
    };

    for cmd in commands {
        apply_host_command(world, cmd);
    }
}

/// Apply a single command immediately.
pub fn apply_host_command(world: &mut World, cmd: HostCommand) {
    match cmd {
        // Metadata
        HostCommand::SetEntityName { entity, name } => {
            apply_metadata::set_entity_name(world, entity, name);
        }

        // Notifications
        HostCommand::Popup {
            entity,
            message,
            kind,
        } => {
            apply_metadata::popup(world, entity, message, kind);
        }

        // Instruments
        HostCommand::ToggleInstrumentUi { entity, actor } => {
            apply_instrument::toggle_instrument_ui(world, entity, actor);
        }

        // Device lifecycle
        HostCommand::TurnOff { entity } => {
            apply_lifecycle::turn_off_device(world, entity);
        }
        HostCommand::Brick { entity } => {
            apply_lifecycle::brick_device(world, entity);
        }
        HostCommand::StartGhostSearch { entity, role } => {
            apply_lifecycle::start_ghost_search(world, entity, role);
        }
        HostCommand::EndGhostSearch { entity } => {
            apply_lifecycle::end_ghost_search(world, entity);
        }

        // Actions & dialogs
        HostCommand::SetCooldown { action, length } => {
            apply_actions::set_cooldown(world, action, length);
        }
        HostCommand::OpenDialog {
            session,
            title,
            prompt,
            on_submit,
        } => {
            apply_actions::open_dialog(world, session, title, prompt, on_submit);
        }
    }
}
