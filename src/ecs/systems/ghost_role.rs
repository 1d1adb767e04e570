use std::collections::HashMap;

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::query::Has;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res};

use crate::content::Localization;
use crate::ecs::commands::HostCommand;
use crate::ecs::components::{GhostRole, GhostTakeoverAvailable, ToggleableGhostRole};
use crate::ecs::events::ItemEvent;
use crate::ecs::resources::PopupKind;
use crate::ecs::schedule::{ServerPhase, ServerTick};

use super::pai::handle_device_events;

pub const SEARCHING_POPUP_KEY: &str = "pai-system-searching";
pub const STILL_SEARCHING_POPUP_KEY: &str = "pai-system-still-searching";

pub struct GhostRolePlugin;

impl Plugin for GhostRolePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            ServerTick,
            handle_ghost_role_toggle
                .after(handle_device_events)
                .in_set(ServerPhase::Update),
        );
    }
}

/// Using a toggleable entity in hand while it was empty offers it to ghosts.
/// A mind arriving ends the offer.
pub(crate) fn handle_ghost_role_toggle(
    mut events: MessageReader<ItemEvent>,
    toggles: Query<(&ToggleableGhostRole, Has<GhostTakeoverAvailable>)>,
    loc: Res<Localization>,
    mut commands: MessageWriter<HostCommand>,
) {
    // Search state changed earlier in this batch; the components only change
    // once the commands are applied.
    let mut pending: HashMap<Entity, bool> = HashMap::new();

    for event in events.read() {
        let item = match event {
            ItemEvent::UseInHand {
                item,
                occupied: false,
                ..
            } => item,
            ItemEvent::MindAdded { item, .. } => {
                let searching = toggles.get(*item).is_ok_and(|(_, searching)| {
                    pending.get(item).copied().unwrap_or(searching)
                });
                if searching {
                    commands.write(HostCommand::EndGhostSearch { entity: *item });
                    pending.insert(*item, false);
                }
                continue;
            }
            _ => continue,
        };
        let Ok((toggle, searching)) = toggles.get(*item) else {
            continue;
        };
        let searching = pending.get(item).copied().unwrap_or(searching);

        if searching {
            commands.write(HostCommand::Popup {
                entity: *item,
                message: loc.format(STILL_SEARCHING_POPUP_KEY, &[]),
                kind: PopupKind::Small,
            });
            continue;
        }

        commands.write(HostCommand::StartGhostSearch {
            entity: *item,
            role: GhostRole {
                name: loc.format(&toggle.name_key, &[]),
                description: loc.format(&toggle.description_key, &[]),
            },
        });
        commands.write(HostCommand::Popup {
            entity: *item,
            message: loc.format(SEARCHING_POPUP_KEY, &[]),
            kind: PopupKind::Medium,
        });
        pending.insert(*item, true);
    }
}
