//! Dialog answers and action cooldown housekeeping.

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::query::With;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Commands, Query, Res, ResMut};
use tracing::{info, warn};

use crate::content::Localization;
use crate::ecs::clock::GameClock;
use crate::ecs::commands::HostCommand;
use crate::ecs::components::{ActionCooldown, EntityMeta, PaiDevice};
use crate::ecs::events::DialogResponse;
use crate::ecs::resources::{DialogCallback, PaiConfig, QuickDialogs};
use crate::ecs::schedule::{ServerPhase, ServerTick};

use super::ghost_role::handle_ghost_role_toggle;

pub struct ActionsPlugin;

impl Plugin for ActionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            ServerTick,
            resolve_dialogs
                .after(handle_ghost_role_toggle)
                .in_set(ServerPhase::Update),
        );
        app.add_systems(ServerTick, expire_cooldowns.in_set(ServerPhase::Reactions));
    }
}

/// Resolve submitted dialog answers into their callbacks.
///
/// The world may have moved on since the dialog was opened: answers for a
/// despawned performer or a device that was bricked meanwhile are dropped.
pub(crate) fn resolve_dialogs(
    mut responses: MessageReader<DialogResponse>,
    mut dialogs: ResMut<QuickDialogs>,
    devices: Query<(), With<PaiDevice>>,
    metas: Query<&EntityMeta>,
    loc: Res<Localization>,
    config: Res<PaiConfig>,
    mut commands: MessageWriter<HostCommand>,
) {
    for response in responses.read() {
        let (dialog, text) = match dialogs.submit(response.dialog, response.session, &response.text) {
            Ok(accepted) => accepted,
            Err(err) => {
                warn!(dialog = ?response.dialog, session = ?response.session, %err, "dialog answer rejected");
                continue;
            }
        };

        match dialog.on_submit {
            DialogCallback::RenamePerformer {
                item,
                performer,
                action,
                prefix_key,
            } => {
                if devices.get(item).is_err() {
                    warn!(?item, "rename dropped: device no longer works");
                    continue;
                }
                if metas.get(performer).is_err() {
                    warn!(?performer, "rename dropped: performer no longer exists");
                    continue;
                }

                let name = format!("{} {}", loc.format(&prefix_key, &[]), text);
                info!(?performer, %name, "device renamed");
                commands.write(HostCommand::SetEntityName {
                    entity: performer,
                    name,
                });
                commands.write(HostCommand::SetCooldown {
                    action,
                    length: config.rename_cooldown(),
                });
            }
        }
    }
}

/// Drop cooldowns that have run out.
pub(crate) fn expire_cooldowns(
    mut commands: Commands,
    clock: Res<GameClock>,
    cooldowns: Query<(Entity, &ActionCooldown)>,
) {
    for (entity, cooldown) in &cooldowns {
        if !cooldown.is_cooling_down(clock.elapsed) {
            commands.entity(entity).remove::<ActionCooldown>();
        }
    }
}
