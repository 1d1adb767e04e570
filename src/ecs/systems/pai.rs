//! Personal AI device behaviour.
//!
//! One reaction system (Update phase) handles every `ItemEvent` aimed at an
//! entity with a `PaiDevice`:
//! - `UseInHand`: remember the user as owner while the device is empty
//! - `MindAdded`: tag the name with the remembered owner
//! - `MindRemoved`: turn the device off
//! - `BeingMicrowaved`: scramble the name, maybe brick the device
//! - `RenameAction`: ask the player for a new name
//!
//! State changes outside the device component go through `HostCommand`s.

use std::collections::HashSet;

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};
use bevy_ecs::world::World;
use rand::Rng;
use tracing::{debug, info};

use crate::content::Localization;
use crate::ecs::clock::GameClock;
use crate::ecs::commands::HostCommand;
use crate::ecs::components::{
    ActionCooldown, ActiveInstrument, Actor, Bricked, DeviceStatus, EntityMeta, PaiDevice,
};
use crate::ecs::events::ItemEvent;
use crate::ecs::resources::{DialogCallback, PaiRng, PopupKind};
use crate::ecs::schedule::{ServerPhase, ServerTick};

/// Symbols a scrambled name is built from.
pub const SCRAMBLE_SYMBOLS: [char; 10] = ['#', '~', '-', '@', '&', '^', '%', '$', '*', ' '];
/// Shortest scrambled name.
pub const SCRAMBLE_MIN_LEN: usize = 6;
/// Scrambled names are strictly shorter than this.
pub const SCRAMBLE_MAX_LEN: usize = 18;

pub const RENAME_DIALOG_TITLE: &str = "Rename";
pub const RENAME_DIALOG_PROMPT: &str = "Name";

/// Generate a random run of symbols with length in [6, 18).
pub fn scramble_symbols(rng: &mut impl Rng) -> String {
    let len = rng.random_range(SCRAMBLE_MIN_LEN..SCRAMBLE_MAX_LEN);
    (0..len)
        .map(|_| SCRAMBLE_SYMBOLS[rng.random_range(0..SCRAMBLE_SYMBOLS.len())])
        .collect()
}

/// Current functional status, or `None` if the entity was never a device.
pub fn device_status(world: &World, entity: Entity) -> Option<DeviceStatus> {
    if world.get::<Bricked>(entity).is_some() {
        return Some(DeviceStatus::Bricked);
    }
    world.get::<PaiDevice>(entity)?;
    if world.get::<ActiveInstrument>(entity).is_some() {
        Some(DeviceStatus::InstrumentOpen)
    } else {
        Some(DeviceStatus::Active)
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn handle_device_events(
    mut events: MessageReader<ItemEvent>,
    mut devices: Query<&mut PaiDevice>,
    metas: Query<&EntityMeta>,
    actors: Query<&Actor>,
    cooldowns: Query<&ActionCooldown>,
    loc: Res<Localization>,
    clock: Res<GameClock>,
    mut rng: ResMut<PaiRng>,
    mut commands: MessageWriter<HostCommand>,
) {
    // Devices bricked earlier in this batch; their components are only
    // removed when the commands are applied.
    let mut bricked: HashSet<Entity> = HashSet::new();

    for event in events.read() {
        let item = event.item();
        if bricked.contains(&item) {
            continue;
        }
        let Ok(mut device) = devices.get_mut(item) else {
            continue;
        };

        match event {
            ItemEvent::UseInHand { user, occupied, .. } => {
                if !occupied {
                    device.last_holder = Some(*user);
                }
            }

            ItemEvent::MindAdded { .. } => {
                let Some(holder) = device.last_holder else {
                    continue;
                };
                let Ok(owner) = metas.get(holder) else {
                    debug!(?item, ?holder, "last holder is gone, name unchanged");
                    continue;
                };
                // TODO: the owner's name is readable by anyone who sees the
                // device; decide whether ownership should follow identity.
                let name = loc.format(&device.owner_name_key, &[("owner", owner.name.as_str())]);
                commands.write(HostCommand::SetEntityName { entity: item, name });
            }

            ItemEvent::MindRemoved { .. } => {
                commands.write(HostCommand::TurnOff { entity: item });
            }

            ItemEvent::BeingMicrowaved { .. } => {
                // The scrambled name is applied whether or not the device survives.
                let symbols = scramble_symbols(&mut rng.rng);
                let name = loc.format(&device.raw_name_key, &[("name", symbols.as_str())]);
                commands.write(HostCommand::SetEntityName { entity: item, name });

                if rng.rng.random::<f64>() < device.brick_chance {
                    commands.write(HostCommand::Popup {
                        entity: item,
                        message: loc.format(&device.brick_popup_key, &[]),
                        kind: PopupKind::LargeCaution,
                    });
                    commands.write(HostCommand::Brick { entity: item });
                    bricked.insert(item);
                    info!(?item, "microwave bricked device");
                } else {
                    commands.write(HostCommand::Popup {
                        entity: item,
                        message: loc.format(&device.scramble_popup_key, &[]),
                        kind: PopupKind::Large,
                    });
                }
            }

            ItemEvent::RenameAction {
                performer, action, ..
            } => {
                let Ok(actor) = actors.get(item) else {
                    debug!(?item, "rename ignored: no player session");
                    continue;
                };
                if cooldowns
                    .get(*action)
                    .is_ok_and(|cd| cd.is_cooling_down(clock.elapsed))
                {
                    debug!(?item, ?action, "rename ignored: action cooling down");
                    continue;
                }
                commands.write(HostCommand::OpenDialog {
                    session: actor.session,
                    title: RENAME_DIALOG_TITLE.to_string(),
                    prompt: RENAME_DIALOG_PROMPT.to_string(),
                    on_submit: DialogCallback::RenamePerformer {
                        item,
                        performer: *performer,
                        action: *action,
                        prefix_key: device.name_prefix_key.clone(),
                    },
                });
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Plugin registration
// ---------------------------------------------------------------------------

pub struct DevicePlugin;

impl Plugin for DevicePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(ServerTick, handle_device_events.in_set(ServerPhase::Update));
    }
}
