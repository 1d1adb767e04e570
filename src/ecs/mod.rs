pub mod app;
pub mod clock;
pub mod commands;
pub mod components;
pub mod events;
pub mod minds;
pub mod plugin;
pub mod resources;
pub mod schedule;
pub mod spawn;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use app::{build_server_app, build_server_app_with_config, build_server_app_with_content};
pub use clock::GameClock;
pub use commands::{HostCommand, apply_host_command, apply_host_commands, turn_off_device};
pub use components::{
    Action, ActionCooldown, ActiveInstrument, Actor, Bricked, DeviceStatus, EntityMeta, GhostRole,
    GhostTakeoverAvailable, Instrument, Mind, MindContainer, PaiDevice, SessionId,
    ToggleableGhostRole,
};
pub use events::{DialogResponse, ItemEvent, raise, respond};
pub use minds::transfer_mind;
pub use plugin::PaiPlugin;
pub use resources::{
    DialogCallback, DialogError, DialogId, EventLog, NameChange, PaiConfig, PaiRng, PendingDialog,
    Popup, PopupKind, QuickDialogs,
};
pub use schedule::{ServerPhase, ServerTick, configure_server_schedule};
pub use spawn::{spawn_body, spawn_from_prototype, spawn_mind};
pub use systems::{
    SCRAMBLE_MAX_LEN, SCRAMBLE_MIN_LEN, SCRAMBLE_SYMBOLS, device_status, scramble_symbols,
};
