pub mod actions;
pub mod ghost_role;
pub mod pai;

pub use actions::ActionsPlugin;
pub use ghost_role::GhostRolePlugin;
pub use pai::{
    DevicePlugin, SCRAMBLE_MAX_LEN, SCRAMBLE_MIN_LEN, SCRAMBLE_SYMBOLS, device_status,
    scramble_symbols,
};
