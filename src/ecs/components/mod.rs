pub mod actions;
pub mod common;
pub mod ghost_role;
pub mod instrument;
pub mod mind;
pub mod pai;

pub use actions::{Action, ActionCooldown, Actor, SessionId};
pub use common::{Bricked, EntityMeta};
pub use ghost_role::{GhostRole, GhostTakeoverAvailable, ToggleableGhostRole};
pub use instrument::{ActiveInstrument, Instrument};
pub use mind::{Mind, MindContainer};
pub use pai::{DeviceStatus, PaiDevice};
