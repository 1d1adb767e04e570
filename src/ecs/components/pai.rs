use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

use crate::content::prototypes::PaiPrototype;

pub const DEFAULT_BRICK_CHANCE: f64 = 0.5;
pub const DEFAULT_OWNER_NAME_KEY: &str = "pai-system-pai-name";
pub const DEFAULT_RAW_NAME_KEY: &str = "pai-system-pai-name-raw";
pub const DEFAULT_NAME_PREFIX_KEY: &str = "pai-system-name-prefix";
pub const DEFAULT_BRICK_POPUP_KEY: &str = "pai-system-brick-popup";
pub const DEFAULT_SCRAMBLE_POPUP_KEY: &str = "pai-system-scramble-popup";

/// Personal AI device state. One per device entity.
///
/// Removing this component is how a device is permanently disabled.
#[derive(Component, Debug, Clone)]
pub struct PaiDevice {
    /// Last entity to use the device in hand while no mind occupied it.
    /// Not cleared when a mind arrives; may be stale afterwards.
    pub last_holder: Option<Entity>,
    /// Action entity used to trigger a self-rename, if one was granted.
    pub rename_action: Option<Entity>,
    pub owner_name_key: String,
    pub raw_name_key: String,
    pub name_prefix_key: String,
    /// Probability in [0, 1] that microwaving bricks the device.
    pub brick_chance: f64,
    pub brick_popup_key: String,
    pub scramble_popup_key: String,
}

impl Default for PaiDevice {
    fn default() -> Self {
        Self::from_prototype(&PaiPrototype::default())
    }
}

impl PaiDevice {
    pub fn from_prototype(proto: &PaiPrototype) -> Self {
        Self {
            last_holder: None,
            rename_action: None,
            owner_name_key: proto.owner_name_key.clone(),
            raw_name_key: proto.raw_name_key.clone(),
            name_prefix_key: proto.name_prefix_key.clone(),
            brick_chance: proto.brick_chance.clamp(0.0, 1.0),
            brick_popup_key: proto.brick_popup_key.clone(),
            scramble_popup_key: proto.scramble_popup_key.clone(),
        }
    }
}

/// Observable functional status of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    Active,
    /// Active with the instrument interface open.
    InstrumentOpen,
    /// Destroyed by a microwave. Terminal.
    Bricked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brick_chance_clamped_from_prototype() {
        let proto = PaiPrototype {
            brick_chance: 1.7,
            ..PaiPrototype::default()
        };
        assert_eq!(PaiDevice::from_prototype(&proto).brick_chance, 1.0);
    }

    #[test]
    fn defaults_use_standard_keys() {
        let device = PaiDevice::default();
        assert_eq!(device.owner_name_key, DEFAULT_OWNER_NAME_KEY);
        assert_eq!(device.brick_chance, DEFAULT_BRICK_CHANCE);
        assert!(device.last_holder.is_none());
    }
}
