use std::time::Duration;

use bevy_ecs::resource::Resource;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Deserialize;

/// Server configuration for the device systems. Every field has a default,
/// so a partial JSON document is a valid override.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaiConfig {
    pub seed: u64,
    /// Ticks per second of game time.
    pub tick_rate: u32,
    /// Cooldown applied to the rename action after a successful rename.
    pub rename_cooldown_secs: u64,
    /// Longest accepted dialog answer, in characters, after trimming.
    pub dialog_max_length: usize,
}

impl Default for PaiConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: 30,
            rename_cooldown_secs: 300,
            dialog_max_length: 100,
        }
    }
}

impl PaiConfig {
    pub fn from_json_str(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn rename_cooldown(&self) -> Duration {
        Duration::from_secs(self.rename_cooldown_secs)
    }
}

/// Deterministic RNG shared by the device handlers.
#[derive(Resource)]
pub struct PaiRng {
    pub rng: SmallRng,
    pub seed: u64,
}

impl PaiRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PaiConfig::from_json_str(r#"{ "seed": 7, "rename_cooldown_secs": 60 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.rename_cooldown(), Duration::from_secs(60));
        assert_eq!(config.tick_rate, 30);
        assert_eq!(config.dialog_max_length, 100);
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(PaiConfig::from_json_str("{}").unwrap(), PaiConfig::default());
    }
}
