use std::collections::BTreeMap;

use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

use super::{BUILTIN_PROTOTYPES, ContentError};
use crate::ecs::components::pai::{
    DEFAULT_BRICK_CHANCE, DEFAULT_BRICK_POPUP_KEY, DEFAULT_NAME_PREFIX_KEY, DEFAULT_OWNER_NAME_KEY,
    DEFAULT_RAW_NAME_KEY, DEFAULT_SCRAMBLE_POPUP_KEY,
};

/// Data-driven entity definition. The prototype name is what a device's
/// display name falls back to when it is switched off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityPrototype {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pai: Option<PaiPrototype>,
    #[serde(default)]
    pub instrument: Option<InstrumentPrototype>,
    #[serde(default)]
    pub ghost_role: Option<GhostRolePrototype>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaiPrototype {
    pub brick_chance: f64,
    pub owner_name_key: String,
    pub raw_name_key: String,
    pub name_prefix_key: String,
    pub brick_popup_key: String,
    pub scramble_popup_key: String,
}

impl Default for PaiPrototype {
    fn default() -> Self {
        Self {
            brick_chance: DEFAULT_BRICK_CHANCE,
            owner_name_key: DEFAULT_OWNER_NAME_KEY.to_string(),
            raw_name_key: DEFAULT_RAW_NAME_KEY.to_string(),
            name_prefix_key: DEFAULT_NAME_PREFIX_KEY.to_string(),
            brick_popup_key: DEFAULT_BRICK_POPUP_KEY.to_string(),
            scramble_popup_key: DEFAULT_SCRAMBLE_POPUP_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentPrototype {
    pub program: u8,
    pub bank: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhostRolePrototype {
    pub name_key: String,
    pub description_key: String,
}

/// All known prototypes, keyed by id.
#[derive(Resource, Debug, Clone, Default)]
pub struct PrototypeRegistry {
    prototypes: BTreeMap<String, EntityPrototype>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled-in prototypes.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_PROTOTYPES).unwrap_or_default()
    }

    pub fn from_json(source: &str) -> Result<Self, ContentError> {
        let mut registry = Self::new();
        registry.extend_from_json(source)?;
        Ok(registry)
    }

    /// Add every prototype in a JSON array. Ids must be unique across files.
    pub fn extend_from_json(&mut self, source: &str) -> Result<(), ContentError> {
        let parsed: Vec<EntityPrototype> = serde_json::from_str(source)?;
        for proto in parsed {
            self.insert(proto)?;
        }
        Ok(())
    }

    pub fn insert(&mut self, proto: EntityPrototype) -> Result<(), ContentError> {
        if self.prototypes.contains_key(&proto.id) {
            return Err(ContentError::DuplicatePrototype(proto.id));
        }
        self.prototypes.insert(proto.id.clone(), proto);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&EntityPrototype> {
        self.prototypes.get(id)
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pai_section_fills_defaults() {
        let registry = PrototypeRegistry::from_json(
            r#"[{ "id": "P", "name": "p", "pai": { "brick_chance": 0.1 } }]"#,
        )
        .unwrap();
        let pai = registry.get("P").unwrap().pai.clone().unwrap();
        assert_eq!(pai.brick_chance, 0.1);
        assert_eq!(pai.raw_name_key, DEFAULT_RAW_NAME_KEY);
        assert_eq!(pai.scramble_popup_key, DEFAULT_SCRAMBLE_POPUP_KEY);
    }

    #[test]
    fn plain_prototype_has_no_sections() {
        let registry = PrototypeRegistry::builtin();
        let microwave = registry.get("Microwave").unwrap();
        assert!(microwave.pai.is_none());
        assert!(microwave.instrument.is_none());
        assert!(microwave.ghost_role.is_none());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut registry = PrototypeRegistry::from_json(r#"[{ "id": "A", "name": "a" }]"#).unwrap();
        let err = registry
            .extend_from_json(r#"[{ "id": "A", "name": "again" }]"#)
            .unwrap_err();
        assert!(matches!(err, ContentError::DuplicatePrototype(id) if id == "A"));
        assert_eq!(registry.get("A").unwrap().name, "a");
    }
}
