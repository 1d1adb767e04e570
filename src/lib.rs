pub mod content;
pub mod ecs;
pub mod scenario;

pub use content::{ContentError, EntityPrototype, Localization, PrototypeRegistry, load_dir};
pub use scenario::{PlayerIds, Scenario};
