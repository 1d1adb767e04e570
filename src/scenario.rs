use bevy_app::App;
use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::app::build_server_app_with_config;
use crate::ecs::components::{EntityMeta, PaiDevice, SessionId};
use crate::ecs::events::{DialogResponse, ItemEvent, raise, respond};
use crate::ecs::minds::transfer_mind;
use crate::ecs::resources::{DialogId, EventLog, PaiConfig, QuickDialogs};
use crate::ecs::schedule::ServerTick;
use crate::ecs::spawn::{spawn_body, spawn_from_prototype, spawn_mind};

/// Entities returned by [`Scenario::add_player`].
#[derive(Debug, Clone, Copy)]
pub struct PlayerIds {
    pub body: Entity,
    pub mind: Entity,
    pub session: SessionId,
}

/// Builder for a small server world with devices and players.
///
/// Wraps a fully built app, so every helper acts on live state and
/// [`Scenario::tick`] runs the real schedule.
pub struct Scenario {
    app: App,
    next_session: u64,
}

impl Scenario {
    pub fn new(seed: u64) -> Self {
        Self::with_config(PaiConfig {
            seed,
            ..PaiConfig::default()
        })
    }

    pub fn with_config(config: PaiConfig) -> Self {
        Self {
            app: build_server_app_with_config(config),
            next_session: 1,
        }
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn into_app(self) -> App {
        self.app
    }

    /// Spawn a standard personal AI device.
    pub fn add_device(&mut self) -> Entity {
        self.add_from_prototype("PersonalAI")
    }

    /// Spawn any registered prototype.
    ///
    /// # Panics
    /// If the prototype is not registered.
    pub fn add_from_prototype(&mut self, proto_id: &str) -> Entity {
        spawn_from_prototype(self.world_mut(), proto_id)
            .unwrap_or_else(|| panic!("prototype {proto_id} is not registered"))
    }

    /// Spawn a connected player: a body, a mind with a fresh session, and the
    /// mind placed in the body. One tick runs so the placement events are consumed.
    pub fn add_player(&mut self, name: &str) -> PlayerIds {
        let session = SessionId(self.next_session);
        self.next_session += 1;

        let world = self.world_mut();
        let body = spawn_body(world, name);
        let mind = spawn_mind(world, Some(session));
        transfer_mind(world, mind, Some(body));
        self.tick(1);

        PlayerIds { body, mind, session }
    }

    /// Spawn a mind with no player behind it.
    pub fn add_mind(&mut self) -> Entity {
        spawn_mind(self.world_mut(), None)
    }

    pub fn raise(&mut self, event: ItemEvent) -> &mut Self {
        raise(self.world_mut(), event);
        self
    }

    pub fn use_in_hand(&mut self, item: Entity, user: Entity) -> &mut Self {
        let event = ItemEvent::use_in_hand(self.world(), item, user);
        self.raise(event)
    }

    pub fn microwave(&mut self, item: Entity, microwave: Entity) -> &mut Self {
        self.raise(ItemEvent::BeingMicrowaved { item, microwave })
    }

    /// Move `mind` into `target` (or out, with `None`) and run one tick so the
    /// resulting events are handled.
    pub fn transfer(&mut self, mind: Entity, target: Option<Entity>) -> &mut Self {
        transfer_mind(self.world_mut(), mind, target);
        self.tick(1)
    }

    /// Trigger the device's rename action as `performer`.
    ///
    /// # Panics
    /// If `item` is not a device with a rename action.
    pub fn rename_action(&mut self, item: Entity, performer: Entity) -> &mut Self {
        let action = self
            .world()
            .get::<PaiDevice>(item)
            .and_then(|device| device.rename_action)
            .unwrap_or_else(|| panic!("{item:?} has no rename action"));
        self.raise(ItemEvent::RenameAction {
            item,
            performer,
            action,
        })
    }

    /// The oldest pending dialog for `session`, if any.
    pub fn pending_dialog(&self, session: SessionId) -> Option<DialogId> {
        self.world()
            .resource::<QuickDialogs>()
            .pending_for(session)
            .next()
            .map(|dialog| dialog.id)
    }

    pub fn answer(&mut self, dialog: DialogId, session: SessionId, text: &str) -> &mut Self {
        respond(
            self.world_mut(),
            DialogResponse {
                dialog,
                session,
                text: text.to_string(),
            },
        );
        self
    }

    pub fn tick(&mut self, n: u32) -> &mut Self {
        for _ in 0..n {
            self.app.world_mut().run_schedule(ServerTick);
        }
        self
    }

    pub fn name_of(&self, entity: Entity) -> &str {
        self.world()
            .get::<EntityMeta>(entity)
            .map(|meta| meta.name.as_str())
            .unwrap_or_default()
    }

    pub fn log(&self) -> &EventLog {
        self.world().resource::<EventLog>()
    }
}
