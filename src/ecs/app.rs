use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::IntoScheduleConfigs;

use crate::content::{Localization, PrototypeRegistry};

use super::clock::GameClock;
use super::commands::{HostCommand, apply_host_commands};
use super::events::{DialogResponse, ItemEvent};
use super::plugin::PaiPlugin;
use super::resources::{EventLog, PaiConfig, PaiRng, QuickDialogs};
use super::schedule::{ServerPhase, configure_server_schedule};

/// Build a headless server app with the built-in content and default
/// configuration, seeded with `seed`.
///
/// Manual tick control:
/// ```no_run
/// # use pai_device::ecs::{build_server_app, ServerTick};
/// let mut app = build_server_app(42);
/// for _ in 0..30 {  // one second at the default tick rate
///     app.world_mut().run_schedule(ServerTick);
/// }
/// ```
pub fn build_server_app(seed: u64) -> App {
    build_server_app_with_config(PaiConfig {
        seed,
        ..PaiConfig::default()
    })
}

/// Build a headless server app with the built-in content.
pub fn build_server_app_with_config(config: PaiConfig) -> App {
    build_server_app_with_content(config, Localization::builtin(), PrototypeRegistry::builtin())
}

/// Build a headless server app with explicitly loaded content.
pub fn build_server_app_with_content(
    config: PaiConfig,
    localization: Localization,
    prototypes: PrototypeRegistry,
) -> App {
    let mut app = App::empty();

    // Core resources
    app.insert_resource(GameClock::new(config.tick_rate));
    app.insert_resource(EventLog::new());
    app.insert_resource(QuickDialogs::new(config.dialog_max_length));
    app.insert_resource(PaiRng::seeded(config.seed));
    app.insert_resource(localization);
    app.insert_resource(prototypes);
    app.insert_resource(config);

    // Register message types
    MessageRegistry::register_message::<ItemEvent>(app.world_mut());
    MessageRegistry::register_message::<DialogResponse>(app.world_mut());
    MessageRegistry::register_message::<HostCommand>(app.world_mut());

    // Build schedule with message rotation + applicator
    let mut schedule = configure_server_schedule();
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(ServerPhase::PreUpdate));
    schedule.add_systems(apply_host_commands.in_set(ServerPhase::PostUpdate));
    app.add_schedule(schedule);

    app.add_plugins(PaiPlugin);
    app
}
