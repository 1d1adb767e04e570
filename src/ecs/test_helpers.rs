use bevy_app::App;

use crate::ecs::clock::GameClock;
use crate::ecs::schedule::ServerTick;

/// Run `n` server ticks.
pub fn tick(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(ServerTick);
    }
}

/// Run `secs` seconds worth of ticks at the app's tick rate.
pub fn tick_secs(app: &mut App, secs: u64) {
    let step = app.world().resource::<GameClock>().step();
    let n = (secs as f64 / step.as_secs_f64()).round() as u32;
    tick(app, n);
}
