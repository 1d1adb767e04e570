use std::time::Duration;

use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

/// Server game clock tracking elapsed game time and tick count.
///
/// Advances by one fixed step per tick. The `advance_clock` system moves the
/// clock forward at the end of each tick (in `ServerPhase::Last`), so systems
/// see the current time before it advances.
#[derive(Resource, Debug, Clone)]
pub struct GameClock {
    pub elapsed: Duration,
    pub tick_count: u64,
    step: Duration,
}

impl GameClock {
    /// A clock running `tick_rate` ticks per second. A zero rate is treated as 1.
    pub fn new(tick_rate: u32) -> Self {
        Self {
            elapsed: Duration::ZERO,
            tick_count: 0,
            step: Duration::from_secs(1) / tick_rate.max(1),
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Advance the clock by one tick.
    pub fn advance(&mut self) {
        self.elapsed += self.step;
        self.tick_count += 1;
    }
}

/// Bevy system that advances the game clock by one tick.
pub fn advance_clock(mut clock: ResMut<GameClock>) {
    clock.advance();
}
