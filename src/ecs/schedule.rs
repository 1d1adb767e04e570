use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::advance_clock;

/// Schedule label for one server tick.
/// Run manually each tick via `app.world_mut().run_schedule(ServerTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerTick;

/// Ordered phases within each server tick.
///
/// Phases run in declaration order: PreUpdate < Update < PostUpdate < Reactions < Last.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServerPhase {
    /// Message buffer rotation.
    PreUpdate,
    /// Item event handlers; they only write `HostCommand`s.
    Update,
    /// The host command applicator.
    PostUpdate,
    Reactions,
    /// Clock advance.
    Last,
}

/// Build a configured `ServerTick` schedule with phase ordering.
///
/// Always single-threaded: handlers share one RNG and their consumption
/// order must be reproducible for a given seed.
pub fn configure_server_schedule() -> Schedule {
    let mut schedule = Schedule::new(ServerTick);
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.configure_sets(
        (
            ServerPhase::PreUpdate,
            ServerPhase::Update,
            ServerPhase::PostUpdate,
            ServerPhase::Reactions,
            ServerPhase::Last,
        )
            .chain(),
    );
    schedule.add_systems(advance_clock.in_set(ServerPhase::Last));
    schedule
}
