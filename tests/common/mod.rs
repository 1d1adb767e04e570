#![allow(dead_code)]

use bevy_ecs::entity::Entity;
use pai_device::ecs::{Bricked, GhostTakeoverAvailable, MindContainer, PaiDevice, ToggleableGhostRole};
use pai_device::{PlayerIds, Scenario};

/// A scenario with one player holding one empty device.
pub struct HeldDevice {
    pub scenario: Scenario,
    pub player: PlayerIds,
    pub device: Entity,
}

pub fn held_device(seed: u64) -> HeldDevice {
    let mut scenario = Scenario::new(seed);
    let player = scenario.add_player("urist mchands");
    let device = scenario.add_device();
    scenario.use_in_hand(device, player.body).tick(1);
    HeldDevice {
        scenario,
        player,
        device,
    }
}

/// A device whose player mind has moved into it, so it can act.
pub fn possessed_device(seed: u64) -> HeldDevice {
    let mut held = held_device(seed);
    let ghost = held.scenario.add_player("ghost");
    held.scenario.transfer(ghost.mind, Some(held.device));
    held.player = ghost;
    held
}

pub fn assert_bricked(scenario: &Scenario, device: Entity) {
    let world = scenario.world();
    assert!(world.get::<Bricked>(device).is_some(), "device not bricked");
    assert!(world.get::<PaiDevice>(device).is_none());
    assert!(world.get::<ToggleableGhostRole>(device).is_none());
    assert!(world.get::<GhostTakeoverAvailable>(device).is_none());
    assert!(!world.get::<MindContainer>(device).is_some_and(MindContainer::has_mind));
}
