use bevy_app::{App, Plugin};

use super::systems::{ActionsPlugin, DevicePlugin, GhostRolePlugin};

/// Aggregate plugin that installs the device, ghost-role and action systems.
pub struct PaiPlugin;

impl Plugin for PaiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((DevicePlugin, GhostRolePlugin, ActionsPlugin));
    }
}
