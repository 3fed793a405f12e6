use bevy::prelude::*;
use mouseflyer_input_map::{CameraMode, ControlEffect, apply_command, map_pressed_keys};

use crate::MouseFlyerSettings;
use crate::flight::FlightControl;

/// Last camera mode asked for when steering toggled. The camera rig reads it.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestedCameraMode(pub Option<CameraMode>);

pub fn handle_key_presses(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut settings: ResMut<MouseFlyerSettings>,
    mut flight: ResMut<FlightControl>,
    mut camera: ResMut<RequestedCameraMode>,
) {
    let Some(keys) = keys else {
        return;
    };
    let commands = map_pressed_keys(
        &settings.bindings,
        |key| keys.just_pressed(*key),
        keys.just_pressed(KeyCode::Escape),
    );
    if commands.is_empty() {
        return;
    }

    let settings = &mut *settings;
    for command in commands {
        let effects = apply_command(
            command,
            &mut settings.runtime,
            &mut settings.global,
            &mut settings.profiles,
        );
        for effect in effects {
            apply_effect(effect, &mut flight, &mut camera);
        }
    }
}

fn apply_effect(effect: ControlEffect, flight: &mut FlightControl, camera: &mut RequestedCameraMode) {
    match effect {
        ControlEffect::SteeringChanged(enabled) => {
            flight.clear_output();
            info!(enabled, "mouse steering toggled");
        }
        ControlEffect::SelectCamera(mode) => {
            camera.0 = Some(mode);
            debug!(?mode, "camera mode requested");
        }
        ControlEffect::FlyingModeChanged(mode) => {
            info!(mode = mode.config_name(), "flying mode changed");
        }
        ControlEffect::ProfileChanged(name) => {
            info!(profile = %name, "profile selected");
        }
        ControlEffect::WindowToggled(open) => {
            debug!(open, "settings window toggled");
        }
        ControlEffect::HudToggled(visible) => {
            debug!(visible, "hud toggled");
        }
    }
}
