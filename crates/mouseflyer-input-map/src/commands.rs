use mouseflyer_core::{FlyingMode, GlobalSettings, ProfileManager};
use mouseflyer_sim_core::HudVisibility;

use crate::bindings::{BindingAction, KeyBindings};

/// Session flags that are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeState {
    pub steering_enabled: bool,
    pub window_open: bool,
    pub hud_visible: bool,
    pub show_hud_text_panel: bool,
    pub show_hud_outer_circle: bool,
    pub show_hud_inner_circle: bool,
}

impl Default for RuntimeState {
    fn default() -> Self {
        Self {
            steering_enabled: false,
            window_open: false,
            hud_visible: true,
            show_hud_text_panel: true,
            show_hud_outer_circle: true,
            show_hud_inner_circle: true,
        }
    }
}

impl RuntimeState {
    /// HUD flags as seen by the overlay; a disabled session shows nothing.
    pub fn hud_visibility(&self) -> HudVisibility {
        HudVisibility {
            hud_visible: self.hud_visible && self.steering_enabled,
            show_outer_circle: self.show_hud_outer_circle,
            show_inner_circle: self.show_hud_inner_circle,
            show_text_panel: self.show_hud_text_panel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    /// Escape: drop out of steering and free the cursor.
    ReleaseSteering,
    Action(BindingAction),
}

/// Camera modes requested from the host when steering toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Chase,
    Auto,
}

/// Something the host has to act on after a command was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEffect {
    SteeringChanged(bool),
    SelectCamera(CameraMode),
    FlyingModeChanged(FlyingMode),
    ProfileChanged(String),
    WindowToggled(bool),
    HudToggled(bool),
}

/// Commands for this frame's key presses. Escape comes first, then bound
/// actions in [`BindingAction::ALL`] order.
pub fn map_pressed_keys<K>(
    bindings: &KeyBindings<K>,
    mut just_pressed: impl FnMut(&K) -> bool,
    escape_pressed: bool,
) -> Vec<ControlCommand> {
    let mut commands = Vec::new();
    if escape_pressed {
        commands.push(ControlCommand::ReleaseSteering);
    }
    for (action, key) in bindings.iter() {
        if just_pressed(key) {
            commands.push(ControlCommand::Action(action));
        }
    }
    commands
}

pub fn apply_command(
    command: ControlCommand,
    runtime: &mut RuntimeState,
    global: &mut GlobalSettings,
    profiles: &mut ProfileManager,
) -> Vec<ControlEffect> {
    match command {
        ControlCommand::ReleaseSteering => {
            if !runtime.steering_enabled {
                return Vec::new();
            }
            runtime.steering_enabled = false;
            vec![ControlEffect::SteeringChanged(false)]
        }
        ControlCommand::Action(BindingAction::ToggleMouseSteering) => {
            runtime.steering_enabled = !runtime.steering_enabled;
            let mut effects = vec![ControlEffect::SteeringChanged(runtime.steering_enabled)];
            if profiles.active().auto_camera_enabled {
                let camera = if runtime.steering_enabled {
                    CameraMode::Chase
                } else {
                    CameraMode::Auto
                };
                effects.push(ControlEffect::SelectCamera(camera));
            }
            effects
        }
        ControlCommand::Action(BindingAction::ToggleFlyingMode) => {
            global.flying_mode = global.flying_mode.toggle();
            vec![ControlEffect::FlyingModeChanged(global.flying_mode)]
        }
        ControlCommand::Action(BindingAction::ToggleMenu) => {
            runtime.window_open = !runtime.window_open;
            vec![ControlEffect::WindowToggled(runtime.window_open)]
        }
        ControlCommand::Action(BindingAction::ToggleHud) => {
            runtime.hud_visible = !runtime.hud_visible;
            vec![ControlEffect::HudToggled(runtime.hud_visible)]
        }
        ControlCommand::Action(BindingAction::NextProfile) => {
            vec![ControlEffect::ProfileChanged(profiles.next().name.clone())]
        }
        ControlCommand::Action(BindingAction::PreviousProfile) => {
            vec![ControlEffect::ProfileChanged(profiles.previous().name.clone())]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mouseflyer_core::Profile;

    struct Session {
        runtime: RuntimeState,
        global: GlobalSettings,
        profiles: ProfileManager,
    }

    impl Session {
        fn new() -> Self {
            Self {
                runtime: RuntimeState::default(),
                global: GlobalSettings::default(),
                profiles: ProfileManager::default(),
            }
        }

        fn apply(&mut self, command: ControlCommand) -> Vec<ControlEffect> {
            apply_command(command, &mut self.runtime, &mut self.global, &mut self.profiles)
        }
    }

    #[test]
    fn escape_is_listed_before_bound_actions() {
        let bindings = KeyBindings::default_names();
        let commands = map_pressed_keys(&bindings, |key| key == "I" || key == "P", true);
        assert_eq!(
            commands,
            vec![
                ControlCommand::ReleaseSteering,
                ControlCommand::Action(BindingAction::ToggleFlyingMode),
                ControlCommand::Action(BindingAction::ToggleMenu),
            ]
        );
    }

    #[test]
    fn steering_toggle_requests_chase_then_auto_camera() {
        let mut session = Session::new();
        let effects = session.apply(ControlCommand::Action(BindingAction::ToggleMouseSteering));
        assert!(session.runtime.steering_enabled);
        assert_eq!(
            effects,
            vec![
                ControlEffect::SteeringChanged(true),
                ControlEffect::SelectCamera(CameraMode::Chase)
            ]
        );

        let effects = session.apply(ControlCommand::Action(BindingAction::ToggleMouseSteering));
        assert_eq!(effects[1], ControlEffect::SelectCamera(CameraMode::Auto));
    }

    #[test]
    fn auto_camera_off_skips_camera_request() {
        let mut session = Session::new();
        session.profiles.active_edit_mut().reset_to(Profile {
            auto_camera_enabled: false,
            ..Profile::named("1")
        });
        let effects = session.apply(ControlCommand::Action(BindingAction::ToggleMouseSteering));
        assert_eq!(effects, vec![ControlEffect::SteeringChanged(true)]);
    }

    #[test]
    fn escape_only_reports_when_steering_was_on() {
        let mut session = Session::new();
        assert!(session.apply(ControlCommand::ReleaseSteering).is_empty());

        session.runtime.steering_enabled = true;
        assert_eq!(
            session.apply(ControlCommand::ReleaseSteering),
            vec![ControlEffect::SteeringChanged(false)]
        );
        assert!(!session.runtime.steering_enabled);
    }

    #[test]
    fn flying_mode_and_profiles_cycle() {
        let mut session = Session::new();
        session.apply(ControlCommand::Action(BindingAction::ToggleFlyingMode));
        assert_eq!(session.global.flying_mode, FlyingMode::Absolute);

        let effects = session.apply(ControlCommand::Action(BindingAction::PreviousProfile));
        assert_eq!(effects, vec![ControlEffect::ProfileChanged("5".to_string())]);
        let effects = session.apply(ControlCommand::Action(BindingAction::NextProfile));
        assert_eq!(effects, vec![ControlEffect::ProfileChanged("1".to_string())]);
    }

    #[test]
    fn hud_hidden_while_steering_disabled() {
        let mut runtime = RuntimeState::default();
        assert!(!runtime.hud_visibility().hud_visible);
        runtime.steering_enabled = true;
        assert!(runtime.hud_visibility().hud_visible);
        runtime.hud_visible = false;
        assert!(!runtime.hud_visibility().hud_visible);
    }
}
