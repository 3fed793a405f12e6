use bevy::gizmos::config::GizmoConfigStore;
use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use mouseflyer_core::{GlobalSettings, ProfileManager};
use mouseflyer_input_map::{KeyBindings, RuntimeState};

pub mod controls;
pub mod cursor;
pub mod flight;
pub mod hud;
pub mod keys;
pub mod pointer;
pub mod vessel;

pub use controls::{RequestedCameraMode, handle_key_presses};
pub use cursor::{CursorState, apply_cursor_display, cursor_state};
pub use flight::{FlightControl, active_vessel, update_flight_controls};
pub use hud::{HudText, draw_hud, spawn_hud_text, update_hud_text};
pub use keys::{default_key_codes, key_binding_names, resolve_key_bindings};
pub use pointer::{PointerSample, sample_pointer};
pub use vessel::{
    ActiveVessel, ControlledVessel, VesselActuator, VesselLookupError, integrate_vessel_attitude,
};

/// Everything the steering session reads: profiles, global settings, key
/// bindings and the unpersisted toggles.
#[derive(Resource, Debug, Clone)]
pub struct MouseFlyerSettings {
    pub profiles: ProfileManager,
    pub global: GlobalSettings,
    pub bindings: KeyBindings<KeyCode>,
    pub runtime: RuntimeState,
}

impl Default for MouseFlyerSettings {
    fn default() -> Self {
        Self {
            profiles: ProfileManager::default(),
            global: GlobalSettings::default(),
            bindings: default_key_codes(),
            runtime: RuntimeState::default(),
        }
    }
}

pub struct MouseFlyerPlugin;

impl Plugin for MouseFlyerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ControlledVessel>()
            .register_type::<ActiveVessel>();

        // Settings inserted by the host before the plugin are kept.
        app.init_resource::<MouseFlyerSettings>()
            .init_resource::<FlightControl>()
            .init_resource::<PointerSample>()
            .init_resource::<RequestedCameraMode>()
            .add_message::<MouseMotion>();

        app.add_systems(Startup, spawn_hud_text);
        app.add_systems(
            Update,
            (
                sample_pointer,
                handle_key_presses,
                apply_cursor_display,
                draw_hud.run_if(resource_exists::<GizmoConfigStore>),
                update_hud_text,
            )
                .chain(),
        );
        // Shaping runs on the fixed physics step.
        app.add_systems(
            FixedUpdate,
            (update_flight_controls, integrate_vessel_attitude).chain(),
        );
    }
}
