//! Mapping between typed settings and flat config keys.
//!
//! Profile fields are stored as `{profileName}-{FieldName}`; global settings
//! and key bindings use bare keys.

use mouseflyer_core::{FlyingMode, GlobalSettings, HudColor, Profile, ProfileManager};
use mouseflyer_input_map::{BindingAction, KeyBindings};
use tracing::warn;

use crate::store::ConfigStore;

const SMOOTHING_FACTOR: &str = "SmoothingFactor";
const IS_Y_AXIS_INVERTED: &str = "IsYAxisInverted";
const IS_AUTO_CAM_ENABLED: &str = "IsAutoCamEnabled";
const DEADZONE: &str = "Deadzone";
const ROLL_SENSITIVITY: &str = "RollSensitivity";
const PITCH_SENSITIVITY: &str = "PitchSensitivity";
const YAW_CORRECTION: &str = "YawCorrection";

const HUD_OPACITY: &str = "HUDOpacity";
const OUTER_CIRCLE_RADIUS_RATIO: &str = "OuterCircleRadiusRatio";
const HUD_COLOR: &str = "HUDColor";
const FLYING_MODE: &str = "FlyingMode";

pub fn profile_key(profile_name: &str, field: &str) -> String {
    format!("{profile_name}-{field}")
}

/// Reads one profile, inserting defaults for missing keys. Out-of-range
/// values are clamped into the ranges the settings window allows.
pub fn load_profile(store: &mut ConfigStore, name: &str) -> Profile {
    let defaults = Profile::named(name);
    let key = |field| profile_key(name, field);
    let profile = Profile {
        name: name.to_string(),
        smoothing_factor: store.bind_f32(&key(SMOOTHING_FACTOR), defaults.smoothing_factor),
        deadzone: store.bind_f32(&key(DEADZONE), defaults.deadzone),
        roll_sensitivity: store.bind_f32(&key(ROLL_SENSITIVITY), defaults.roll_sensitivity),
        pitch_sensitivity: store.bind_f32(&key(PITCH_SENSITIVITY), defaults.pitch_sensitivity),
        yaw_correction: store.bind_f32(&key(YAW_CORRECTION), defaults.yaw_correction),
        invert_y_axis: store.bind_bool(&key(IS_Y_AXIS_INVERTED), defaults.invert_y_axis),
        auto_camera_enabled: store
            .bind_bool(&key(IS_AUTO_CAM_ENABLED), defaults.auto_camera_enabled),
    };
    match profile.validate() {
        Ok(()) => profile,
        Err(err) => {
            warn!(profile = name, error = %err, "stored profile out of range, clamping");
            let clamped = profile.clamped_to_ui_ranges();
            store_profile(store, &clamped);
            clamped
        }
    }
}

pub fn store_profile(store: &mut ConfigStore, profile: &Profile) {
    let key = |field| profile_key(&profile.name, field);
    store.set(key(SMOOTHING_FACTOR), profile.smoothing_factor);
    store.set(key(DEADZONE), profile.deadzone);
    store.set(key(ROLL_SENSITIVITY), profile.roll_sensitivity);
    store.set(key(PITCH_SENSITIVITY), profile.pitch_sensitivity);
    store.set(key(YAW_CORRECTION), profile.yaw_correction);
    store.set(key(IS_Y_AXIS_INVERTED), profile.invert_y_axis);
    store.set(key(IS_AUTO_CAM_ENABLED), profile.auto_camera_enabled);
}

/// Loads the numbered slots "1"..=`max_profiles`.
pub fn load_profile_manager(store: &mut ConfigStore, max_profiles: usize) -> ProfileManager {
    let profiles = (1..=max_profiles.max(1))
        .map(|slot| load_profile(store, &slot.to_string()))
        .collect();
    ProfileManager::from_profiles(profiles, max_profiles)
}

/// Stores committed values only; pending drafts stay in memory.
pub fn store_profile_manager(store: &mut ConfigStore, manager: &ProfileManager) {
    for profile in manager.profiles() {
        store_profile(store, profile);
    }
}

pub fn load_global_settings(store: &mut ConfigStore) -> GlobalSettings {
    let defaults = GlobalSettings::default();
    let flying_mode = store.bind_with(
        FLYING_MODE,
        defaults.flying_mode,
        FlyingMode::from_config_name,
        |mode| mode.config_name().to_string(),
    );
    let outer_circle_radius_ratio = store.bind_with(
        OUTER_CIRCLE_RADIUS_RATIO,
        defaults.outer_circle_radius_ratio,
        |raw| raw.parse::<f32>().ok().filter(|v| v.is_finite() && *v > 0.0),
        |ratio: &f32| ratio.to_string(),
    );
    let hud_opacity = store.bind_f32(HUD_OPACITY, defaults.hud_opacity).clamp(0.0, 1.0);
    let hud_color = store.bind_with(
        HUD_COLOR,
        defaults.hud_color,
        HudColor::from_hex,
        |color| color.to_hex(),
    );
    GlobalSettings {
        flying_mode,
        outer_circle_radius_ratio,
        hud_opacity,
        hud_color,
    }
}

pub fn store_global_settings(store: &mut ConfigStore, settings: &GlobalSettings) {
    store.set(FLYING_MODE, settings.flying_mode.config_name());
    store.set(OUTER_CIRCLE_RADIUS_RATIO, settings.outer_circle_radius_ratio);
    store.set(HUD_OPACITY, settings.hud_opacity);
    store.set(HUD_COLOR, settings.hud_color.to_hex());
}

/// Key names per action. Whether a name is a real key is up to the host.
pub fn load_key_bindings(store: &mut ConfigStore) -> KeyBindings<String> {
    KeyBindings::from_fn(|action: BindingAction| {
        store.bind_string(action.config_key(), action.default_key_name())
    })
}

pub fn store_key_bindings(store: &mut ConfigStore, bindings: &KeyBindings<String>) {
    for (action, key) in bindings.iter() {
        store.set(action.config_key(), key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_keys_are_prefixed_with_name() {
        assert_eq!(profile_key("3", "Deadzone"), "3-Deadzone");
    }

    #[test]
    fn empty_store_yields_defaults_and_fills_keys() {
        let mut store = ConfigStore::in_memory();
        let profile = load_profile(&mut store, "2");
        assert_eq!(profile, Profile::named("2"));
        assert_eq!(store.get("2-RollSensitivity"), Some("0.2"));
        assert_eq!(store.get("2-IsYAxisInverted"), Some("true"));
        assert_eq!(store.len(), 7);
    }

    #[test]
    fn out_of_range_profile_is_clamped_and_rewritten() {
        let mut store = ConfigStore::in_memory();
        store.set("1-SmoothingFactor", "4");
        store.set("1-PitchSensitivity", "-2");
        let profile = load_profile(&mut store, "1");
        assert_eq!(profile.smoothing_factor, 1.0);
        assert_eq!(profile.pitch_sensitivity, 0.0);
        assert_eq!(store.get("1-SmoothingFactor"), Some("1"));
    }

    #[test]
    fn global_settings_parse_stored_values() {
        let mut store = ConfigStore::in_memory();
        store.set("FlyingMode", "Alternative");
        store.set("HUDColor", "FF000080");
        store.set("OuterCircleRadiusRatio", "-1");
        let settings = load_global_settings(&mut store);
        assert_eq!(settings.flying_mode, FlyingMode::Absolute);
        assert_eq!(settings.hud_color.r, 1.0);
        assert!((settings.hud_color.a - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(settings.outer_circle_radius_ratio, 0.35);
        assert_eq!(store.get("OuterCircleRadiusRatio"), Some("0.35"));
    }

    #[test]
    fn key_bindings_default_to_stock_layout() {
        let mut store = ConfigStore::in_memory();
        let bindings = load_key_bindings(&mut store);
        assert_eq!(bindings, KeyBindings::default_names());
        assert_eq!(store.get("ToggleHUDKey"), Some("Backslash"));
    }
}
