use mouseflyer_core::{FlyingMode, GlobalSettings, Profile};

#[test]
fn profile_json_shape_is_stable() {
    let profile = Profile::named("2");
    let json = serde_json::to_value(&profile).expect("serialize profile");
    assert_eq!(json["name"], "2");
    assert_eq!(json["invert_y_axis"], true);
    assert!(json.get("smoothing_factor").is_some());

    let back: Profile = serde_json::from_value(json).expect("deserialize profile");
    assert_eq!(back, profile);
}

#[test]
fn global_settings_default_to_relative_mode() {
    let settings = GlobalSettings::default();
    assert_eq!(settings.flying_mode, FlyingMode::Relative);
    assert_eq!(settings.outer_circle_radius_ratio, 0.35);
}
