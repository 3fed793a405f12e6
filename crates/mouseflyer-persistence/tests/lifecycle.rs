use std::path::PathBuf;

use mouseflyer_core::{FlyingMode, Profile};
use mouseflyer_input_map::BindingAction;
use mouseflyer_persistence::{
    ConfigStore, PersistenceError, load_global_settings, load_key_bindings, load_profile_manager,
    store_global_settings, store_key_bindings, store_profile_manager,
};
use uuid::Uuid;

fn unique_config_path(prefix: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("{}_{}", prefix, Uuid::new_v4().simple()))
        .join("MouseFlyer.json")
}

#[test]
fn profiles_globals_and_bindings_survive_save_and_reopen() {
    let path = unique_config_path("mouseflyer_lifecycle");
    let mut store = ConfigStore::open(&path).expect("missing file opens empty");
    assert!(store.is_empty());

    let mut manager = load_profile_manager(&mut store, 5);
    let mut global = load_global_settings(&mut store);
    let mut bindings = load_key_bindings(&mut store);

    manager.set_active(2);
    {
        let draft = manager.active_edit_mut().draft_mut();
        draft.roll_sensitivity = 1.25;
        draft.invert_y_axis = false;
    }
    manager.commit_active().expect("valid draft");
    // Pending edits on another slot must not be persisted.
    manager.set_active(0);
    manager.active_edit_mut().draft_mut().deadzone = 0.9;

    global.flying_mode = FlyingMode::Absolute;
    global.hud_opacity = 0.75;
    bindings.set(BindingAction::ToggleMenu, "F10".to_string());

    store_profile_manager(&mut store, &manager);
    store_global_settings(&mut store, &global);
    store_key_bindings(&mut store, &bindings);
    store.save().expect("save config");

    let mut reopened = ConfigStore::open(&path).expect("reopen config");
    let manager = load_profile_manager(&mut reopened, 5);
    let global = load_global_settings(&mut reopened);
    let bindings = load_key_bindings(&mut reopened);

    let third = manager
        .profiles()
        .find(|profile| profile.name == "3")
        .expect("slot 3 exists");
    assert_eq!(third.roll_sensitivity, 1.25);
    assert!(!third.invert_y_axis);

    let first = manager.profiles().next().expect("slot 1 exists");
    assert_eq!(first.deadzone, Profile::DEFAULT_DEADZONE);

    assert_eq!(global.flying_mode, FlyingMode::Absolute);
    assert_eq!(global.hud_opacity, 0.75);
    assert_eq!(bindings.get(BindingAction::ToggleMenu), "F10");

    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[test]
fn malformed_file_is_reported() {
    let path = unique_config_path("mouseflyer_malformed");
    let dir = path.parent().expect("has parent").to_path_buf();
    std::fs::create_dir_all(&dir).expect("create temp dir");
    std::fs::write(&path, "{ not json").expect("write garbage");

    let err = ConfigStore::open(&path).expect_err("garbage must not parse");
    assert!(matches!(err, PersistenceError::Parse { .. }));

    let _ = std::fs::remove_dir_all(dir);
}
