use anyhow::Context;
use bevy::prelude::*;
use mouseflyer_game::{
    ActiveVessel, ControlledVessel, MouseFlyerPlugin, MouseFlyerSettings, key_binding_names,
    resolve_key_bindings,
};
use mouseflyer_input_map::RuntimeState;
use mouseflyer_persistence::{
    ConfigStore, load_global_settings, load_key_bindings, load_profile_manager,
    store_global_settings, store_key_bindings, store_profile_manager,
};

mod config;

use config::ClientConfig;

/// Backing file for the settings resource.
#[derive(Resource)]
struct SettingsStore(ConfigStore);

fn load_settings(store: &mut ConfigStore, max_profiles: usize) -> MouseFlyerSettings {
    MouseFlyerSettings {
        profiles: load_profile_manager(store, max_profiles),
        global: load_global_settings(store),
        bindings: resolve_key_bindings(&load_key_bindings(store)),
        runtime: RuntimeState::default(),
    }
}

fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env()
        .map_err(anyhow::Error::msg)
        .context("invalid client configuration")?;
    let mut store = ConfigStore::open(&config.config_path).with_context(|| {
        format!(
            "failed to load settings from {}",
            config.config_path.display()
        )
    })?;
    let settings = load_settings(&mut store, config.max_profiles);
    // Writes back any defaults filled in during load.
    store.save().context("failed to write settings file")?;

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "MouseFlyer".to_string(),
            ..default()
        }),
        ..default()
    }))
    .insert_resource(settings)
    .insert_resource(SettingsStore(store))
    .add_plugins(MouseFlyerPlugin)
    .add_systems(Startup, spawn_scene)
    .add_systems(Update, persist_settings);

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("client exited with code {code}"),
    }
}

fn spawn_scene(mut commands: Commands) {
    commands.spawn(Camera2d);
    commands.spawn((
        Name::new("Vessel"),
        ControlledVessel::default(),
        ActiveVessel,
        Transform::default(),
    ));
}

/// Saves committed settings whenever the settings resource changes.
fn persist_settings(settings: Res<MouseFlyerSettings>, mut store: ResMut<SettingsStore>) {
    if !settings.is_changed() || settings.is_added() {
        return;
    }
    let store = &mut store.0;
    store_profile_manager(store, &settings.profiles);
    store_global_settings(store, &settings.global);
    store_key_bindings(store, &key_binding_names(&settings.bindings));
    if let Err(err) = store.save() {
        warn!(error = %err, "failed to save settings");
    }
}
