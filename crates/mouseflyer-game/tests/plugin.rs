use bevy::prelude::*;
use mouseflyer_core::FlyingMode;
use mouseflyer_game::{
    ActiveVessel, ControlledVessel, FlightControl, MouseFlyerPlugin, MouseFlyerSettings,
    PointerSample, RequestedCameraMode,
};
use mouseflyer_input_map::CameraMode;
use mouseflyer_sim_core::{DisplayToken, ScreenGeometry};

fn full_hd() -> ScreenGeometry {
    ScreenGeometry::new(1920.0, 1080.0, 0.35).expect("valid geometry")
}

fn steering_app(mode: FlyingMode) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, MouseFlyerPlugin));
    app.insert_resource(FlightControl::with_geometry(full_hd()));
    {
        let mut settings = app.world_mut().resource_mut::<MouseFlyerSettings>();
        settings.runtime.steering_enabled = true;
        settings.global.flying_mode = mode;
    }
    app
}

fn spawn_active_vessel(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((
            ControlledVessel::default(),
            ActiveVessel,
            Transform::default(),
        ))
        .id()
}

#[test]
fn plugin_inserts_session_resources() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, MouseFlyerPlugin));
    let world = app.world();
    assert!(world.contains_resource::<MouseFlyerSettings>());
    assert!(world.contains_resource::<FlightControl>());
    assert!(world.contains_resource::<PointerSample>());
    assert!(world.contains_resource::<RequestedCameraMode>());
}

#[test]
fn absolute_tick_drives_active_vessel() {
    let mut app = steering_app(FlyingMode::Absolute);
    let vessel = spawn_active_vessel(&mut app);
    app.world_mut().resource_mut::<PointerSample>().position = Vec2::new(1152.0, 540.0);

    app.world_mut().run_schedule(FixedUpdate);

    let controls = app
        .world()
        .get::<ControlledVessel>(vessel)
        .expect("vessel keeps its controls");
    assert!(controls.roll > 0.0, "roll should follow the pointer: {}", controls.roll);
    assert!(controls.pitch.abs() < 1e-6);
    assert!((controls.yaw - controls.roll * 0.3).abs() < 1e-6);

    let output = app
        .world()
        .resource::<FlightControl>()
        .last_output()
        .expect("tick produced output");
    assert_eq!(output.display, DisplayToken::UnlockedCustomCursor);
}

#[test]
fn relative_tick_consumes_pending_motion() {
    let mut app = steering_app(FlyingMode::Relative);
    let vessel = spawn_active_vessel(&mut app);
    app.world_mut().resource_mut::<PointerSample>().pending_delta = Vec2::new(0.0, 40.0);

    app.world_mut().run_schedule(FixedUpdate);

    assert_eq!(
        app.world().resource::<PointerSample>().pending_delta,
        Vec2::ZERO
    );
    let controls = app
        .world()
        .get::<ControlledVessel>(vessel)
        .expect("vessel keeps its controls");
    // Default profiles invert Y: pushing the mouse up pitches down.
    assert!(controls.pitch < 0.0, "pitch: {}", controls.pitch);
    assert_eq!(controls.roll, 0.0);
}

#[test]
fn missing_vessel_skips_the_tick() {
    let mut app = steering_app(FlyingMode::Absolute);
    app.world_mut().resource_mut::<PointerSample>().position = Vec2::new(1152.0, 540.0);

    app.world_mut().run_schedule(FixedUpdate);

    assert!(app.world().resource::<FlightControl>().last_output().is_none());
}

#[test]
fn disabled_steering_leaves_vessel_alone() {
    let mut app = steering_app(FlyingMode::Absolute);
    app.world_mut()
        .resource_mut::<MouseFlyerSettings>()
        .runtime
        .steering_enabled = false;
    let vessel = spawn_active_vessel(&mut app);
    app.world_mut().resource_mut::<PointerSample>().position = Vec2::new(1500.0, 900.0);

    app.world_mut().run_schedule(FixedUpdate);

    let controls = app
        .world()
        .get::<ControlledVessel>(vessel)
        .expect("vessel keeps its controls");
    assert_eq!(controls.roll, 0.0);
    assert_eq!(controls.pitch, 0.0);
}

#[test]
fn toggle_key_enables_steering_and_requests_chase_camera() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, MouseFlyerPlugin));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyO);

    app.world_mut().run_schedule(Update);

    assert!(
        app.world()
            .resource::<MouseFlyerSettings>()
            .runtime
            .steering_enabled
    );
    assert_eq!(
        app.world().resource::<RequestedCameraMode>().0,
        Some(CameraMode::Chase)
    );
}

#[test]
fn profile_keys_cycle_the_active_profile() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, MouseFlyerPlugin));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::BracketLeft);

    app.world_mut().run_schedule(Update);

    let settings = app.world().resource::<MouseFlyerSettings>();
    assert_eq!(settings.profiles.active().name, "5");
}

#[test]
fn motion_while_disabled_is_not_replayed_on_enable() {
    let mut app = steering_app(FlyingMode::Relative);
    app.world_mut()
        .resource_mut::<MouseFlyerSettings>()
        .runtime
        .steering_enabled = false;
    let vessel = spawn_active_vessel(&mut app);

    for _ in 0..100 {
        app.world_mut().resource_mut::<PointerSample>().pending_delta += Vec2::new(0.0, 20.0);
        app.world_mut().run_schedule(FixedUpdate);
    }
    assert_eq!(
        app.world().resource::<PointerSample>().pending_delta,
        Vec2::ZERO
    );

    app.world_mut()
        .resource_mut::<MouseFlyerSettings>()
        .runtime
        .steering_enabled = true;
    app.world_mut().run_schedule(FixedUpdate);

    let controls = app
        .world()
        .get::<ControlledVessel>(vessel)
        .expect("vessel keeps its controls");
    assert_eq!(controls.pitch, 0.0);
    assert_eq!(controls.roll, 0.0);
    let flight = app.world().resource::<FlightControl>();
    let center = full_hd().center();
    assert_eq!(
        flight.controller().expect("controller").virtual_cursor(),
        center
    );
}
