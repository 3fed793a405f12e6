use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use mouseflyer_sim_core::ScreenGeometry;

use crate::MouseFlyerSettings;
use crate::flight::FlightControl;

/// Latest pointer position and the motion gathered since the last physics
/// tick, both in y-up pixels with the origin at the bottom-left corner.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub pending_delta: Vec2,
}

impl PointerSample {
    /// Hands out the accumulated motion and starts a new accumulation window.
    pub fn take_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.pending_delta)
    }
}

/// Window cursor coordinates are top-left origin, y down.
pub fn window_to_screen(cursor: Vec2, window_height: f32) -> Vec2 {
    Vec2::new(cursor.x, window_height - cursor.y)
}

pub fn motion_to_screen(delta: Vec2) -> Vec2 {
    Vec2::new(delta.x, -delta.y)
}

pub(crate) fn to_sim(v: Vec2) -> mouseflyer_sim_core::Vec2 {
    mouseflyer_sim_core::Vec2::new(v.x, v.y)
}

pub(crate) fn from_sim(v: mouseflyer_sim_core::Vec2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// Collects mouse motion and keeps the controller's screen geometry in sync
/// with the primary window.
pub fn sample_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut motion: MessageReader<MouseMotion>,
    settings: Res<MouseFlyerSettings>,
    mut pointer: ResMut<PointerSample>,
    mut flight: ResMut<FlightControl>,
) {
    let delta = motion
        .read()
        .fold(Vec2::ZERO, |acc, event| acc + motion_to_screen(event.delta));
    if delta != Vec2::ZERO {
        pointer.pending_delta += delta;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let (width, height) = (window.width(), window.height());
    if let Some(cursor) = window.cursor_position() {
        let position = window_to_screen(cursor, height);
        if pointer.position != position {
            pointer.position = position;
        }
    }

    let ratio = settings.global.outer_circle_radius_ratio;
    match ScreenGeometry::new(width, height, ratio) {
        Ok(geometry) => flight.adopt_geometry(geometry),
        Err(err) => {
            if !flight.geometry_error_reported {
                warn!(width, height, ratio, error = %err, "cannot derive screen geometry");
                flight.geometry_error_reported = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_cursor_is_flipped_to_y_up() {
        let screen = window_to_screen(Vec2::new(100.0, 20.0), 1080.0);
        assert_eq!(screen, Vec2::new(100.0, 1060.0));
    }

    #[test]
    fn downward_motion_is_negative_y() {
        assert_eq!(motion_to_screen(Vec2::new(3.0, 5.0)), Vec2::new(3.0, -5.0));
    }

    #[test]
    fn take_delta_drains_accumulator() {
        let mut pointer = PointerSample {
            position: Vec2::ZERO,
            pending_delta: Vec2::new(4.0, -2.0),
        };
        assert_eq!(pointer.take_delta(), Vec2::new(4.0, -2.0));
        assert_eq!(pointer.pending_delta, Vec2::ZERO);
    }
}
