use glam::Vec2;
use mouseflyer_core::FlyingMode;
use serde::{Deserialize, Serialize};

use crate::geometry::ScreenGeometry;

/// Instruction for the host's cursor manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayToken {
    /// Pointer visible and free, drawn with the crosshair cursor.
    UnlockedCustomCursor,
    /// Pointer locked in place and hidden.
    LockedHiddenCursor,
    /// Host default cursor, unlocked and visible.
    DefaultCursor,
}

/// Unshaped mode-policy output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSample {
    pub raw: Vec2,
    pub display: DisplayToken,
}

pub fn acquire(
    mode: Option<FlyingMode>,
    pointer: Vec2,
    frame_delta: Vec2,
    geometry: &ScreenGeometry,
    deadzone: f32,
) -> RawSample {
    match mode {
        Some(FlyingMode::Absolute) => RawSample {
            raw: absolute_raw(pointer, geometry, deadzone),
            display: DisplayToken::UnlockedCustomCursor,
        },
        Some(FlyingMode::Relative) => RawSample {
            raw: frame_delta,
            display: DisplayToken::LockedHiddenCursor,
        },
        None => RawSample {
            raw: Vec2::ZERO,
            display: DisplayToken::DefaultCursor,
        },
    }
}

/// Offset from the screen center, clamped to the outer radius and
/// normalized so each component lands in `[-1, 1]`.
///
/// The deadzone is a radius: inside it both axes are zeroed together. A
/// sample exactly on the deadzone radius passes through.
pub fn absolute_raw(pointer: Vec2, geometry: &ScreenGeometry, deadzone: f32) -> Vec2 {
    let max_radius = geometry.max_radius();
    let direction = (pointer - geometry.center()).clamp_length_max(max_radius);
    if direction.length() < geometry.deadzone_radius(deadzone) {
        return Vec2::ZERO;
    }
    direction / max_radius
}
