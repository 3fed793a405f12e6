use glam::Vec2;
use mouseflyer_core::Profile;

use crate::geometry::ScreenGeometry;

/// `a + (b - a) * clamp(t, 0, 1)`. `t >= 1` returns `b` exactly.
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    let t = t.clamp(0.0, 1.0);
    if t == 1.0 {
        return b;
    }
    a + (b - a) * t
}

/// Sensitivity scaling and Y inversion, applied before smoothing.
pub fn scale_axes(raw: Vec2, profile: &Profile) -> Vec2 {
    let invert = if profile.invert_y_axis { -1.0 } else { 1.0 };
    Vec2::new(
        raw.x * profile.roll_sensitivity,
        raw.y * profile.pitch_sensitivity * invert,
    )
}

/// State carried between ticks by one controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapingState {
    /// Previous smoothed output; the filter's only history.
    pub last_output: Vec2,
    /// HUD-only cursor tracked in relative mode.
    pub virtual_cursor: Vec2,
}

impl ShapingState {
    pub fn new(center: Vec2) -> Self {
        Self {
            last_output: Vec2::ZERO,
            virtual_cursor: center,
        }
    }

    pub fn reset(&mut self, center: Vec2) {
        *self = Self::new(center);
    }

    /// Scales and smooths `raw`, then records the result as the new history.
    ///
    /// The blend weight is per tick, not per second: the same profile feels
    /// stiffer at higher tick rates.
    pub fn shape(&mut self, raw: Vec2, profile: &Profile) -> Vec2 {
        let target = scale_axes(raw, profile);
        let shaped = lerp(self.last_output, target, profile.smoothing_factor);
        self.last_output = shaped;
        shaped
    }

    /// Moves the virtual cursor by `delta`, or eases it back to center on a
    /// still tick. Never overshoots the center.
    pub fn advance_virtual_cursor(&mut self, delta: Vec2, geometry: &ScreenGeometry, rate: f32) {
        self.virtual_cursor = if delta == Vec2::ZERO {
            // Step form: the result stays between the cursor and the center.
            let toward_center = geometry.center() - self.virtual_cursor;
            self.virtual_cursor + toward_center * rate.clamp(0.0, 1.0)
        } else {
            geometry.clamp_to_bounds(self.virtual_cursor + delta)
        };
    }
}
