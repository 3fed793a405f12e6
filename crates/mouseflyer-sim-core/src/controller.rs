use glam::Vec2;
use mouseflyer_core::{FlyingMode, Profile};

use crate::geometry::ScreenGeometry;
use crate::mode_policy::{self, DisplayToken};
use crate::shaping::ShapingState;

/// What happens to the smoothing history when the flying mode changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeSwitchPolicy {
    /// Keep `last_output`; the first tick after a switch blends the old
    /// mode's output with the new one.
    #[default]
    CarryHistory,
    /// Zero `last_output` on the first tick of a new mode.
    ResetHistory,
}

/// Axis values for one tick plus the cursor instruction for the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlOutput {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub display: DisplayToken,
}

/// Owns the shaping state for one steering session.
///
/// The host calls [`Controller::step`] once per physics tick while steering
/// is enabled and forwards the result to its vessel and cursor managers.
#[derive(Debug, Clone)]
pub struct Controller {
    geometry: ScreenGeometry,
    state: ShapingState,
    policy: ModeSwitchPolicy,
    last_mode: Option<Option<FlyingMode>>,
}

impl Controller {
    pub fn new(geometry: ScreenGeometry) -> Self {
        Self {
            state: ShapingState::new(geometry.center()),
            geometry,
            policy: ModeSwitchPolicy::default(),
            last_mode: None,
        }
    }

    pub fn with_mode_switch_policy(mut self, policy: ModeSwitchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn geometry(&self) -> &ScreenGeometry {
        &self.geometry
    }

    /// Adopts a new screen size. The virtual cursor is pulled back on screen.
    pub fn set_geometry(&mut self, geometry: ScreenGeometry) {
        self.geometry = geometry;
        self.state.virtual_cursor = geometry.clamp_to_bounds(self.state.virtual_cursor);
    }

    pub fn last_output(&self) -> Vec2 {
        self.state.last_output
    }

    pub fn virtual_cursor(&self) -> Vec2 {
        self.state.virtual_cursor
    }

    pub fn state(&self) -> &ShapingState {
        &self.state
    }

    /// Clears the smoothing history and recenters the virtual cursor.
    pub fn reset(&mut self) {
        self.state.reset(self.geometry.center());
        self.last_mode = None;
    }

    pub fn step(
        &mut self,
        mode: Option<FlyingMode>,
        pointer: Vec2,
        frame_delta: Vec2,
        profile: &Profile,
    ) -> ControlOutput {
        if self.policy == ModeSwitchPolicy::ResetHistory
            && self.last_mode.is_some_and(|previous| previous != mode)
        {
            self.state.last_output = Vec2::ZERO;
        }
        self.last_mode = Some(mode);

        let sample =
            mode_policy::acquire(mode, pointer, frame_delta, &self.geometry, profile.deadzone);
        let shaped = self.state.shape(sample.raw, profile);

        if mode == Some(FlyingMode::Relative) {
            self.state
                .advance_virtual_cursor(frame_delta, &self.geometry, profile.smoothing_factor);
        }

        ControlOutput {
            roll: shaped.x,
            pitch: shaped.y,
            yaw: shaped.x * profile.yaw_correction,
            display: sample.display,
        }
    }
}
