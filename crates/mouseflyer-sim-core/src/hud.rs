use std::fmt;

use glam::Vec2;
use mouseflyer_core::{FlyingMode, GlobalSettings, HudColor, Profile};

use crate::controller::{ControlOutput, Controller};

/// Which HUD elements the user has switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudVisibility {
    pub hud_visible: bool,
    pub show_outer_circle: bool,
    pub show_inner_circle: bool,
    pub show_text_panel: bool,
}

impl Default for HudVisibility {
    fn default() -> Self {
        Self {
            hud_visible: true,
            show_outer_circle: true,
            show_inner_circle: true,
            show_text_panel: true,
        }
    }
}

/// Overlay geometry in screen pixels (origin bottom-left, y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudLayout {
    pub center: Vec2,
    pub outer_radius: Option<f32>,
    /// Deadzone ring; only meaningful in absolute mode.
    pub inner_radius: Option<f32>,
    pub marker: Vec2,
    /// Configured color with the HUD opacity folded into alpha.
    pub color: HudColor,
    pub show_text_panel: bool,
}

impl HudLayout {
    /// `None` while the HUD is hidden. `pointer` is the live pointer, shown
    /// in absolute mode; relative mode shows the controller's virtual cursor.
    pub fn compute(
        controller: &Controller,
        mode: FlyingMode,
        pointer: Vec2,
        profile: &Profile,
        settings: &GlobalSettings,
        visibility: HudVisibility,
    ) -> Option<Self> {
        if !visibility.hud_visible {
            return None;
        }
        let geometry = controller.geometry();
        let marker = match mode {
            FlyingMode::Absolute => pointer,
            FlyingMode::Relative => controller.virtual_cursor(),
        };
        let inner_radius = (mode == FlyingMode::Absolute && visibility.show_inner_circle)
            .then(|| geometry.deadzone_radius(profile.deadzone));
        let color = HudColor {
            a: settings.hud_color.a * settings.hud_opacity.clamp(0.0, 1.0),
            ..settings.hud_color
        };
        Some(Self {
            center: geometry.center(),
            outer_radius: visibility
                .show_outer_circle
                .then(|| geometry.max_radius()),
            inner_radius,
            marker,
            color,
            show_text_panel: visibility.show_text_panel,
        })
    }
}

/// Text panel contents.
#[derive(Debug, Clone, PartialEq)]
pub struct HudReadout {
    pub profile: String,
    pub mode: FlyingMode,
    pub output: ControlOutput,
}

impl fmt::Display for HudReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Profile: {}", self.profile)?;
        writeln!(f, "Mode: {}", self.mode.config_name())?;
        writeln!(f, "Roll: {:.2}", self.output.roll)?;
        writeln!(f, "Pitch: {:.2}", self.output.pitch)?;
        write!(f, "Yaw: {:.2}", self.output.yaw)
    }
}
