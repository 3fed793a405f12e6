use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SENSITIVITY_UI_MAX;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("profile {profile}: {field} must be finite")]
    NotFinite { profile: String, field: &'static str },
    #[error("profile {profile}: {field} must be within [0, 1], got {value}")]
    OutOfUnitRange {
        profile: String,
        field: &'static str,
        value: f32,
    },
    #[error("profile {profile}: {field} must not be negative, got {value}")]
    Negative {
        profile: String,
        field: &'static str,
        value: f32,
    },
}

/// Named bundle of tuning parameters consumed by the shaping engine.
///
/// A profile is read-only for the duration of a tick; edits go through
/// [`crate::PendingEdit`] and only land here on commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Per-tick blend weight of the smoothing filter. 1 disables smoothing.
    pub smoothing_factor: f32,
    /// Fraction of the outer radius treated as dead in absolute mode.
    pub deadzone: f32,
    pub roll_sensitivity: f32,
    pub pitch_sensitivity: f32,
    /// Share of roll fed back as yaw.
    pub yaw_correction: f32,
    pub invert_y_axis: bool,
    pub auto_camera_enabled: bool,
}

impl Profile {
    pub const DEFAULT_SMOOTHING_FACTOR: f32 = 0.05;
    pub const DEFAULT_DEADZONE: f32 = 0.01;
    pub const DEFAULT_ROLL_SENSITIVITY: f32 = 0.2;
    pub const DEFAULT_PITCH_SENSITIVITY: f32 = 0.9;
    pub const DEFAULT_YAW_CORRECTION: f32 = 0.3;

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            smoothing_factor: Self::DEFAULT_SMOOTHING_FACTOR,
            deadzone: Self::DEFAULT_DEADZONE,
            roll_sensitivity: Self::DEFAULT_ROLL_SENSITIVITY,
            pitch_sensitivity: Self::DEFAULT_PITCH_SENSITIVITY,
            yaw_correction: Self::DEFAULT_YAW_CORRECTION,
            invert_y_axis: true,
            auto_camera_enabled: true,
        }
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        self.check_unit("smoothing_factor", self.smoothing_factor)?;
        self.check_unit("deadzone", self.deadzone)?;
        self.check_non_negative("roll_sensitivity", self.roll_sensitivity)?;
        self.check_non_negative("pitch_sensitivity", self.pitch_sensitivity)?;
        self.check_non_negative("yaw_correction", self.yaw_correction)?;
        Ok(())
    }

    /// Clamps every float into the range the settings sliders expose.
    pub fn clamped_to_ui_ranges(&self) -> Self {
        Self {
            smoothing_factor: clamp_or_zero(self.smoothing_factor, 1.0),
            deadzone: clamp_or_zero(self.deadzone, 1.0),
            roll_sensitivity: clamp_or_zero(self.roll_sensitivity, SENSITIVITY_UI_MAX),
            pitch_sensitivity: clamp_or_zero(self.pitch_sensitivity, SENSITIVITY_UI_MAX),
            yaw_correction: clamp_or_zero(self.yaw_correction, SENSITIVITY_UI_MAX),
            ..self.clone()
        }
    }

    fn check_finite(&self, field: &'static str, value: f32) -> Result<(), ProfileError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(ProfileError::NotFinite {
                profile: self.name.clone(),
                field,
            })
        }
    }

    fn check_unit(&self, field: &'static str, value: f32) -> Result<(), ProfileError> {
        self.check_finite(field, value)?;
        if (0.0..=1.0).contains(&value) {
            return Ok(());
        }
        Err(ProfileError::OutOfUnitRange {
            profile: self.name.clone(),
            field,
            value,
        })
    }

    fn check_non_negative(&self, field: &'static str, value: f32) -> Result<(), ProfileError> {
        self.check_finite(field, value)?;
        if value >= 0.0 {
            return Ok(());
        }
        Err(ProfileError::Negative {
            profile: self.name.clone(),
            field,
            value,
        })
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::named("1")
    }
}

fn clamp_or_zero(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}
