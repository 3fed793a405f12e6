//! Input shaping engine.
//!
//! Turns pointer samples into roll/pitch/yaw once per simulation tick:
//! mode policy (absolute offset or relative delta) → axis scaling →
//! exponential smoothing. All state lives in a [`Controller`]; nothing here
//! touches the host.

pub mod controller;
pub mod geometry;
pub mod hud;
pub mod mode_policy;
pub mod shaping;

pub use controller::{ControlOutput, Controller, ModeSwitchPolicy};
pub use geometry::{GeometryError, ScreenGeometry};
pub use glam::Vec2;
pub use hud::{HudLayout, HudReadout, HudVisibility};
pub use mode_policy::{DisplayToken, RawSample};
pub use shaping::{ShapingState, lerp};
