//! Keyboard side of the plugin.
//!
//! Pressed keys → [`ControlCommand`] via [`KeyBindings`] → state changes via
//! [`apply_command`]. The key type is generic so the host can plug in its
//! own key codes while persistence works with key names.

pub mod bindings;
pub mod commands;

pub use bindings::{BindingAction, KeyBindings};
pub use commands::{
    CameraMode, ControlCommand, ControlEffect, RuntimeState, apply_command, map_pressed_keys,
};
