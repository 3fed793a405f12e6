use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};
use mouseflyer_sim_core::DisplayToken;

use crate::MouseFlyerSettings;
use crate::flight::FlightControl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    pub visible: bool,
    pub grab_mode: CursorGrabMode,
}

/// The custom absolute-mode cursor image is not loaded here; the cursor just
/// stays visible and free.
pub fn cursor_state(token: DisplayToken) -> CursorState {
    match token {
        DisplayToken::UnlockedCustomCursor => CursorState {
            visible: true,
            grab_mode: CursorGrabMode::None,
        },
        DisplayToken::LockedHiddenCursor => CursorState {
            visible: false,
            grab_mode: CursorGrabMode::Locked,
        },
        DisplayToken::DefaultCursor => CursorState {
            visible: true,
            grab_mode: CursorGrabMode::None,
        },
    }
}

pub fn apply_cursor_display(
    settings: Res<MouseFlyerSettings>,
    flight: Res<FlightControl>,
    mut cursors: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    let Ok(mut cursor) = cursors.single_mut() else {
        return;
    };
    let token = flight.display_token(settings.runtime.steering_enabled);
    let wanted = cursor_state(token);
    if cursor.visible == wanted.visible && cursor.grab_mode == wanted.grab_mode {
        return;
    }
    debug!(?token, "updating cursor");
    cursor.visible = wanted.visible;
    cursor.grab_mode = wanted.grab_mode;
}
