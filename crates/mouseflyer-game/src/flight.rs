use bevy::prelude::*;
use mouseflyer_sim_core::{ControlOutput, Controller, DisplayToken, ModeSwitchPolicy, ScreenGeometry};

use crate::MouseFlyerSettings;
use crate::pointer::{PointerSample, to_sim};
use crate::vessel::{ActiveVessel, ControlledVessel, VesselActuator, VesselLookupError};

/// Shaping state for the current steering session.
///
/// The controller is created once the primary window reports a usable size.
#[derive(Resource, Debug, Default)]
pub struct FlightControl {
    controller: Option<Controller>,
    last_output: Option<ControlOutput>,
    policy: ModeSwitchPolicy,
    pub(crate) geometry_error_reported: bool,
}

impl FlightControl {
    pub fn with_geometry(geometry: ScreenGeometry) -> Self {
        Self {
            controller: Some(Controller::new(geometry)),
            ..Self::default()
        }
    }

    pub fn with_mode_switch_policy(mut self, policy: ModeSwitchPolicy) -> Self {
        self.policy = policy;
        self.controller = self
            .controller
            .map(|controller| controller.with_mode_switch_policy(policy));
        self
    }

    pub fn controller(&self) -> Option<&Controller> {
        self.controller.as_ref()
    }

    pub fn last_output(&self) -> Option<ControlOutput> {
        self.last_output
    }

    /// Cursor instruction for the host; nothing steers while disabled.
    pub fn display_token(&self, steering_enabled: bool) -> DisplayToken {
        if !steering_enabled {
            return DisplayToken::DefaultCursor;
        }
        self.last_output
            .map(|output| output.display)
            .unwrap_or(DisplayToken::DefaultCursor)
    }

    pub fn adopt_geometry(&mut self, geometry: ScreenGeometry) {
        match self.controller.as_mut() {
            Some(controller) if *controller.geometry() != geometry => {
                debug!(
                    width = geometry.width(),
                    height = geometry.height(),
                    "screen geometry changed"
                );
                controller.set_geometry(geometry);
            }
            Some(_) => {}
            None => {
                self.controller =
                    Some(Controller::new(geometry).with_mode_switch_policy(self.policy));
                self.geometry_error_reported = false;
            }
        }
    }

    /// Drops the last tick's output so the cursor reverts until the next
    /// step. Shaping history is kept.
    pub fn clear_output(&mut self) {
        self.last_output = None;
    }
}

pub fn active_vessel<'a>(
    vessels: &'a mut Query<&mut ControlledVessel, With<ActiveVessel>>,
) -> Result<Mut<'a, ControlledVessel>, VesselLookupError> {
    vessels.single_mut().map_err(VesselLookupError::from)
}

/// One shaping step per physics tick while steering is enabled.
///
/// Pending motion is drained every tick, so a tick only ever sees the motion
/// since the previous one.
pub fn update_flight_controls(
    settings: Res<MouseFlyerSettings>,
    mut pointer: ResMut<PointerSample>,
    mut flight: ResMut<FlightControl>,
    mut vessels: Query<&mut ControlledVessel, With<ActiveVessel>>,
) {
    let delta = pointer.take_delta();
    if !settings.runtime.steering_enabled {
        return;
    }
    let flight = &mut *flight;
    let Some(controller) = flight.controller.as_mut() else {
        return;
    };
    let mut vessel = match active_vessel(&mut vessels) {
        Ok(vessel) => vessel,
        Err(err) => {
            debug!(error = %err, "skipping control tick");
            return;
        }
    };

    let output = controller.step(
        Some(settings.global.flying_mode),
        to_sim(pointer.position),
        to_sim(delta),
        settings.profiles.active(),
    );
    vessel.apply_control(&output);
    flight.last_output = Some(output);
}
