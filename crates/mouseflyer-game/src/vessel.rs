//! Vessel-side collaborator: where shaped axes end up.

use bevy::ecs::query::QuerySingleError;
use bevy::prelude::*;
use mouseflyer_sim_core::ControlOutput;
use thiserror::Error;

/// Anything that accepts normalized roll/pitch/yaw commands.
pub trait VesselActuator {
    fn set_roll(&mut self, roll: f32);
    fn set_pitch(&mut self, pitch: f32);
    fn set_yaw(&mut self, yaw: f32);

    fn apply_control(&mut self, output: &ControlOutput) {
        self.set_roll(output.roll);
        self.set_pitch(output.pitch);
        self.set_yaw(output.yaw);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VesselLookupError {
    #[error("no active vessel")]
    Missing,
    #[error("more than one active vessel")]
    Ambiguous,
}

impl From<QuerySingleError> for VesselLookupError {
    fn from(err: QuerySingleError) -> Self {
        match err {
            QuerySingleError::NoEntities(_) => Self::Missing,
            QuerySingleError::MultipleEntities(_) => Self::Ambiguous,
        }
    }
}

/// Marks the vessel the player is currently flying.
#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct ActiveVessel;

/// Control inputs of a simulated vessel, plus the attitude rates they map to.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
pub struct ControlledVessel {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
    /// Angular rate at full deflection, per axis.
    pub max_rate_rad_s: Vec3,
}

impl Default for ControlledVessel {
    fn default() -> Self {
        Self {
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            max_rate_rad_s: Vec3::new(2.5, 1.2, 0.6),
        }
    }
}

impl VesselActuator for ControlledVessel {
    fn set_roll(&mut self, roll: f32) {
        self.roll = roll.clamp(-1.0, 1.0);
    }

    fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-1.0, 1.0);
    }

    fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw.clamp(-1.0, 1.0);
    }
}

/// Turns the active vessel by its control inputs. Local frame: roll about
/// forward (-Z), pitch about right (X), yaw about up (Y).
pub fn integrate_vessel_attitude(
    time: Res<Time>,
    mut vessels: Query<(&mut Transform, &ControlledVessel)>,
) {
    let dt = time.delta_secs();
    for (mut transform, vessel) in &mut vessels {
        let rates = vessel.max_rate_rad_s;
        let local = Quat::from_axis_angle(Vec3::NEG_Z, vessel.roll * rates.x * dt)
            * Quat::from_axis_angle(Vec3::X, vessel.pitch * rates.y * dt)
            * Quat::from_axis_angle(Vec3::NEG_Y, vessel.yaw * rates.z * dt);
        transform.rotation = (transform.rotation * local).normalize();
    }
}
