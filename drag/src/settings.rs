/*!
Tuning for the platform drag pipeline.

These values centralize every constant used by the motion integrator, the yaw
synchronizer and the collision resolver. Keeping them together makes tuning easier
and lets a host override them from its own data (see the server's `drag_settings`
table).

Notes
- Distances are in world units, angles in degrees, time in simulation steps.
- Decay factors are per-step multipliers in `(0, 1)`.
*/

use crate::{
    constants::{
        AIRBORNE_LINEAR_DECAY, AIRBORNE_YAW_DECAY, CONTACT_RETENTION_STEPS,
        FREE_FLIGHT_LINEAR_DECAY, FREE_FLIGHT_YAW_DECAY, MAX_STABLE_PITCH_DEG,
        MAX_SWEPT_AVERAGE_EDGE, REST_LINEAR_EPS, REST_YAW_EPS_DEG, STICKY_MEDIUM_SCALE,
        YAW_FALLBACK_DECAY, YAW_SNAP_DEG,
    },
    error::DragError,
    types::Vec3,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSettings {
    /// Steps a platform keeps dragging a body after contact is lost.
    pub contact_retention_steps: u32,
    /// Linear decay for released bodies in free flight.
    pub free_flight_linear_decay: f32,
    /// Yaw decay for released bodies in free flight.
    pub free_flight_yaw_decay: f32,
    /// Linear decay for released airborne bodies.
    pub airborne_linear_decay: f32,
    /// Yaw decay for released airborne bodies.
    pub airborne_yaw_decay: f32,
    /// Yaw decay used when no fresh yaw can be derived this step.
    pub yaw_fallback_decay: f32,
    /// Pitch magnitude (degrees) above which yaw synchronization is skipped.
    pub max_stable_pitch_deg: f32,
    /// Yaw deltas below this magnitude (degrees) snap to zero.
    pub yaw_snap_deg: f32,
    /// Explosion bound on the swept box's average edge length.
    pub max_swept_average_edge: f32,
    /// Per-axis displacement scale while in a sticky medium.
    pub sticky_medium_scale: Vec3,
    /// Released linear velocity below this magnitude comes to rest.
    pub rest_linear_eps: f32,
    /// Released yaw velocity below this magnitude (degrees) comes to rest.
    pub rest_yaw_eps_deg: f32,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            contact_retention_steps: CONTACT_RETENTION_STEPS,
            free_flight_linear_decay: FREE_FLIGHT_LINEAR_DECAY,
            free_flight_yaw_decay: FREE_FLIGHT_YAW_DECAY,
            airborne_linear_decay: AIRBORNE_LINEAR_DECAY,
            airborne_yaw_decay: AIRBORNE_YAW_DECAY,
            yaw_fallback_decay: YAW_FALLBACK_DECAY,
            max_stable_pitch_deg: MAX_STABLE_PITCH_DEG,
            yaw_snap_deg: YAW_SNAP_DEG,
            max_swept_average_edge: MAX_SWEPT_AVERAGE_EDGE,
            sticky_medium_scale: Vec3::from(STICKY_MEDIUM_SCALE),
            rest_linear_eps: REST_LINEAR_EPS,
            rest_yaw_eps_deg: REST_YAW_EPS_DEG,
        }
    }
}

impl DragSettings {
    /// Check every value against its valid range.
    ///
    /// Hosts loading settings from data should call this and fall back to
    /// [`DragSettings::default`] on error.
    pub fn validate(&self) -> Result<(), DragError> {
        let decays = [
            self.free_flight_linear_decay,
            self.free_flight_yaw_decay,
            self.airborne_linear_decay,
            self.airborne_yaw_decay,
            self.yaw_fallback_decay,
        ];
        if decays.iter().any(|d| !(*d > 0.0 && *d < 1.0)) {
            return Err(DragError::InvalidSettings(
                "decay factors must lie strictly between 0 and 1",
            ));
        }
        if !(self.max_stable_pitch_deg > 0.0 && self.max_stable_pitch_deg < 90.0) {
            return Err(DragError::InvalidSettings(
                "max stable pitch must lie strictly between 0 and 90 degrees",
            ));
        }
        if !(self.yaw_snap_deg >= 0.0 && self.yaw_snap_deg < 180.0) {
            return Err(DragError::InvalidSettings(
                "yaw snap must lie in [0, 180) degrees",
            ));
        }
        if !(self.max_swept_average_edge.is_finite() && self.max_swept_average_edge > 0.0) {
            return Err(DragError::InvalidSettings(
                "explosion bound must be finite and positive",
            ));
        }
        if self
            .sticky_medium_scale
            .iter()
            .any(|s| !(*s >= 0.0 && *s <= 1.0))
        {
            return Err(DragError::InvalidSettings(
                "sticky medium scale must lie in [0, 1] per axis",
            ));
        }
        if self.rest_linear_eps < 0.0 || self.rest_yaw_eps_deg < 0.0 {
            return Err(DragError::InvalidSettings("rest thresholds must be >= 0"));
        }
        Ok(())
    }

    /// Linear and yaw decay factors for a released body.
    #[inline]
    pub fn released_decay(&self, free_flying: bool) -> (f32, f32) {
        if free_flying {
            (self.free_flight_linear_decay, self.free_flight_yaw_decay)
        } else {
            (self.airborne_linear_decay, self.airborne_yaw_decay)
        }
    }
}
