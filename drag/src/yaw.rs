use std::f32::consts::PI;

use crate::{pose::PlatformPoseDelta, settings::DragSettings, types::Vec3};

/// Wrap an angle in degrees into `[-180, 180)`.
#[inline]
pub fn wrap_degrees(deg: f32) -> f32 {
    let mut d = deg % 360.0;
    if d >= 180.0 {
        d -= 360.0;
    }
    if d < -180.0 {
        d += 360.0;
    }
    d
}

/// Yaw change (degrees) keeping a body's facing in step with its platform's rotation.
///
/// The body's look direction is rotated by the platform delta and the yaw of the result
/// is compared against `facing_yaw`. Returns a value in `(-180, 180]`, snapped to exactly
/// zero below `settings.yaw_snap_deg`.
///
/// When the rotated look is near vertical (`|pitch| > settings.max_stable_pitch_deg`) or
/// the yaw is not finite, nothing is derived this step and `previous_yaw_velocity`
/// decayed by `settings.yaw_fallback_decay` is returned instead.
pub fn synchronize_yaw(
    delta: &PlatformPoseDelta,
    look: &Vec3,
    facing_yaw: f32,
    previous_yaw_velocity: f32,
    settings: &DragSettings,
) -> f32 {
    let fallback = previous_yaw_velocity * settings.yaw_fallback_decay;

    let rotated = delta.transform_direction(look);
    let pitch = rotated.y.asin() * -180.0 / PI;
    if !pitch.is_finite() || pitch.abs() > settings.max_stable_pitch_deg {
        return fallback;
    }

    // Horizontal length of the look, signed to match the look-vector convention.
    let horizontal = -(-pitch).to_radians().cos();
    let raw = ((rotated.x / horizontal).atan2(rotated.z / horizontal) + PI) * -180.0 / PI;
    if !raw.is_finite() {
        return fallback;
    }

    let mut yaw_delta = wrap_degrees(raw) - wrap_degrees(facing_yaw);
    if yaw_delta.abs() > 180.0 {
        if yaw_delta < 0.0 {
            yaw_delta += 360.0;
        } else {
            yaw_delta -= 360.0;
        }
    }
    if yaw_delta <= -180.0 {
        yaw_delta = 180.0;
    }
    if yaw_delta.abs() < settings.yaw_snap_deg {
        return 0.0;
    }
    yaw_delta
}
