/// Number of steps a body keeps riding a platform after losing contact with it.
///
/// Bodies bounce, jump and walk over seams, so contact is intermittent. While
/// `steps_since_contact < CONTACT_RETENTION_STEPS` the platform keeps dragging the body.
pub const CONTACT_RETENTION_STEPS: u32 = 20;

/// Per-step multiplier for the carried linear velocity of a released, free-flying body.
pub const FREE_FLIGHT_LINEAR_DECAY: f32 = 0.95;

/// Per-step multiplier for the carried yaw velocity of a released, free-flying body.
///
/// Convention: the square of [`FREE_FLIGHT_LINEAR_DECAY`].
pub const FREE_FLIGHT_YAW_DECAY: f32 = FREE_FLIGHT_LINEAR_DECAY * FREE_FLIGHT_LINEAR_DECAY;

/// Per-step multiplier for the carried linear velocity of a released, airborne body.
pub const AIRBORNE_LINEAR_DECAY: f32 = 0.99;

/// Per-step multiplier for the carried yaw velocity of a released, airborne body.
pub const AIRBORNE_YAW_DECAY: f32 = 0.95;

/// Multiplier applied to the previous yaw velocity when a fresh yaw cannot be derived
/// (near-vertical look, NaN, or mounted body).
pub const YAW_FALLBACK_DECAY: f32 = 0.99;

/// Pitch magnitude (degrees) above which yaw is considered numerically unstable.
pub const MAX_STABLE_PITCH_DEG: f32 = 85.0;

/// Yaw deltas (degrees) smaller than this snap to exactly zero.
pub const YAW_SNAP_DEG: f32 = 0.1;

/// Average edge length (world units) of a swept box beyond which a displacement is
/// treated as a numerical explosion.
pub const MAX_SWEPT_AVERAGE_EDGE: f32 = 999_999.0;

/// Per-axis scale applied to the carried displacement while a body is in a sticky medium.
pub const STICKY_MEDIUM_SCALE: [f32; 3] = [0.25, 0.05, 0.25];

/// Released velocities below these magnitudes snap to zero and drop the platform reference.
pub const REST_LINEAR_EPS: f32 = 1.0e-4;
pub const REST_YAW_EPS_DEG: f32 = 1.0e-3;
