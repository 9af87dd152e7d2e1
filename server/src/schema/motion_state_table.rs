use drag::MotionState;
use spacetimedb::*;

use crate::types::DbVec3;

/// Persisted platform drag state of one body (`body_id` matches `body.id`).
///
/// Created on the body's first tick and rewritten every tick after.
#[table(name = motion_state, public)]
pub struct MotionStateRow {
    #[primary_key]
    pub body_id: u64,

    /// Weak reference; the platform row may be gone.
    pub last_touched_platform: Option<u64>,
    pub steps_since_contact: u32,
    pub added_linear_velocity: DbVec3,
    /// Degrees per step.
    pub added_yaw_velocity: f32,
}

impl MotionStateRow {
    pub fn from_state(body_id: u64, state: &MotionState) -> Self {
        Self {
            body_id,
            last_touched_platform: state.last_touched_platform,
            steps_since_contact: state.steps_since_contact,
            added_linear_velocity: state.added_linear_velocity.into(),
            added_yaw_velocity: state.added_yaw_velocity,
        }
    }
}

impl From<&MotionStateRow> for MotionState {
    fn from(row: &MotionStateRow) -> Self {
        Self {
            last_touched_platform: row.last_touched_platform,
            steps_since_contact: row.steps_since_contact,
            added_linear_velocity: row.added_linear_velocity.into(),
            added_yaw_velocity: row.added_yaw_velocity,
        }
    }
}
