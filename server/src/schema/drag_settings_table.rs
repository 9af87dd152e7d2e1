use drag::DragSettings;
use spacetimedb::*;

use crate::types::DbVec3;

/// Platform drag tuning shared by server and clients.
///
/// This is intended to be a single-row table (`id = 1`) that:
/// - the drag tick reads and converts into `drag::DragSettings` every tick, and
/// - clients subscribe to in order to predict drag locally with the same tuning.
///
/// Notes
/// - Distances are world units, angles degrees, time simulation steps.
/// - Rows failing `DragSettings::validate` are ignored in favour of the defaults.
#[table(name = drag_settings, public)]
pub struct DragSettingsRow {
    /// Unique id (primary key). Use a single row with `id = 1`.
    #[primary_key]
    pub id: u32,

    /// Steps a platform keeps dragging a body after contact is lost.
    pub contact_retention_steps: u32,

    /// Per-step decay of released velocity in free flight.
    pub free_flight_linear_decay: f32,
    pub free_flight_yaw_decay: f32,

    /// Per-step decay of released velocity while airborne.
    pub airborne_linear_decay: f32,
    pub airborne_yaw_decay: f32,

    /// Decay applied to the previous yaw velocity when no yaw can be derived.
    pub yaw_fallback_decay: f32,

    /// Pitch (degrees) above which yaw sync is skipped.
    pub max_stable_pitch_deg: f32,

    /// Yaw deltas below this (degrees) snap to zero.
    pub yaw_snap_deg: f32,

    /// Bound on the swept box's average edge length.
    pub max_swept_average_edge: f32,

    /// Per-axis displacement scale inside a sticky medium.
    pub sticky_medium_scale: DbVec3,

    /// Released velocities below these magnitudes come to rest.
    pub rest_linear_eps: f32,
    pub rest_yaw_eps_deg: f32,
}

impl DragSettingsRow {
    pub fn from_settings(id: u32, s: &DragSettings) -> Self {
        Self {
            id,
            contact_retention_steps: s.contact_retention_steps,
            free_flight_linear_decay: s.free_flight_linear_decay,
            free_flight_yaw_decay: s.free_flight_yaw_decay,
            airborne_linear_decay: s.airborne_linear_decay,
            airborne_yaw_decay: s.airborne_yaw_decay,
            yaw_fallback_decay: s.yaw_fallback_decay,
            max_stable_pitch_deg: s.max_stable_pitch_deg,
            yaw_snap_deg: s.yaw_snap_deg,
            max_swept_average_edge: s.max_swept_average_edge,
            sticky_medium_scale: s.sticky_medium_scale.into(),
            rest_linear_eps: s.rest_linear_eps,
            rest_yaw_eps_deg: s.rest_yaw_eps_deg,
        }
    }
}

impl From<&DragSettingsRow> for DragSettings {
    fn from(row: &DragSettingsRow) -> Self {
        Self {
            contact_retention_steps: row.contact_retention_steps,
            free_flight_linear_decay: row.free_flight_linear_decay,
            free_flight_yaw_decay: row.free_flight_yaw_decay,
            airborne_linear_decay: row.airborne_linear_decay,
            airborne_yaw_decay: row.airborne_yaw_decay,
            yaw_fallback_decay: row.yaw_fallback_decay,
            max_stable_pitch_deg: row.max_stable_pitch_deg,
            yaw_snap_deg: row.yaw_snap_deg,
            max_swept_average_edge: row.max_swept_average_edge,
            sticky_medium_scale: row.sticky_medium_scale.into(),
            rest_linear_eps: row.rest_linear_eps,
            rest_yaw_eps_deg: row.rest_yaw_eps_deg,
        }
    }
}
