//! Platform drag tick.
//!
//! This file contains:
//! - `DragTickTimer` scheduled table
//! - `init(ctx)` to schedule the tick
//! - `drag_tick_reducer` scheduled reducer
//!
//! One tick is one simulation step of `drag::process_step` for every body. Platform
//! poses must be committed (via `move_platform`) before the tick that should see them.

use crate::{
    schema::{body, drag_settings, motion_state, platform, MotionStateRow},
    world::static_world,
};
use drag::{process_step, DragSettings, MotionState, PlatformScene};
use spacetimedb::{ReducerContext, ScheduleAt, Table, TimeDuration};

/// Drag tick frequency (Hz).
pub const DRAG_TICK_HZ: i64 = 20;

/// Scheduled timer for the drag tick.
///
/// IMPORTANT:
/// Scheduled tables must include a `scheduled_id: u64` primary key with `#[auto_inc]`.
#[spacetimedb::table(name = drag_tick_timer, scheduled(drag_tick_reducer))]
pub struct DragTickTimer {
    /// Primary key for the scheduled job (single row used).
    #[primary_key]
    #[auto_inc]
    pub scheduled_id: u64,

    /// When/how often to invoke the scheduled reducer.
    pub scheduled_at: ScheduleAt,

    /// Ticks run so far.
    pub step: u64,
}

/// Schedule the drag tick.
pub fn init(ctx: &ReducerContext) {
    let interval = TimeDuration::from_micros(1_000_000i64 / DRAG_TICK_HZ);

    // Single-row scheduled job.
    ctx.db.drag_tick_timer().scheduled_id().delete(1);
    ctx.db.drag_tick_timer().insert(DragTickTimer {
        scheduled_id: 1,
        scheduled_at: ScheduleAt::Interval(interval),
        step: 0,
    });
}

/// Load tuning from the `drag_settings` row, falling back to defaults.
fn load_settings(ctx: &ReducerContext) -> DragSettings {
    let Some(row) = ctx.db.drag_settings().id().find(1) else {
        log::warn!("no drag settings row; using defaults");
        return DragSettings::default();
    };

    let settings = DragSettings::from(&row);
    match settings.validate() {
        Ok(()) => settings,
        Err(err) => {
            log::error!("{err}; using defaults");
            DragSettings::default()
        }
    }
}

#[spacetimedb::reducer]
pub fn drag_tick_reducer(ctx: &ReducerContext, mut timer: DragTickTimer) -> Result<(), String> {
    // Only the server (module identity) may invoke scheduled reducers.
    if ctx.sender != ctx.identity() {
        return Err("`drag_tick_reducer` may not be invoked by clients.".into());
    }

    let settings = load_settings(ctx);

    let mut scene = PlatformScene::new(static_world(ctx));
    for platform in ctx.db.platform().iter() {
        scene.insert_platform_poses(platform.id, platform.poses());
    }

    // Bodies are stepped one at a time; none observes another's motion state.
    for mut row in ctx.db.body().iter() {
        let motion = ctx
            .db
            .motion_state()
            .body_id()
            .find(row.id)
            .map(|m| MotionState::from(&m));
        let is_new = motion.is_none();

        scene.set_contact(row.id, row.contact());
        let mut body = row.to_body(motion.unwrap_or_default());
        process_step(&mut body, &scene, &settings);
        scene.clear_contact(row.id);

        let state = MotionStateRow::from_state(row.id, &body.motion);
        if is_new {
            ctx.db.motion_state().insert(state);
        } else {
            ctx.db.motion_state().body_id().update(state);
        }

        row.apply(&body);
        ctx.db.body().id().update(row);
    }

    // The step is over: what each platform ends it at is the next step's previous pose.
    for mut platform in ctx.db.platform().iter() {
        if platform.is_moving() {
            platform.previous_translation = platform.current_translation;
            platform.previous_rotation = platform.current_rotation;
            ctx.db.platform().id().update(platform);
        }
    }

    // Persist timer state.
    timer.step += 1;
    ctx.db.drag_tick_timer().scheduled_id().update(timer);

    Ok(())
}
