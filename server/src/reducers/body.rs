use crate::{
    schema::{body, motion_state, BodyRow},
    types::{BodyFacing, DbVec3},
};
use spacetimedb::{ReducerContext, Table};

#[spacetimedb::reducer]
pub fn spawn_body(
    ctx: &ReducerContext,
    facing: BodyFacing,
    position: DbVec3,
    half_width: f32,
    height: f32,
    step_height: f32,
) -> Result<(), String> {
    if !position.is_finite() {
        return Err("Body position must be finite".into());
    }
    if !(half_width > 0.0 && height > 0.0) {
        return Err("Body extents must be positive".into());
    }
    if !(step_height >= 0.0) {
        return Err("Step height must be >= 0".into());
    }

    let row = ctx.db.body().insert(BodyRow {
        id: 0,
        facing,
        position,
        half_width,
        height,
        yaw: 0.0,
        head_yaw: 0.0,
        pitch: 0.0,
        flags: 0,
        step_height,
        own_velocity: DbVec3::ZERO,
        touching_platform: None,
        mounted: false,
    });
    log::info!("spawned body {}", row.id);
    Ok(())
}

/// Record the game's grounding query result for a body.
#[spacetimedb::reducer]
pub fn set_body_contact(
    ctx: &ReducerContext,
    body_id: u64,
    touching_platform: Option<u64>,
    mounted: bool,
    grounded: bool,
) -> Result<(), String> {
    let Some(mut row) = ctx.db.body().id().find(body_id) else {
        return Err("Body not found".into());
    };

    let mut flags = drag::BodyFlags::new(row.flags);
    flags.set(drag::BodyFlag::Grounded, grounded);

    row.touching_platform = touching_platform;
    row.mounted = mounted;
    row.flags = flags.bits;
    ctx.db.body().id().update(row);
    Ok(())
}

/// Replace a body's behaviour flags (raw `drag::BodyFlag` bits).
#[spacetimedb::reducer]
pub fn set_body_flags(ctx: &ReducerContext, body_id: u64, flags: u8) -> Result<(), String> {
    let Some(mut row) = ctx.db.body().id().find(body_id) else {
        return Err("Body not found".into());
    };
    row.flags = flags;
    ctx.db.body().id().update(row);
    Ok(())
}

#[spacetimedb::reducer]
pub fn remove_body(ctx: &ReducerContext, body_id: u64) -> Result<(), String> {
    if !ctx.db.body().id().delete(body_id) {
        return Err("Body not found".into());
    }
    ctx.db.motion_state().body_id().delete(body_id);
    Ok(())
}
