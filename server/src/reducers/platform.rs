use crate::{
    schema::{platform, Platform},
    types::{DbQuat, DbVec3},
};
use spacetimedb::{ReducerContext, Table};

#[spacetimedb::reducer]
pub fn spawn_platform(
    ctx: &ReducerContext,
    translation: DbVec3,
    rotation: DbQuat,
) -> Result<(), String> {
    if !translation.is_finite() || !rotation.is_finite() {
        return Err("Platform pose must be finite".into());
    }

    let row = ctx.db.platform().insert(Platform {
        id: 0,
        previous_translation: translation,
        previous_rotation: rotation,
        current_translation: translation,
        current_rotation: rotation,
    });
    log::info!("spawned platform {}", row.id);
    Ok(())
}

/// Commit a platform's pose for the coming drag tick.
///
/// Several moves between two ticks collapse into one step: the tick sees the motion
/// from where the platform ended the last tick to the latest pose.
#[spacetimedb::reducer]
pub fn move_platform(
    ctx: &ReducerContext,
    platform_id: u64,
    translation: DbVec3,
    rotation: DbQuat,
) -> Result<(), String> {
    if !translation.is_finite() || !rotation.is_finite() {
        return Err("Platform pose must be finite".into());
    }
    let Some(mut platform) = ctx.db.platform().id().find(platform_id) else {
        return Err("Platform not found".into());
    };

    platform.current_translation = translation;
    platform.current_rotation = rotation;
    ctx.db.platform().id().update(platform);
    Ok(())
}

#[spacetimedb::reducer]
pub fn remove_platform(ctx: &ReducerContext, platform_id: u64) -> Result<(), String> {
    if !ctx.db.platform().id().delete(platform_id) {
        return Err("Platform not found".into());
    }
    // Bodies still referencing it are released on their next tick.
    log::info!("removed platform {platform_id}");
    Ok(())
}
