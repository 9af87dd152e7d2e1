//! World geometry loader and static-world cache.
//!
//! This module is responsible for:
//! - Reading immutable world-static collider rows from the database.
//! - Converting them to schema-agnostic `drag::WorldStaticDef`s.
//! - Building and caching the `drag::StaticWorld` the drag tick collides against.
//!
//! World statics are treated as immutable. We build once and reuse every tick; rows
//! inserted after the first tick are not picked up.

use crate::{
    schema::{world_static, WorldStatic},
    types::{ColliderShape, DbQuat, DbVec3},
};
use drag::{ColliderShapeDef, StaticWorld, WorldStaticDef};
use spacetimedb::{ReducerContext, Table};
use std::sync::OnceLock;

/// Cached static world built from `world_static` rows.
static STATIC_WORLD: OnceLock<StaticWorld> = OnceLock::new();

/// Return the cached static world, building it from the `world_static` table on first use.
pub fn static_world(ctx: &ReducerContext) -> &'static StaticWorld {
    STATIC_WORLD.get_or_init(|| {
        let world = StaticWorld::build(ctx.db.world_static().iter().filter_map(row_to_def));
        log::info!("built static world with {} collision boxes", world.len());
        world
    })
}

/// Convert a single `WorldStatic` row to the schema-agnostic definition.
///
/// Rows with non-finite transforms are skipped.
fn row_to_def(row: WorldStatic) -> Option<WorldStaticDef> {
    if !row.translation.is_finite() || !row.rotation.is_finite() {
        log::warn!("world static {} has a non-finite transform; skipped", row.id);
        return None;
    }

    let shape = match row.shape {
        ColliderShape::Cuboid(he) => ColliderShapeDef::Cuboid {
            half_extents: he.into(),
        },
        ColliderShape::Sphere(radius) => ColliderShapeDef::Sphere { radius },
        ColliderShape::Capsule(dim) => ColliderShapeDef::CapsuleY {
            radius: dim.radius,
            half_height: dim.half_height,
        },
        ColliderShape::Cylinder(dim) => ColliderShapeDef::CylinderY {
            radius: dim.radius,
            half_height: dim.half_height,
        },
        ColliderShape::Cone(dim) => ColliderShapeDef::ConeY {
            radius: dim.radius,
            half_height: dim.half_height,
        },
        ColliderShape::RoundCuboid(rc) => ColliderShapeDef::RoundCuboid {
            half_extents: rc.half_extents.into(),
            border_radius: rc.border_radius,
        },
    };

    Some(WorldStaticDef {
        id: row.id as u32,
        translation: row.translation.into(),
        rotation: row.rotation.into(),
        shape,
    })
}

/// Seed a small demo world: a ground slab and a couple of low walls.
///
/// Existing rows are left alone.
pub fn seed_static_world(ctx: &ReducerContext) {
    if ctx.db.world_static().iter().next().is_some() {
        return;
    }

    let rows = [
        (DbVec3::new(0.0, -0.5, 0.0), ColliderShape::Cuboid(DbVec3::new(64.0, 0.5, 64.0))),
        (DbVec3::new(12.0, 0.5, 0.0), ColliderShape::Cuboid(DbVec3::new(0.5, 0.5, 8.0))),
        (DbVec3::new(-12.0, 1.0, 0.0), ColliderShape::Cuboid(DbVec3::new(0.5, 1.0, 8.0))),
    ];
    for (translation, shape) in rows {
        ctx.db.world_static().insert(WorldStatic {
            id: 0,
            translation,
            rotation: DbQuat::IDENTITY,
            shape,
        });
    }
}
