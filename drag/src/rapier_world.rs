//! Rapier-backed static geometry for the drag resolver.
//!
//! Builds world-static colliders from schema-agnostic definitions (typically sourced
//! from DB rows), takes each collider's world-space AABB and indexes them in a BVH.
//! The resolver only ever sees boxes, so rotated or curved shapes collide as their
//! bounding boxes.
//!
//! Design goals
//! - Deterministic: given the same inputs, build identical boxes in `id` order.
//! - Immutable world: statics do not move after construction; rebuild to change them.

use rapier3d::{
    na::{Translation3, UnitQuaternion},
    parry::{
        bounding_volume::Aabb,
        partitioning::{Bvh, BvhBuildStrategy},
    },
    prelude::*,
};

use crate::{collision::BoundingBox, types::Vec3, world::StaticGeometry};

/// Canonical, schema-agnostic definition of an immutable world collider.
///
/// Conventions
/// - Units are world units.
/// - Rotation is a unit quaternion.
#[derive(Clone, Debug)]
pub struct WorldStaticDef {
    /// Stable unique identifier used to ensure deterministic insertion order.
    pub id: u32,
    /// World-space translation.
    pub translation: Vector<f32>,
    /// World-space rotation (unit quaternion).
    pub rotation: UnitQuaternion<f32>,
    /// Collider shape parameters.
    pub shape: ColliderShapeDef,
}

/// Supported static collider shapes. All are finite.
#[derive(Clone, Debug)]
pub enum ColliderShapeDef {
    /// Oriented cuboid with given half-extents.
    Cuboid { half_extents: Vector<f32> },

    Sphere { radius: f32 },

    /// Y-aligned capsule.
    CapsuleY { radius: f32, half_height: f32 },

    /// Y-aligned cylinder.
    CylinderY { radius: f32, half_height: f32 },

    /// Y-aligned cone.
    ConeY { radius: f32, half_height: f32 },

    /// Rounded cuboid; `border_radius` rounds all edges/corners.
    RoundCuboid {
        half_extents: Vector<f32>,
        border_radius: f32,
    },
}

/// Build a Rapier collider from a `WorldStaticDef`, posed in world space.
pub fn collider_from_def(def: &WorldStaticDef) -> Collider {
    let mut collider = match &def.shape {
        ColliderShapeDef::Cuboid { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z).build()
        }

        ColliderShapeDef::Sphere { radius } => ColliderBuilder::ball(*radius).build(),

        ColliderShapeDef::CapsuleY {
            radius,
            half_height,
        } => ColliderBuilder::capsule_y(*half_height, *radius).build(),

        ColliderShapeDef::CylinderY {
            radius,
            half_height,
        } => ColliderBuilder::cylinder(*half_height, *radius).build(),

        ColliderShapeDef::ConeY {
            radius,
            half_height,
        } => ColliderBuilder::cone(*half_height, *radius).build(),

        ColliderShapeDef::RoundCuboid {
            half_extents,
            border_radius,
        } => ColliderBuilder::round_cuboid(
            half_extents.x,
            half_extents.y,
            half_extents.z,
            *border_radius,
        )
        .build(),
    };

    let iso = Isometry::from_parts(Translation3::from(def.translation), def.rotation);
    collider.set_position(iso);
    collider
}

/// Immutable static geometry: world-space boxes of every collider plus a BVH over them.
pub struct StaticWorld {
    boxes: Vec<BoundingBox>,
    bvh: Bvh,
}

impl StaticWorld {
    /// Build from a list of static collider definitions.
    ///
    /// Definitions whose box is not finite are skipped with a warning.
    pub fn build(defs: impl IntoIterator<Item = WorldStaticDef>) -> Self {
        let mut defs: Vec<WorldStaticDef> = defs.into_iter().collect();
        defs.sort_by_key(|d| d.id);

        let mut boxes = Vec::with_capacity(defs.len());
        for def in &defs {
            let aabb = collider_from_def(def).compute_aabb();
            let bb = BoundingBox::new(aabb.mins.coords, aabb.maxs.coords);
            if !bb.is_well_formed() {
                log::warn!("skipping world static {}: non-finite bounds", def.id);
                continue;
            }
            boxes.push(bb);
        }

        Self::from_boxes(boxes)
    }

    /// Index an explicit list of boxes.
    pub fn from_boxes(boxes: Vec<BoundingBox>) -> Self {
        let leaves: Vec<Aabb> = boxes
            .iter()
            .map(|b| Aabb::new(b.min.into(), b.max.into()))
            .collect();

        Self {
            bvh: Bvh::from_leaves(BvhBuildStrategy::Binned, &leaves),
            boxes,
        }
    }

    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }
}

impl StaticGeometry for StaticWorld {
    fn collision_boxes(&self, region: &BoundingBox) -> Vec<BoundingBox> {
        let query = Aabb::new(region.min.into(), region.max.into());
        self.bvh
            .intersect_aabb(&query)
            .map(|leaf| self.boxes[leaf as usize])
            .filter(|b| b.intersects(region))
            .collect()
    }
}

/// Convenience: an axis-aligned static cuboid definition.
pub fn static_cuboid(id: u32, center: Vec3, half_extents: Vec3) -> WorldStaticDef {
    WorldStaticDef {
        id,
        translation: center,
        rotation: UnitQuaternion::identity(),
        shape: ColliderShapeDef::Cuboid { half_extents },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_4;

    const EPSILON: f32 = 1.0e-4;

    #[test]
    fn cuboid_box_matches_extents() {
        let world = StaticWorld::build([static_cuboid(
            1,
            Vec3::new(2.0, 0.5, 0.0),
            Vec3::new(1.0, 0.5, 3.0),
        )]);
        assert_eq!(world.len(), 1);
        let b = world.boxes()[0];
        assert_relative_eq!(b.min, Vec3::new(1.0, 0.0, -3.0), epsilon = EPSILON);
        assert_relative_eq!(b.max, Vec3::new(3.0, 1.0, 3.0), epsilon = EPSILON);
    }

    #[test]
    fn rotated_cuboid_uses_enclosing_box() {
        let world = StaticWorld::build([WorldStaticDef {
            id: 1,
            translation: Vec3::zeros(),
            rotation: UnitQuaternion::from_axis_angle(&Vec3::y_axis(), FRAC_PI_4),
            shape: ColliderShapeDef::Cuboid {
                half_extents: Vec3::new(1.0, 1.0, 1.0),
            },
        }]);
        let b = world.boxes()[0];
        let r = std::f32::consts::SQRT_2;
        assert_relative_eq!(b.max, Vec3::new(r, 1.0, r), epsilon = EPSILON);
        assert_relative_eq!(b.min, Vec3::new(-r, -1.0, -r), epsilon = EPSILON);
    }

    #[test]
    fn queries_return_only_overlapping_boxes() {
        let world = StaticWorld::build([
            static_cuboid(2, Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.5, 0.5, 0.5)),
            static_cuboid(1, Vec3::new(0.0, -0.5, 0.0), Vec3::new(5.0, 0.5, 5.0)),
            WorldStaticDef {
                id: 3,
                translation: Vec3::new(0.0, 3.0, 0.0),
                rotation: UnitQuaternion::identity(),
                shape: ColliderShapeDef::Sphere { radius: 0.5 },
            },
        ]);
        assert_eq!(world.len(), 3);

        let region = BoundingBox::new(Vec3::new(-1.0, -0.5, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let hits = world.collision_boxes(&region);
        assert_eq!(hits.len(), 1);
        assert_relative_eq!(hits[0].max.y, 0.0, epsilon = EPSILON);

        let far = BoundingBox::new(Vec3::new(50.0, 50.0, 50.0), Vec3::new(51.0, 51.0, 51.0));
        assert!(world.collision_boxes(&far).is_empty());
    }

    #[test]
    fn empty_world_has_no_boxes() {
        let world = StaticWorld::build(Vec::new());
        assert!(world.is_empty());
        let region = BoundingBox::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        assert!(world.collision_boxes(&region).is_empty());
    }

    #[test]
    fn resolver_runs_against_rapier_boxes() {
        use crate::{
            body::{Body, BodyFlag, Facing},
            collision::resolve_displacement,
            settings::DragSettings,
        };

        let world = StaticWorld::build([
            static_cuboid(1, Vec3::new(0.0, -0.5, 0.0), Vec3::new(10.0, 0.5, 10.0)),
            static_cuboid(2, Vec3::new(2.5, 0.5, 0.0), Vec3::new(1.5, 0.5, 1.0)),
        ]);
        let mut body = Body::new(1, Facing::Controlled, Vec3::zeros(), 0.3, 1.8)
            .with_step_height(1.0)
            .with_flag(BodyFlag::Grounded);

        let d = resolve_displacement(
            &mut body,
            &world,
            Vec3::new(2.0, 0.0, 0.0),
            &DragSettings::default(),
        )
        .unwrap();
        assert_relative_eq!(d, Vec3::new(2.0, 1.0, 0.0), epsilon = EPSILON);
    }
}
