use crate::{
    collision::aabb::{Axis, BoundingBox},
    types::Vec3,
    world::StaticGeometry,
};

/// Result of sweeping a box through static geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sweep {
    /// Displacement actually achieved.
    pub displacement: Vec3,
    /// The moved box.
    pub bounding_box: BoundingBox,
}

impl Sweep {
    #[inline]
    pub fn horizontal_sq(&self) -> f32 {
        horizontal_sq(&self.displacement)
    }
}

/// Squared length of the X/Z part of `v`.
#[inline]
pub fn horizontal_sq(v: &Vec3) -> f32 {
    v.x * v.x + v.z * v.z
}

/// Clip a single-axis move of `bb` by `offset` against every static box in its path.
///
/// Malformed geometry boxes are skipped.
pub fn sweep_axis<G>(geometry: &G, bb: &BoundingBox, axis: Axis, offset: f32) -> f32
where
    G: StaticGeometry + ?Sized,
{
    if offset == 0.0 {
        return 0.0;
    }

    geometry
        .collision_boxes(&bb.swept(axis.vector(offset)))
        .iter()
        .filter(|obstacle| obstacle.is_well_formed())
        .fold(offset, |clipped, obstacle| obstacle.clip_offset(bb, axis, clipped))
}

/// Move `bb` by `d` one axis at a time (Y, then X, then Z), clipping each axis against
/// the geometry around the box as already moved along the earlier axes.
pub fn sweep<G>(geometry: &G, bb: &BoundingBox, d: Vec3) -> Sweep
where
    G: StaticGeometry + ?Sized,
{
    let mut moved = *bb;
    let mut displacement = Vec3::zeros();

    for axis in [Axis::Y, Axis::X, Axis::Z] {
        let along = sweep_axis(geometry, &moved, axis, d[axis as usize]);
        moved = moved.offset(axis.vector(along));
        displacement[axis as usize] = along;
    }

    Sweep {
        displacement,
        bounding_box: moved,
    }
}
