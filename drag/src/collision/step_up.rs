use crate::{
    collision::{
        aabb::{Axis, BoundingBox},
        sweep::{Sweep, sweep_axis},
    },
    types::Vec3,
    world::StaticGeometry,
};

/// Alternative path over a low ledge: up -> forward -> down.
///
/// Two lifts are tried, each up to `step_height`: one clamped against geometry above
/// the box where it stands, one against geometry above the box shifted to its
/// horizontal destination. Each lifted box then moves forward by the horizontal part
/// of `requested` (X then Z). The candidate reaching further horizontally is kept,
/// the start column on ties, and descends by the lift it achieved.
///
/// The caller decides whether the result beats the plain sweep.
pub fn step_up<G>(geometry: &G, bb: &BoundingBox, requested: Vec3, step_height: f32) -> Sweep
where
    G: StaticGeometry + ?Sized,
{
    let step_height = step_height.max(0.0);

    let start_lift = sweep_axis(geometry, bb, Axis::Y, step_height);
    let destination = bb.offset(Vec3::new(requested.x, 0.0, requested.z));
    let destination_lift = sweep_axis(geometry, &destination, Axis::Y, step_height);

    let from_start = climb(geometry, bb, requested, start_lift);
    let from_destination = climb(geometry, bb, requested, destination_lift);
    let mut best = if from_destination.horizontal_sq() > from_start.horizontal_sq() {
        from_destination
    } else {
        from_start
    };

    let lift = best.displacement.y;
    let drop = sweep_axis(geometry, &best.bounding_box, Axis::Y, -lift);
    best.bounding_box = best.bounding_box.offset(Axis::Y.vector(drop));
    best.displacement.y += drop;
    best
}

/// Lift `bb` by `lift`, then sweep the horizontal part of `requested`.
fn climb<G>(geometry: &G, bb: &BoundingBox, requested: Vec3, lift: f32) -> Sweep
where
    G: StaticGeometry + ?Sized,
{
    let mut moved = bb.offset(Axis::Y.vector(lift));
    let mut displacement = Vec3::new(0.0, lift, 0.0);

    for axis in [Axis::X, Axis::Z] {
        let along = sweep_axis(geometry, &moved, axis, requested[axis as usize]);
        moved = moved.offset(axis.vector(along));
        displacement[axis as usize] = along;
    }

    Sweep {
        displacement,
        bounding_box: moved,
    }
}
