use crate::{
    body::{BodyFlag, DraggableBody},
    collision::{step_up::step_up, sweep::sweep},
    error::DragError,
    settings::DragSettings,
    types::Vec3,
    world::StaticGeometry,
};

/// Resolve a platform-induced displacement for `body` against static geometry and apply it.
///
/// Behavior
/// - A body in a sticky medium has the request scaled down by
///   `settings.sticky_medium_scale`.
/// - The swept box of the request is checked against `settings.max_swept_average_edge`.
///   An exploded (or non-finite) request leaves the body untouched and returns
///   [`DragError::DisplacementExploded`].
/// - Otherwise the medium flag is consumed and the body's own motion halted.
/// - Plain sweep Y, X, Z. If horizontal motion was blocked and the body is grounded or
///   falling with a step height, a step-up path is tried. It is adopted when it reaches
///   strictly further horizontally without losing vertical progress.
/// - The body's box and position advance by the resolved displacement, which is returned.
///
/// The sneaking flag is cleared for the duration and restored on every exit path.
pub fn resolve_displacement<B, G>(
    body: &mut B,
    geometry: &G,
    requested: Vec3,
    settings: &DragSettings,
) -> Result<Vec3, DragError>
where
    B: DraggableBody + ?Sized,
    G: StaticGeometry + ?Sized,
{
    let sneaking = body.flags_mut().take(BodyFlag::Sneaking);
    let resolved = resolve_inner(body, geometry, requested, settings);
    body.flags_mut().set(BodyFlag::Sneaking, sneaking);
    resolved
}

fn resolve_inner<B, G>(
    body: &mut B,
    geometry: &G,
    mut requested: Vec3,
    settings: &DragSettings,
) -> Result<Vec3, DragError>
where
    B: DraggableBody + ?Sized,
    G: StaticGeometry + ?Sized,
{
    let sticky = body.flags().has(BodyFlag::InStickyMedium);
    if sticky {
        requested = requested.component_mul(&settings.sticky_medium_scale);
    }

    let start = body.bounding_box();
    let average_edge = start.swept(requested).average_edge_length();
    if !(average_edge <= settings.max_swept_average_edge) {
        return Err(DragError::DisplacementExploded {
            average_edge,
            limit: settings.max_swept_average_edge,
        });
    }

    if sticky {
        body.flags_mut().remove(BodyFlag::InStickyMedium);
        body.halt_own_motion();
    }

    let mut resolved = sweep(geometry, &start, requested);

    let blocked_horizontally =
        resolved.displacement.x != requested.x || resolved.displacement.z != requested.z;
    let grounded_or_falling = body.flags().has(BodyFlag::Grounded)
        || (requested.y != resolved.displacement.y && requested.y < 0.0);
    let step_height = body.step_height();

    if blocked_horizontally && grounded_or_falling && step_height > 0.0 {
        let stepped = step_up(geometry, &start, requested, step_height);
        if stepped.horizontal_sq() > resolved.horizontal_sq()
            && stepped.displacement.y.abs() >= resolved.displacement.y.abs()
        {
            log::trace!(
                "body {} stepped up {:.3} while dragged",
                body.id(),
                stepped.displacement.y
            );
            resolved = stepped;
        }
    }

    let position = body.position();
    body.set_bounding_box(resolved.bounding_box);
    body.set_position(position + resolved.displacement);
    Ok(resolved.displacement)
}
