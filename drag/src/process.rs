use crate::{
    body::DraggableBody,
    collision::resolve_displacement,
    integrator::{DragPhase, integrate_motion},
    settings::DragSettings,
    types::Vec3,
    world::DragWorld,
    yaw::synchronize_yaw,
};

/// Run one simulation step of platform drag for `body`.
///
/// Behavior
/// - Reads the body's contact from `world` and updates its motion state.
/// - While riding and not mounted, derives the yaw change from the platform rotation.
///   Mounted bodies keep their previous yaw velocity, decayed.
/// - Resolves the carried linear velocity against static geometry and moves the body.
///   The clamped displacement becomes the carried velocity for the next step.
/// - Unless mounted, turns the body (yaw and head yaw) by the carried yaw velocity.
///
/// Nothing is returned and nothing escapes: an exploded displacement is logged and
/// dropped, leaving the body where it was.
pub fn process_step<B, W>(body: &mut B, world: &W, settings: &DragSettings)
where
    B: DraggableBody + ?Sized,
    W: DragWorld + ?Sized,
{
    let contact = world.contact(body.id());
    let phase = integrate_motion(body, &contact, world, settings);

    if let DragPhase::Riding(delta) = phase {
        let previous = body.motion_state().added_yaw_velocity;
        let yaw_velocity = if contact.mounted {
            previous * settings.yaw_fallback_decay
        } else {
            synchronize_yaw(
                &delta,
                &body.look_direction(),
                body.facing_yaw(),
                previous,
                settings,
            )
        };
        body.motion_state_mut().added_yaw_velocity = yaw_velocity;
    }

    let velocity = body.motion_state().added_linear_velocity;
    if velocity != Vec3::zeros() {
        let resolved = match resolve_displacement(body, world, velocity, settings) {
            Ok(resolved) => resolved,
            Err(err) => {
                log::warn!("body {}: {err}; dropping carried velocity", body.id());
                Vec3::zeros()
            }
        };
        body.motion_state_mut().added_linear_velocity = resolved;
    }

    if !contact.mounted {
        let yaw_velocity = body.motion_state().added_yaw_velocity;
        if yaw_velocity != 0.0 {
            let yaw = body.yaw() + yaw_velocity;
            let head_yaw = body.head_yaw() + yaw_velocity;
            body.set_yaw(yaw);
            body.set_head_yaw(head_yaw);
        }
    }
}
