use crate::{
    body::{BodyFlag, DraggableBody},
    motion_state::MotionState,
    pose::PlatformPoseDelta,
    settings::DragSettings,
    types::Contact,
    world::DragWorld,
};

/// Outcome of one integration step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragPhase {
    /// The body is carried by its platform; the delta is this step's platform motion.
    Riding(PlatformPoseDelta),
    /// The body coasts on whatever velocity it still carries.
    Released,
}

/// Update a body's [`MotionState`] for this step.
///
/// Behavior
/// - Contact bookkeeping: touching a platform records it and resets the contact
///   counter; otherwise the counter advances.
/// - Riding (platform touched within the retention window and its poses readable):
///   the platform's pose delta applied to the body's position gives the new carried
///   velocity, unscaled. The body itself is not moved here.
/// - Released: grounded bodies come to rest; airborne ones decay their carried velocity
///   by the flight-mode factors in `settings`.
pub fn integrate_motion<B, W>(
    body: &mut B,
    contact: &Contact,
    world: &W,
    settings: &DragSettings,
) -> DragPhase
where
    B: DraggableBody + ?Sized,
    W: DragWorld + ?Sized,
{
    let id = body.id();
    let position = body.position();
    let flags = body.flags();
    let state = body.motion_state_mut();

    match contact.platform {
        Some(platform) => {
            if state.last_touched_platform != Some(platform) {
                log::debug!("body {id} touched platform {platform}");
            }
            state.touch(platform);
        }
        None => state.tick_without_contact(),
    }

    let delta = match state.last_touched_platform {
        Some(platform) if state.is_riding(settings.contact_retention_steps) => {
            let delta = world.pose_delta(platform);
            if delta.is_none() {
                log::debug!("body {id} lost platform {platform}: no poses");
                state.last_touched_platform = None;
            }
            delta
        }
        _ => None,
    };

    match delta {
        Some(delta) => {
            state.added_linear_velocity = delta.displacement_at(&position);
            DragPhase::Riding(delta)
        }
        None => {
            release(
                state,
                flags.has(BodyFlag::Grounded),
                flags.has(BodyFlag::FreeFlying),
                settings,
            );
            DragPhase::Released
        }
    }
}

/// Coast a released body: grounded bodies stop, airborne ones decay toward rest.
fn release(state: &mut MotionState, grounded: bool, free_flying: bool, settings: &DragSettings) {
    if grounded {
        state.come_to_rest();
        return;
    }

    let (linear_decay, yaw_decay) = settings.released_decay(free_flying);
    state.added_linear_velocity *= linear_decay;
    state.added_yaw_velocity *= yaw_decay;

    if state.added_linear_velocity.norm() < settings.rest_linear_eps
        && state.added_yaw_velocity.abs() < settings.rest_yaw_eps_deg
    {
        state.come_to_rest();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        body::{Body, Facing},
        collision::BoundingBox,
        pose::Pose,
        types::{Quat, Vec3},
        world::{PlatformPoses, PlatformScene},
    };
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1.0e-5;
    const PLATFORM: u64 = 11;

    fn scene_with_moving_platform(step: Vec3) -> PlatformScene<Vec<BoundingBox>> {
        let mut scene = PlatformScene::new(Vec::new());
        scene.insert_platform_poses(
            PLATFORM,
            PlatformPoses {
                previous: Pose::new(Vec3::zeros(), Quat::identity()),
                current: Pose::new(step, Quat::identity()),
            },
        );
        scene
    }

    fn body() -> Body {
        Body::new(1, Facing::Controlled, Vec3::new(2.0, 1.0, 0.0), 0.3, 1.8)
    }

    #[test]
    fn touching_carries_full_platform_displacement() {
        let scene = scene_with_moving_platform(Vec3::new(0.5, 0.0, -0.25));
        let mut b = body();
        let s = DragSettings::default();
        let phase = integrate_motion(&mut b, &Contact::touching(PLATFORM), &scene, &s);

        assert!(matches!(phase, DragPhase::Riding(_)));
        assert_relative_eq!(
            b.motion.added_linear_velocity,
            Vec3::new(0.5, 0.0, -0.25),
            epsilon = EPSILON
        );
        // The body is not moved by integration.
        assert_eq!(b.position, Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(b.motion.steps_since_contact, 0);
        assert_eq!(b.motion.last_touched_platform, Some(PLATFORM));
    }

    #[test]
    fn rotating_platform_velocity_depends_on_position() {
        let mut scene = PlatformScene::new(Vec::<BoundingBox>::new());
        scene.insert_platform_poses(
            PLATFORM,
            PlatformPoses {
                previous: Pose::identity(),
                current: Pose::new(
                    Vec3::zeros(),
                    Quat::from_axis_angle(&Vec3::y_axis(), std::f32::consts::FRAC_PI_2),
                ),
            },
        );
        let mut b = Body::new(1, Facing::Controlled, Vec3::new(1.0, 0.0, 0.0), 0.3, 1.8);
        integrate_motion(&mut b, &Contact::touching(PLATFORM), &scene, &DragSettings::default());
        assert_relative_eq!(
            b.motion.added_linear_velocity,
            Vec3::new(-1.0, 0.0, -1.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn contact_is_retained_for_a_few_steps() {
        let scene = scene_with_moving_platform(Vec3::new(0.1, 0.0, 0.0));
        let s = DragSettings::default();
        let mut b = body();
        integrate_motion(&mut b, &Contact::touching(PLATFORM), &scene, &s);

        for step in 1..s.contact_retention_steps {
            let phase = integrate_motion(&mut b, &Contact::default(), &scene, &s);
            assert!(matches!(phase, DragPhase::Riding(_)), "step {step}");
            assert_eq!(b.motion.steps_since_contact, step);
        }
        let phase = integrate_motion(&mut b, &Contact::default(), &scene, &s);
        assert_eq!(phase, DragPhase::Released);
    }

    #[test]
    fn released_grounded_body_stays_at_rest() {
        let scene = scene_with_moving_platform(Vec3::new(0.1, 0.0, 0.0));
        let s = DragSettings::default();
        let mut b = body().with_flag(BodyFlag::Grounded);
        b.motion.steps_since_contact = s.contact_retention_steps;

        for _ in 0..50 {
            integrate_motion(&mut b, &Contact::default(), &scene, &s);
            assert_eq!(b.motion.added_linear_velocity, Vec3::zeros());
            assert_eq!(b.motion.added_yaw_velocity, 0.0);
        }
    }

    #[test]
    fn released_grounded_body_stops_and_forgets_platform() {
        let scene = scene_with_moving_platform(Vec3::new(0.1, 0.0, 0.0));
        let s = DragSettings::default();
        let mut b = body().with_flag(BodyFlag::Grounded);
        b.motion = MotionState {
            last_touched_platform: Some(PLATFORM),
            steps_since_contact: s.contact_retention_steps + 3,
            added_linear_velocity: Vec3::new(1.0, 2.0, 3.0),
            added_yaw_velocity: 12.0,
        };

        let phase = integrate_motion(&mut b, &Contact::default(), &scene, &s);
        assert_eq!(phase, DragPhase::Released);
        assert!(b.motion.is_at_rest());
        assert_eq!(b.motion.last_touched_platform, None);
    }

    #[test]
    fn released_airborne_body_decays_monotonically() {
        let scene = scene_with_moving_platform(Vec3::new(0.1, 0.0, 0.0));
        let s = DragSettings::default();
        for free_flying in [false, true] {
            let mut b = body();
            if free_flying {
                b.flags.add(BodyFlag::FreeFlying);
            }
            b.motion = MotionState {
                last_touched_platform: Some(PLATFORM),
                steps_since_contact: s.contact_retention_steps,
                added_linear_velocity: Vec3::new(0.4, -0.2, 0.3),
                added_yaw_velocity: -6.0,
            };

            let (linear_decay, yaw_decay) = s.released_decay(free_flying);
            let before = b.motion;
            integrate_motion(&mut b, &Contact::default(), &scene, &s);
            assert_relative_eq!(
                b.motion.added_linear_velocity,
                before.added_linear_velocity * linear_decay,
                epsilon = EPSILON
            );
            assert_relative_eq!(
                b.motion.added_yaw_velocity,
                before.added_yaw_velocity * yaw_decay,
                epsilon = EPSILON
            );

            let mut last_linear = b.motion.added_linear_velocity.norm();
            let mut last_yaw = b.motion.added_yaw_velocity.abs();
            for _ in 0..2000 {
                integrate_motion(&mut b, &Contact::default(), &scene, &s);
                let linear = b.motion.added_linear_velocity.norm();
                let yaw = b.motion.added_yaw_velocity.abs();
                assert!(linear <= last_linear);
                assert!(yaw <= last_yaw);
                last_linear = linear;
                last_yaw = yaw;
            }
            // Eventually fully at rest with the platform reference dropped.
            assert!(b.motion.is_at_rest());
            assert_eq!(b.motion.last_touched_platform, None);
        }
    }

    #[test]
    fn contact_after_long_release_resets_counter_immediately() {
        let scene = scene_with_moving_platform(Vec3::new(0.0, 0.5, 0.0));
        let s = DragSettings::default();
        let mut b = body();
        b.motion = MotionState {
            last_touched_platform: None,
            steps_since_contact: s.contact_retention_steps * 10,
            added_linear_velocity: Vec3::new(0.01, 0.0, 0.0),
            added_yaw_velocity: 0.5,
        };

        let phase = integrate_motion(&mut b, &Contact::touching(PLATFORM), &scene, &s);
        assert!(matches!(phase, DragPhase::Riding(_)));
        assert_eq!(b.motion.steps_since_contact, 0);
        assert_relative_eq!(
            b.motion.added_linear_velocity,
            Vec3::new(0.0, 0.5, 0.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn vanished_platform_releases_body() {
        let mut scene = scene_with_moving_platform(Vec3::new(0.1, 0.0, 0.0));
        let s = DragSettings::default();
        let mut b = body();
        integrate_motion(&mut b, &Contact::touching(PLATFORM), &scene, &s);

        scene.remove_platform(PLATFORM);
        let phase = integrate_motion(&mut b, &Contact::default(), &scene, &s);
        assert_eq!(phase, DragPhase::Released);
        assert_eq!(b.motion.last_touched_platform, None);
        assert!(b.motion.added_linear_velocity.norm() < 0.1);
    }
}
