/*!
The body side of the drag pipeline.

[`DraggableBody`] is the capability a host implements for anything platforms can
carry. The pipeline only talks to bodies through it, so hosts keep their own storage
(ECS components, database rows, ...). [`Body`] is a ready-made plain implementation
used by the server module and the tests.
*/

use crate::{
    bitmask_flags::BitmaskFlags,
    collision::BoundingBox,
    define_bitmask_flags,
    motion_state::MotionState,
    types::{BodyId, Vec3},
};

define_bitmask_flags!(BodyFlag, u8, {
    /// Standing on something this step.
    Grounded,
    /// Crouching; suspended while platform motion is resolved.
    Sneaking,
    /// Inside a medium that slows movement (cobweb-like). Cleared when consumed.
    InStickyMedium,
    /// Unconstrained free-movement mode.
    FreeFlying,
});

pub type BodyFlags = BitmaskFlags<u8>;

/// Which yaw a body's look direction is built from.
///
/// Controlled (player-driven) bodies look where their single yaw points. Autonomous
/// bodies turn their head independently of their body, so their look direction and
/// the yaw kept in sync with the platform come from the head yaw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Facing {
    #[default]
    Controlled,
    Autonomous,
}

/// Unit look vector for a yaw/pitch pair (degrees).
///
/// Convention: yaw 0 faces +Z, yaw 90 faces -X; positive pitch looks down.
#[inline]
pub fn look_from_angles(yaw_deg: f32, pitch_deg: f32) -> Vec3 {
    let yaw = (-yaw_deg).to_radians() - std::f32::consts::PI;
    let pitch = (-pitch_deg).to_radians();
    let horizontal = -pitch.cos();
    Vec3::new(yaw.sin() * horizontal, pitch.sin(), yaw.cos() * horizontal)
}

/// Anything a moving platform can drag along.
pub trait DraggableBody {
    fn id(&self) -> BodyId;

    fn facing(&self) -> Facing;

    /// Feet position (world space).
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);

    fn bounding_box(&self) -> BoundingBox;
    fn set_bounding_box(&mut self, bb: BoundingBox);

    /// Body yaw (degrees).
    fn yaw(&self) -> f32;
    fn set_yaw(&mut self, yaw_deg: f32);

    /// Head yaw (degrees). Bodies without a separate head track their body yaw.
    fn head_yaw(&self) -> f32 {
        self.yaw()
    }
    fn set_head_yaw(&mut self, _yaw_deg: f32) {}

    /// Pitch (degrees), positive looking down.
    fn pitch(&self) -> f32;

    /// The yaw that platform rotation is synchronized against.
    fn facing_yaw(&self) -> f32 {
        match self.facing() {
            Facing::Controlled => self.yaw(),
            Facing::Autonomous => self.head_yaw(),
        }
    }

    fn look_direction(&self) -> Vec3 {
        look_from_angles(self.facing_yaw(), self.pitch())
    }

    fn flags(&self) -> BodyFlags;
    fn flags_mut(&mut self) -> &mut BodyFlags;

    /// Maximum ledge height the body may climb while moved (world units). Zero disables.
    fn step_height(&self) -> f32;

    /// Cancel the body's own (non-platform) motion, e.g. when caught in a sticky medium.
    fn halt_own_motion(&mut self) {}

    fn motion_state(&self) -> &MotionState;
    fn motion_state_mut(&mut self) -> &mut MotionState;
}

/// A self-contained body record: an axis-aligned box standing on its feet position.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub facing: Facing,
    pub position: Vec3,
    pub half_width: f32,
    pub height: f32,
    pub yaw: f32,
    pub head_yaw: f32,
    pub pitch: f32,
    pub flags: BodyFlags,
    pub step_height: f32,
    /// Body's own velocity (world units per step). Only halted by the pipeline.
    pub own_velocity: Vec3,
    pub motion: MotionState,
}

impl Body {
    pub fn new(id: BodyId, facing: Facing, position: Vec3, half_width: f32, height: f32) -> Self {
        Self {
            id,
            facing,
            position,
            half_width,
            height,
            yaw: 0.0,
            head_yaw: 0.0,
            pitch: 0.0,
            flags: BodyFlags::default(),
            step_height: 0.0,
            own_velocity: Vec3::zeros(),
            motion: MotionState::default(),
        }
    }

    pub fn with_step_height(mut self, step_height: f32) -> Self {
        self.step_height = step_height;
        self
    }

    pub fn with_flag(mut self, flag: BodyFlag) -> Self {
        self.flags.add(flag);
        self
    }
}

impl DraggableBody for Body {
    fn id(&self) -> BodyId {
        self.id
    }

    fn facing(&self) -> Facing {
        self.facing
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_feet(self.position, self.half_width, self.height)
    }

    fn set_bounding_box(&mut self, bb: BoundingBox) {
        self.position = bb.feet();
    }

    fn yaw(&self) -> f32 {
        self.yaw
    }

    fn set_yaw(&mut self, yaw_deg: f32) {
        self.yaw = yaw_deg;
    }

    fn head_yaw(&self) -> f32 {
        self.head_yaw
    }

    fn set_head_yaw(&mut self, yaw_deg: f32) {
        self.head_yaw = yaw_deg;
    }

    fn pitch(&self) -> f32 {
        self.pitch
    }

    fn flags(&self) -> BodyFlags {
        self.flags
    }

    fn flags_mut(&mut self) -> &mut BodyFlags {
        &mut self.flags
    }

    fn step_height(&self) -> f32 {
        self.step_height
    }

    fn halt_own_motion(&mut self) {
        self.own_velocity = Vec3::zeros();
    }

    fn motion_state(&self) -> &MotionState {
        &self.motion
    }

    fn motion_state_mut(&mut self) -> &mut MotionState {
        &mut self.motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1.0e-5;

    #[test]
    fn look_follows_yaw_convention() {
        for (yaw, expected) in [
            (0.0, Vec3::new(0.0, 0.0, 1.0)),
            (90.0, Vec3::new(-1.0, 0.0, 0.0)),
            (180.0, Vec3::new(0.0, 0.0, -1.0)),
        ] {
            assert_relative_eq!(look_from_angles(yaw, 0.0), expected, epsilon = EPSILON);
        }
    }

    #[test]
    fn positive_pitch_looks_down() {
        let look = look_from_angles(0.0, 90.0);
        assert_relative_eq!(look, Vec3::new(0.0, -1.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(look_from_angles(33.0, -20.0).norm(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn facing_selects_yaw_source() {
        let mut body = Body::new(1, Facing::Controlled, Vec3::zeros(), 0.3, 1.8);
        body.yaw = 10.0;
        body.head_yaw = 40.0;
        assert_eq!(body.facing_yaw(), 10.0);

        body.facing = Facing::Autonomous;
        assert_eq!(body.facing_yaw(), 40.0);
        assert_relative_eq!(body.look_direction(), look_from_angles(40.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn bounding_box_tracks_feet_position() {
        let mut body = Body::new(2, Facing::Controlled, Vec3::new(1.0, 2.0, 3.0), 0.5, 2.0);
        let bb = body.bounding_box();
        assert_eq!(bb.min, Vec3::new(0.5, 2.0, 2.5));
        assert_eq!(bb.max, Vec3::new(1.5, 4.0, 3.5));

        body.set_bounding_box(bb.offset(Vec3::new(1.0, -1.0, 0.0)));
        assert_relative_eq!(body.position, Vec3::new(2.0, 1.0, 3.0), epsilon = EPSILON);
    }

    #[test]
    fn builder_sets_flags_and_step_height() {
        let body = Body::new(3, Facing::Autonomous, Vec3::zeros(), 0.3, 1.8)
            .with_step_height(0.5)
            .with_flag(BodyFlag::Grounded);
        assert_eq!(body.step_height(), 0.5);
        assert!(body.flags().has(BodyFlag::Grounded));
        assert!(!body.flags().has(BodyFlag::Sneaking));
    }
}
