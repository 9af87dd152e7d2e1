use drag::{Body, BodyFlags, Contact, MotionState};
use spacetimedb::*;

use crate::types::{BodyFacing, DbVec3};

/// A body platforms can carry.
///
/// The contact fields hold the game's grounding query result for the coming tick and
/// are written by `set_body_contact`; the drag tick only reads them.
#[table(name = body, public)]
pub struct BodyRow {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    pub facing: BodyFacing,

    /// Feet position.
    pub position: DbVec3,
    pub half_width: f32,
    pub height: f32,

    /// Degrees.
    pub yaw: f32,
    pub head_yaw: f32,
    pub pitch: f32,

    /// Raw `drag::BodyFlag` bits.
    pub flags: u8,

    pub step_height: f32,

    /// The body's own velocity; only ever halted by the drag tick.
    pub own_velocity: DbVec3,

    /// Platform the body is touching, if any.
    pub touching_platform: Option<u64>,
    /// Whether the body is riding something as a passenger.
    pub mounted: bool,
}

impl BodyRow {
    pub fn contact(&self) -> Contact {
        Contact {
            platform: self.touching_platform,
            mounted: self.mounted,
        }
    }

    /// Assemble the in-memory body with its persisted motion state.
    pub fn to_body(&self, motion: MotionState) -> Body {
        let mut body = Body::new(
            self.id,
            self.facing.into(),
            self.position.into(),
            self.half_width,
            self.height,
        )
        .with_step_height(self.step_height);
        body.yaw = self.yaw;
        body.head_yaw = self.head_yaw;
        body.pitch = self.pitch;
        body.flags = BodyFlags::new(self.flags);
        body.own_velocity = self.own_velocity.into();
        body.motion = motion;
        body
    }

    /// Copy back everything the drag tick may have changed.
    pub fn apply(&mut self, body: &Body) {
        self.position = body.position.into();
        self.yaw = body.yaw;
        self.head_yaw = body.head_yaw;
        self.flags = body.flags.bits;
        self.own_velocity = body.own_velocity.into();
    }
}
