use drag::{PlatformPoses, Pose};
use spacetimedb::*;

use crate::types::{DbQuat, DbVec3};

/// A moving platform and the two pose samples the drag tick reads.
///
/// `current_*` is written by `move_platform` whenever the platform moves. `previous_*`
/// is the pose the last drag tick ended with; the tick rolls current into previous
/// once every body has been processed.
#[table(name = platform, public)]
pub struct Platform {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    pub previous_translation: DbVec3,
    pub previous_rotation: DbQuat,

    pub current_translation: DbVec3,
    pub current_rotation: DbQuat,
}

impl Platform {
    pub fn poses(&self) -> PlatformPoses {
        PlatformPoses {
            previous: Pose::new(
                self.previous_translation.into(),
                self.previous_rotation.into(),
            ),
            current: Pose::new(self.current_translation.into(), self.current_rotation.into()),
        }
    }

    /// Whether the platform moved since the last tick.
    pub fn is_moving(&self) -> bool {
        self.previous_translation != self.current_translation
            || self.previous_rotation != self.current_rotation
    }
}
