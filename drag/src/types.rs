/*!
Math aliases and identifiers shared by every drag submodule.

This module intentionally contains no algorithms. It defines the data types
exchanged between:
- the motion integrator and yaw synchronizer (poses, vectors)
- the collision resolver (vectors)
- hosts implementing the world/body traits (identifiers, contact results)
*/

use nalgebra as na;

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;
pub type Iso = na::Isometry3<f32>;

/// Identifier of a platform, as assigned by the host's pose provider.
pub type PlatformId = u64;

/// Identifier of a body, used for contact queries and diagnostics.
pub type BodyId = u64;

/// Which of the two retained pose samples of a platform to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoseSample {
    /// Pose committed at the end of the previous simulation step.
    Previous,
    /// Pose committed at the end of the current simulation step.
    Current,
}

/// Result of the host's grounding/mount query for one body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    /// Platform the body is touching this step, if any.
    pub platform: Option<PlatformId>,
    /// Whether the body is a passenger of something else (yaw sync suppressed).
    pub mounted: bool,
}

impl Contact {
    #[inline]
    pub fn touching(platform: PlatformId) -> Self {
        Self {
            platform: Some(platform),
            mounted: false,
        }
    }
}
