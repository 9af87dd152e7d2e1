use nalgebra as na;

use crate::types::{Iso, Quat, Vec3};

/// A rigid pose sample of a platform (world space).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    #[inline]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(Vec3::zeros(), Quat::identity())
    }

    /// Convert to an nalgebra isometry (local → world).
    #[inline]
    pub fn iso(&self) -> Iso {
        Iso::from_parts(
            na::Translation3::new(self.position.x, self.position.y, self.position.z),
            self.rotation,
        )
    }
}

/// Transform carrying a world point riding the platform from its previous-step
/// location to its current-step location.
///
/// Derived as `current ∘ inverse(previous)`: a point is first expressed in the
/// platform's previous local frame, then placed back into the world with the current
/// pose. Stateless; rebuild it every step it is needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlatformPoseDelta {
    iso: Iso,
}

impl PlatformPoseDelta {
    #[inline]
    pub fn between(previous: &Pose, current: &Pose) -> Self {
        // Exact identity for a platform at rest.
        if previous == current {
            return Self::identity();
        }
        Self {
            iso: current.iso() * previous.iso().inverse(),
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            iso: Iso::identity(),
        }
    }

    /// Map an absolute position (translation and rotation applied).
    #[inline]
    pub fn transform_point(&self, p: &Vec3) -> Vec3 {
        self.iso.transform_point(&na::Point3::from(*p)).coords
    }

    /// Map a direction (rotation only, no translation).
    #[inline]
    pub fn transform_direction(&self, d: &Vec3) -> Vec3 {
        self.iso.transform_vector(d)
    }

    /// Displacement a point at `p` would undergo this step.
    #[inline]
    pub fn displacement_at(&self, p: &Vec3) -> Vec3 {
        self.transform_point(p) - p
    }
}
