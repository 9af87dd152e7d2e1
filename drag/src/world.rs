/*!
The world side of the drag pipeline: everything a body step reads but never writes.

Hosts implement [`DragWorld`] over their own platform and geometry storage. All
queries are synchronous reads of state already committed for the current step.
[`PlatformScene`] is a plain in-memory implementation used by the server module and
the tests.
*/

use std::collections::HashMap;

use crate::{
    collision::BoundingBox,
    pose::{PlatformPoseDelta, Pose},
    types::{BodyId, Contact, PlatformId, PoseSample},
};

/// Static collision geometry.
pub trait StaticGeometry {
    /// All static boxes that may overlap `region`.
    ///
    /// Returning extra boxes is harmless; malformed boxes are ignored by the resolver.
    fn collision_boxes(&self, region: &BoundingBox) -> Vec<BoundingBox>;
}

impl StaticGeometry for [BoundingBox] {
    fn collision_boxes(&self, region: &BoundingBox) -> Vec<BoundingBox> {
        self.iter()
            .filter(|b| b.intersects(region))
            .copied()
            .collect()
    }
}

impl StaticGeometry for Vec<BoundingBox> {
    fn collision_boxes(&self, region: &BoundingBox) -> Vec<BoundingBox> {
        self.as_slice().collision_boxes(region)
    }
}

impl<G: StaticGeometry + ?Sized> StaticGeometry for &G {
    fn collision_boxes(&self, region: &BoundingBox) -> Vec<BoundingBox> {
        (**self).collision_boxes(region)
    }
}

/// Everything a body step queries from its surroundings.
pub trait DragWorld: StaticGeometry {
    /// Grounding/mount state of `body` this step.
    fn contact(&self, body: BodyId) -> Contact;

    /// A retained pose sample of `platform`, or `None` if the platform is gone.
    fn pose(&self, platform: PlatformId, sample: PoseSample) -> Option<Pose>;

    /// Pose delta of `platform` over the current step, if both samples exist.
    fn pose_delta(&self, platform: PlatformId) -> Option<PlatformPoseDelta> {
        let previous = self.pose(platform, PoseSample::Previous)?;
        let current = self.pose(platform, PoseSample::Current)?;
        Some(PlatformPoseDelta::between(&previous, &current))
    }
}

/// Previous/current pose pair retained per platform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlatformPoses {
    pub previous: Pose,
    pub current: Pose,
}

/// In-memory platforms, contacts and static geometry.
#[derive(Clone, Debug, Default)]
pub struct PlatformScene<G> {
    pub geometry: G,
    platforms: HashMap<PlatformId, PlatformPoses>,
    contacts: HashMap<BodyId, Contact>,
}

impl<G: StaticGeometry> PlatformScene<G> {
    pub fn new(geometry: G) -> Self {
        Self {
            geometry,
            platforms: HashMap::new(),
            contacts: HashMap::new(),
        }
    }

    /// Register a platform resting at `pose` (previous == current).
    pub fn insert_platform(&mut self, id: PlatformId, pose: Pose) {
        self.platforms.insert(
            id,
            PlatformPoses {
                previous: pose,
                current: pose,
            },
        );
    }

    /// Register a platform with explicit previous/current samples.
    pub fn insert_platform_poses(&mut self, id: PlatformId, poses: PlatformPoses) {
        self.platforms.insert(id, poses);
    }

    /// Commit a new current pose; the old current becomes the previous sample.
    ///
    /// Returns `false` if the platform is unknown.
    pub fn advance_platform(&mut self, id: PlatformId, pose: Pose) -> bool {
        let Some(poses) = self.platforms.get_mut(&id) else {
            return false;
        };
        poses.previous = poses.current;
        poses.current = pose;
        true
    }

    pub fn remove_platform(&mut self, id: PlatformId) -> Option<PlatformPoses> {
        self.platforms.remove(&id)
    }

    pub fn set_contact(&mut self, body: BodyId, contact: Contact) {
        self.contacts.insert(body, contact);
    }

    pub fn clear_contact(&mut self, body: BodyId) {
        self.contacts.remove(&body);
    }
}

impl<G: StaticGeometry> StaticGeometry for PlatformScene<G> {
    fn collision_boxes(&self, region: &BoundingBox) -> Vec<BoundingBox> {
        self.geometry.collision_boxes(region)
    }
}

impl<G: StaticGeometry> DragWorld for PlatformScene<G> {
    fn contact(&self, body: BodyId) -> Contact {
        self.contacts.get(&body).copied().unwrap_or_default()
    }

    fn pose(&self, platform: PlatformId, sample: PoseSample) -> Option<Pose> {
        self.platforms.get(&platform).map(|p| match sample {
            PoseSample::Previous => p.previous,
            PoseSample::Current => p.current,
        })
    }
}
