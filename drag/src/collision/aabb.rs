use crate::types::Vec3;

/// Axis index used by the per-axis sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// The two axes perpendicular to `self`.
    #[inline]
    fn others(self) -> (usize, usize) {
        match self {
            Axis::X => (1, 2),
            Axis::Y => (0, 2),
            Axis::Z => (0, 1),
        }
    }

    /// Vector with `amount` on this axis and zero elsewhere.
    #[inline]
    pub fn vector(self, amount: f32) -> Vec3 {
        let mut v = Vec3::zeros();
        v[self as usize] = amount;
        v
    }
}

/// An immutable axis-aligned bounding box in world space.
///
/// All operations are pure and return a new box. A box is *well formed* when every
/// coordinate is finite and `min <= max` on each axis; [`BoundingBox::new`] always
/// produces one from finite corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// Build a box from two opposite corners in any order.
    #[inline]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Box of a body whose feet sit at `feet`, `half_width` wide on X/Z and `height` tall.
    #[inline]
    pub fn from_feet(feet: Vec3, half_width: f32, height: f32) -> Self {
        Self::new(
            Vec3::new(feet.x - half_width, feet.y, feet.z - half_width),
            Vec3::new(feet.x + half_width, feet.y + height, feet.z + half_width),
        )
    }

    /// Center of the bottom face.
    #[inline]
    pub fn feet(&self) -> Vec3 {
        Vec3::new(
            (self.min.x + self.max.x) * 0.5,
            self.min.y,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.min.iter().chain(self.max.iter()).all(|c| c.is_finite())
            && self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.z <= self.max.z
    }

    /// Translate by `d`.
    #[inline]
    pub fn offset(&self, d: Vec3) -> Self {
        Self {
            min: self.min + d,
            max: self.max + d,
        }
    }

    /// Smallest box containing both boxes.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Region covered while moving by `d`: the union of `self` and `self.offset(d)`.
    #[inline]
    pub fn swept(&self, d: Vec3) -> Self {
        self.union(&self.offset(d))
    }

    /// Strict overlap test (touching faces do not intersect).
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    #[inline]
    pub fn average_edge_length(&self) -> f32 {
        let e = self.max - self.min;
        (e.x + e.y + e.z) / 3.0
    }

    /// Clamp a movement of `moving` along `axis` by `offset` so it stops at `self`.
    ///
    /// `self` is the static obstacle. The clamp only applies when the boxes overlap on
    /// both perpendicular axes and `moving` starts on the near side of `self`. The result
    /// is never larger in magnitude than `offset` and never of opposite sign.
    pub fn clip_offset(&self, moving: &Self, axis: Axis, offset: f32) -> f32 {
        let (a, b) = axis.others();
        let overlaps = moving.max[a] > self.min[a]
            && moving.min[a] < self.max[a]
            && moving.max[b] > self.min[b]
            && moving.min[b] < self.max[b];
        if !overlaps {
            return offset;
        }

        let i = axis as usize;
        if offset > 0.0 && moving.max[i] <= self.min[i] {
            let gap = self.min[i] - moving.max[i];
            if gap < offset {
                return gap;
            }
        } else if offset < 0.0 && moving.min[i] >= self.max[i] {
            let gap = self.max[i] - moving.min[i];
            if gap > offset {
                return gap;
            }
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_at(x: f32, y: f32, z: f32) -> BoundingBox {
        BoundingBox::new(Vec3::new(x, y, z), Vec3::new(x + 1.0, y + 1.0, z + 1.0))
    }

    #[test]
    fn new_orders_corners() {
        let b = BoundingBox::new(Vec3::new(1.0, -1.0, 3.0), Vec3::new(0.0, 2.0, -3.0));
        assert_eq!(b.min, Vec3::new(0.0, -1.0, -3.0));
        assert_eq!(b.max, Vec3::new(1.0, 2.0, 3.0));
        assert!(b.is_well_formed());
    }

    #[test]
    fn from_feet_round_trips_feet() {
        let feet = Vec3::new(2.0, 5.0, -1.0);
        let b = BoundingBox::from_feet(feet, 0.3, 1.8);
        assert!((b.feet() - feet).norm() < 1.0e-6);
        assert!((b.max.y - b.min.y - 1.8).abs() < 1.0e-6);
    }

    #[test]
    fn malformed_boxes_are_detected() {
        let inverted = BoundingBox {
            min: Vec3::new(1.0, 0.0, 0.0),
            max: Vec3::new(0.0, 1.0, 1.0),
        };
        assert!(!inverted.is_well_formed());

        let nan = BoundingBox {
            min: Vec3::new(f32::NAN, 0.0, 0.0),
            max: Vec3::new(1.0, 1.0, 1.0),
        };
        assert!(!nan.is_well_formed());
    }

    #[test]
    fn swept_covers_start_and_end() {
        let b = unit_at(0.0, 0.0, 0.0);
        let s = b.swept(Vec3::new(-2.0, 0.0, 3.0));
        assert_eq!(s.min, Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(s.max, Vec3::new(1.0, 1.0, 4.0));
    }

    #[test]
    fn touching_faces_do_not_intersect() {
        let a = unit_at(0.0, 0.0, 0.0);
        let b = unit_at(1.0, 0.0, 0.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&unit_at(0.5, 0.5, 0.5)));
    }

    #[test]
    fn clip_stops_at_near_face() {
        let wall = unit_at(3.0, 0.0, 0.0);
        let body = unit_at(0.0, 0.0, 0.0);

        assert_eq!(wall.clip_offset(&body, Axis::X, 5.0), 2.0);
        // Short of the wall: untouched.
        assert_eq!(wall.clip_offset(&body, Axis::X, 1.5), 1.5);
        // Moving away: untouched.
        assert_eq!(wall.clip_offset(&body, Axis::X, -4.0), -4.0);
    }

    #[test]
    fn clip_negative_direction() {
        let floor = BoundingBox::new(Vec3::new(-5.0, -1.0, -5.0), Vec3::new(5.0, 0.0, 5.0));
        let body = unit_at(0.0, 0.5, 0.0);
        assert_eq!(floor.clip_offset(&body, Axis::Y, -2.0), -0.5);
    }

    #[test]
    fn clip_ignores_boxes_without_perpendicular_overlap() {
        let wall = unit_at(3.0, 5.0, 0.0);
        let body = unit_at(0.0, 0.0, 0.0);
        assert_eq!(wall.clip_offset(&body, Axis::X, 5.0), 5.0);
    }

    #[test]
    fn clip_never_reverses_sign() {
        // Overlapping boxes (already interpenetrating) must not push back.
        let wall = unit_at(0.5, 0.0, 0.0);
        let body = unit_at(0.0, 0.0, 0.0);
        for offset in [-3.0_f32, -0.25, 0.0, 0.25, 3.0] {
            let clipped = wall.clip_offset(&body, Axis::X, offset);
            assert!(clipped * offset >= 0.0);
            assert!(clipped.abs() <= offset.abs());
        }
    }

    #[test]
    fn average_edge_length_of_swept_box_grows_with_displacement() {
        let b = unit_at(0.0, 0.0, 0.0);
        assert!((b.average_edge_length() - 1.0).abs() < 1.0e-6);
        let s = b.swept(Vec3::new(3.0, 0.0, 0.0));
        assert!((s.average_edge_length() - 2.0).abs() < 1.0e-6);
    }
}
