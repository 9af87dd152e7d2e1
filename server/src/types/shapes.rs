/// Capsule dimensions for collider definitions.
///
/// Semantics:
/// - `radius`: radius of spherical caps and cylinder.
/// - `half_height`: half of the cylinder length along local +Y.
/// - Total capsule height = `2*half_height + 2*radius`.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq)]
pub struct DbCapsule {
    pub radius: f32,
    pub half_height: f32,
}

/// Cylinder or cone dimensions (Y-aligned).
///
/// Semantics:
/// - `radius`: radius of the base.
/// - `half_height`: half of the height along local +Y.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq)]
pub struct DbRound {
    pub radius: f32,
    pub half_height: f32,
}

/// Rounded-box parameters.
///
/// Semantics:
/// - `half_extents`: half extents of the cuboid (hx, hy, hz).
/// - `border_radius`: rounding radius applied to edges/corners.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq)]
pub struct DbRoundCuboid {
    pub half_extents: super::DbVec3,
    pub border_radius: f32,
}

/// Collider shape used by world statics.
///
/// Notes:
/// - Variants are newtype-like to keep storage compact and easy to serialize.
/// - Shapes are combined with per-row `translation` and `rotation`.
/// - The drag resolver collides against each shape's world-space bounding box.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    /// Oriented box defined by local half-extents (hx, hy, hz).
    Cuboid(super::DbVec3),
    /// Sphere/ball with the given radius.
    Sphere(f32),
    /// Y-aligned capsule with `radius` and `half_height`.
    Capsule(DbCapsule),
    /// Y-aligned cylinder.
    Cylinder(DbRound),
    /// Y-aligned cone.
    Cone(DbRound),
    /// Rounded cuboid (box with rounded edges/corners).
    RoundCuboid(DbRoundCuboid),
}
