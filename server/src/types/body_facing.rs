use drag::Facing;

/// Which yaw of a body follows its platform's rotation.
///
/// - `Controlled`: player-driven bodies; a single yaw.
/// - `Autonomous`: bodies whose head turns independently; the head yaw is synchronized.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFacing {
    Controlled,
    Autonomous,
}

impl From<BodyFacing> for Facing {
    fn from(value: BodyFacing) -> Self {
        match value {
            BodyFacing::Controlled => Facing::Controlled,
            BodyFacing::Autonomous => Facing::Autonomous,
        }
    }
}

impl From<Facing> for BodyFacing {
    fn from(value: Facing) -> Self {
        match value {
            Facing::Controlled => BodyFacing::Controlled,
            Facing::Autonomous => BodyFacing::Autonomous,
        }
    }
}
