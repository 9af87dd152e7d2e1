mod body_facing;
mod db_quat;
mod db_vec3;
mod shapes;

pub use body_facing::BodyFacing;
pub use db_quat::DbQuat;
pub use db_vec3::DbVec3;
pub use shapes::{ColliderShape, DbCapsule, DbRound, DbRoundCuboid};
