pub mod bitmask_flags;
pub mod body;
pub mod collision;
pub mod constants;
pub mod error;
pub mod integrator;
pub mod motion_state;
pub mod pose;
pub mod process;
pub mod rapier_world;
pub mod settings;
pub mod types;
pub mod world;
pub mod yaw;

pub use bitmask_flags::{BitmaskFlags, FlagBitmask};
pub use body::{Body, BodyFlag, BodyFlags, DraggableBody, Facing, look_from_angles};
pub use collision::{BoundingBox, resolve_displacement};
pub use error::DragError;
pub use integrator::{DragPhase, integrate_motion};
pub use motion_state::MotionState;
pub use pose::{PlatformPoseDelta, Pose};
pub use process::process_step;
pub use rapier_world::{ColliderShapeDef, StaticWorld, WorldStaticDef, collider_from_def};
pub use settings::DragSettings;
pub use types::{BodyId, Contact, Iso, PlatformId, PoseSample, Quat, Vec3};
pub use world::{DragWorld, PlatformPoses, PlatformScene, StaticGeometry};
pub use yaw::{synchronize_yaw, wrap_degrees};
