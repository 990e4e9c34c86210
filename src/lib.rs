pub mod camera;
pub mod character;
pub mod collision;
pub mod events;
pub mod input;
pub mod session;
pub mod world;

pub use camera::{CameraPose, CameraRig};
pub use character::{
    AnimationPose, CharacterController, CharacterState, Locomotion, MovementConfig, StepOutcome,
    derive_pose,
};
pub use collision::{Obstacle, Point3, Vec3, ground_snap, horizontal_blocked};
pub use events::{COLLECT_REWARD, EventSink, GameEvent, PICKUP_RADIUS_SQ};
pub use input::InputState;
pub use session::{FrameOutput, Session};
pub use world::{Collectible, ObstacleField, WorldGenConfig, generate};
