//! The player-controlled character: tuning, per-frame kinematics, and derived
//! animation parameters.

pub mod config;
pub mod controller;
pub mod pose;

pub use config::MovementConfig;
pub use controller::{CharacterController, CharacterState, StepOutcome};
pub use pose::{AnimationPose, Locomotion, derive_pose};
