//! Animation pose parameters derived from the kinematic state.
//!
//! A pure function of the state with no feedback into physics; the host's
//! presentation layer drives limb cycles, bobbing and banking from these
//! values.

use crate::character::config::MovementConfig;
use crate::character::controller::CharacterState;

/// Below this horizontal speed a grounded character is considered idle.
const RUN_SPEED_MIN: f32 = 0.5;

/// Upper bound on the run factor, letting boosted movement overdrive the run
/// cycle slightly.
const RUN_FACTOR_MAX: f32 = 1.5;

/// Gross locomotion class for animation selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locomotion {
    Idle,
    Run,
    Airborne,
}

/// Per-frame animation parameters.
#[derive(Clone, Copy, Debug)]
pub struct AnimationPose {
    pub locomotion: Locomotion,
    /// Run-cycle intensity in `[0, RUN_FACTOR_MAX]`, scaled by the sprint cap.
    pub run_factor: f32,
    /// Banking roll in radians, mirrored from the state.
    pub lean: f32,
}

pub fn derive_pose(state: &CharacterState, config: &MovementConfig) -> AnimationPose {
    let speed = state.planar_speed();
    let locomotion = if !state.grounded {
        Locomotion::Airborne
    } else if speed > RUN_SPEED_MIN {
        Locomotion::Run
    } else {
        Locomotion::Idle
    };

    AnimationPose {
        locomotion,
        run_factor: (speed / config.sprint_speed).min(RUN_FACTOR_MAX),
        lean: state.lean,
    }
}
