//! Follow-camera output.
//!
//! The core never mutates the host camera. Each tick it proposes a smoothed
//! position behind-and-above the character and a look-at target; applying
//! them is the host's job.

use nalgebra::UnitQuaternion;

use crate::character::controller::CharacterState;
use crate::collision::types::{Point3, Vec3};

/// Height of the follow offset above the character.
const OFFSET_HEIGHT: f32 = 5.0;

/// Trailing distance of the follow offset.
const OFFSET_DISTANCE: f32 = 12.0;

/// Interpolation rate toward the desired position (per second); the lag gives
/// the camera its weight.
const FOLLOW_RATE: f32 = 5.0;

/// Vertical offset of the look-at target above the feet.
const LOOK_HEIGHT: f32 = 2.0;

/// The camera placement proposed for this frame.
#[derive(Clone, Copy, Debug)]
pub struct CameraPose {
    pub position: Point3,
    pub look_at: Point3,
}

/// Smoothed third-person follow rig.
pub struct CameraRig {
    position: Point3,
}

impl CameraRig {
    pub fn new(start: Point3) -> Self {
        Self { position: start }
    }

    /// Move toward the offset behind the character's facing and return the
    /// resulting pose.
    pub fn update(&mut self, dt: f32, character: &CharacterState) -> CameraPose {
        let behind = UnitQuaternion::from_axis_angle(
            &Vec3::y_axis(),
            character.yaw + std::f32::consts::PI,
        ) * Vec3::new(0.0, OFFSET_HEIGHT, -OFFSET_DISTANCE);
        let target = character.position + behind;

        let t = (FOLLOW_RATE * dt.max(0.0)).min(1.0);
        self.position += (target - self.position) * t;

        CameraPose {
            position: self.position,
            look_at: character.position + Vec3::new(0.0, LOOK_HEIGHT, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{CharacterController, MovementConfig};

    #[test]
    fn rig_converges_on_the_rotated_offset() {
        let controller =
            CharacterController::new(Point3::new(0.0, 0.0, 0.0), MovementConfig::hero());
        let mut rig = CameraRig::new(Point3::new(0.0, 5.0, 10.0));

        for _ in 0..600 {
            rig.update(0.016, controller.state());
        }
        let pose = rig.update(0.016, controller.state());

        // Yaw 0 puts the offset mirrored behind the facing.
        assert!((pose.position.x - 0.0).abs() < 1.0e-2);
        assert!((pose.position.y - 5.0).abs() < 1.0e-2);
        assert!((pose.position.z - 12.0).abs() < 1.0e-2);
    }

    #[test]
    fn look_at_tracks_the_character_immediately() {
        let mut controller =
            CharacterController::new(Point3::new(3.0, 7.0, -4.0), MovementConfig::hero());
        let mut rig = CameraRig::new(Point3::new(0.0, 5.0, 10.0));

        let pose = rig.update(0.016, controller.state());
        assert_eq!(pose.look_at, Point3::new(3.0, 9.0, -4.0));

        // The look target follows the body without smoothing.
        controller = CharacterController::new(Point3::new(0.0, 0.0, 0.0), MovementConfig::hero());
        let pose = rig.update(0.016, controller.state());
        assert_eq!(pose.look_at, Point3::new(0.0, 2.0, 0.0));
    }
}
