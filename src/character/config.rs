//! Movement tuning.
//!
//! Every constant that shapes the character's feel lives here as a named
//! field, so alternate tunings are presets of one structure instead of
//! parallel controller implementations.

use crate::collision::types::Point3;

/// Tuning constants for the character controller.
///
/// Notes
/// - Distances are in world units, speeds in units/second, accelerations in
///   units/second².
/// - `air_control` scales player-applied acceleration while airborne so jumps
///   feel committed rather than freely steerable.
/// - Damping is proportional drag (`rate × speed`), stronger than linear drag
///   near the caps and crisp near a stop.
#[derive(Clone, Copy, Debug)]
pub struct MovementConfig {
    /// Player-applied horizontal acceleration.
    pub acceleration: f32,
    /// Proportional damping rate while grounded.
    pub ground_friction: f32,
    /// Proportional damping rate while airborne.
    pub air_resistance: f32,
    /// Acceleration multiplier while airborne (1.0 = full ground control).
    pub air_control: f32,
    /// Horizontal speed cap without sprint.
    pub walk_speed: f32,
    /// Horizontal speed cap while the sprint latch is held.
    pub sprint_speed: f32,
    /// Initial vertical speed of a grounded jump.
    pub jump_speed: f32,
    /// Double-jump vertical speed as a fraction of `jump_speed`.
    pub double_jump_scale: f32,
    /// Horizontal impulse added along the intent by the double jump.
    pub double_jump_boost: f32,
    /// The double jump is available only while vertical speed is below this,
    /// i.e. past the first jump's rise.
    pub double_jump_gate: f32,
    /// Downward gravity.
    pub gravity: f32,
    /// Horizontal velocity multiplier applied when a wall blocks the move.
    pub wall_penalty: f32,
    /// Upper bound on the integration step; stalls are clamped, not simulated.
    pub max_dt: f32,
    /// Angular gain for facing interpolation (per second).
    pub yaw_gain: f32,
    /// Below this horizontal speed the facing holds still to avoid jitter.
    pub yaw_min_speed: f32,
    /// Interpolation gain for the visual lean (per second).
    pub lean_gain: f32,
    /// Lean angle per unit of lateral intent.
    pub lean_scale: f32,
    /// Falling below this height triggers the respawn fallback.
    pub floor_y: f32,
    /// Where the fallback teleports the body.
    pub respawn_point: Point3,
}

impl MovementConfig {
    /// The shipped tuning: heavy acceleration with high ground friction and a
    /// strict double-jump gate.
    pub fn hero() -> Self {
        Self {
            acceleration: 80.0,
            ground_friction: 10.0,
            air_resistance: 1.0,
            air_control: 0.3,
            walk_speed: 25.0,
            sprint_speed: 50.0,
            jump_speed: 35.0,
            double_jump_scale: 0.8,
            double_jump_boost: 30.0,
            double_jump_gate: 5.0,
            gravity: 70.0,
            wall_penalty: 0.5,
            max_dt: 0.1,
            yaw_gain: 10.0,
            yaw_min_speed: 1.0,
            lean_gain: 5.0,
            lean_scale: 0.2,
            floor_y: -50.0,
            respawn_point: Point3::new(0.0, 10.0, 0.0),
        }
    }

    /// A lighter, floatier profile: gentler gravity and friction and a loose
    /// double-jump gate that allows chaining closer to the apex.
    pub fn featherweight() -> Self {
        Self {
            acceleration: 60.0,
            ground_friction: 8.0,
            air_resistance: 1.5,
            walk_speed: 20.0,
            sprint_speed: 40.0,
            jump_speed: 30.0,
            double_jump_boost: 22.0,
            double_jump_gate: 10.0,
            gravity: 55.0,
            ..Self::hero()
        }
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self::hero()
    }
}
