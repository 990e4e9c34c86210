//! The kinematic character controller.
//!
//! Owns the player's kinematic state and the per-frame update: camera-relative
//! intent, acceleration/damping/speed cap, gravity, the jump state machine,
//! predictive horizontal movement with wall resolution, vertical movement with
//! ground snapping, and the derived facing/lean.

use nalgebra::Vector2;

use crate::character::config::MovementConfig;
use crate::collision::{
    ground_snap, horizontal_blocked,
    settings::{BROAD_RADIUS, DIR_EPS_SQ},
    types::{Point3, Vec3},
};
use crate::input::InputState;
use crate::world::field::ObstacleField;

/// The player's kinematic state.
///
/// Mutated exclusively by [`CharacterController::update`]; read-only for the
/// host (rendering, camera, audio cues).
#[derive(Clone, Copy, Debug)]
pub struct CharacterState {
    /// Feet position in world space.
    pub position: Point3,
    /// World-space velocity; `velocity.y` is the authoritative vertical speed.
    pub velocity: Vec3,
    /// Facing about +Y in radians. Continuous (unwrapped); never snaps after
    /// spawn.
    pub yaw: f32,
    /// Visual banking roll derived from lateral intent.
    pub lean: f32,
    /// Whether the last ground snap succeeded.
    pub grounded: bool,
    /// Airborne jump actions consumed since the last landing (0, 1 or 2).
    pub jump_phase: u8,
    /// Last computed world-space intent (normalized XZ, or zero).
    pub intent: Vec3,
}

impl CharacterState {
    fn at_spawn(position: Point3) -> Self {
        Self {
            position,
            velocity: Vec3::zeros(),
            yaw: 0.0,
            lean: 0.0,
            grounded: false,
            jump_phase: 0,
            intent: Vec3::zeros(),
        }
    }

    /// Horizontal speed, ignoring the vertical component.
    #[inline]
    pub fn planar_speed(&self) -> f32 {
        Vector2::new(self.velocity.x, self.velocity.z).norm()
    }
}

/// What a single tick reported back to the caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct StepOutcome {
    /// Grounded transitioned from airborne to grounded this tick.
    pub landed: bool,
    /// Downward speed at the moment of landing; 0 when `landed` is false.
    pub impact_speed: f32,
}

pub struct CharacterController {
    state: CharacterState,
    config: MovementConfig,
}

impl CharacterController {
    pub fn new(spawn: Point3, config: MovementConfig) -> Self {
        Self {
            state: CharacterState::at_spawn(spawn),
            config,
        }
    }

    #[inline]
    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Advance the character by one frame.
    ///
    /// `input` is sampled once for this tick; the jump latch is consumed on
    /// every jump transition so a held key cannot refire each frame.
    /// `camera_forward` is the host camera's forward direction, used to turn
    /// the latches into world-space intent.
    pub fn update(
        &mut self,
        dt: f32,
        input: &mut InputState,
        camera_forward: Vec3,
        field: &ObstacleField,
    ) -> StepOutcome {
        let config = self.config;
        let dt = sanitize_dt(dt, config.max_dt);
        let state = &mut self.state;

        // Input direction relative to the camera.
        let (forward, right) = planar_frame(camera_forward, state.yaw);
        let mut intent = Vec3::zeros();
        if input.forward {
            intent += forward;
        }
        if input.back {
            intent -= forward;
        }
        if input.left {
            intent -= right;
        }
        if input.right {
            intent += right;
        }
        state.intent = intent.try_normalize(DIR_EPS_SQ.sqrt()).unwrap_or_default();

        // Acceleration, with reduced control while airborne.
        let control = if state.grounded { 1.0 } else { config.air_control };
        state.velocity.x += state.intent.x * config.acceleration * control * dt;
        state.velocity.z += state.intent.z * config.acceleration * control * dt;

        // Proportional drag on the horizontal velocity only.
        let mut planar = Vector2::new(state.velocity.x, state.velocity.z);
        let speed = planar.norm();
        if speed > 0.0 {
            let damping = if state.grounded {
                config.ground_friction
            } else {
                config.air_resistance
            };
            let new_speed = (speed - damping * speed * dt).max(0.0);
            planar *= new_speed / speed;
        }

        // Speed cap.
        let cap = if input.sprint {
            config.sprint_speed
        } else {
            config.walk_speed
        };
        let speed = planar.norm();
        if speed > cap {
            planar *= cap / speed;
        }
        state.velocity.x = planar.x;
        state.velocity.z = planar.y;

        // Gravity, unconditionally.
        state.velocity.y -= config.gravity * dt;

        // Jump state machine; edge-triggered on the latch.
        if input.jump {
            if state.grounded {
                state.velocity.y = config.jump_speed;
                state.grounded = false;
                state.jump_phase = 1;
                input.jump = false;
            } else if state.jump_phase == 1 && state.velocity.y < config.double_jump_gate {
                state.velocity.y = config.jump_speed * config.double_jump_scale;

                // Boost along the intent, or straight ahead of the camera
                // when no direction is held.
                let boost = if state.intent.norm_squared() > DIR_EPS_SQ {
                    state.intent
                } else {
                    forward
                };
                state.velocity.x += boost.x * config.double_jump_boost;
                state.velocity.z += boost.z * config.double_jump_boost;

                state.jump_phase = 2;
                input.jump = false;
            }
        }

        let candidates = field.query_nearby(&state.position, BROAD_RADIUS);

        // Predictive horizontal move with wall resolution. On a block the
        // displacement is discarded and velocity damped; no push-out.
        let intended = Point3::new(
            state.position.x + state.velocity.x * dt,
            state.position.y,
            state.position.z + state.velocity.z * dt,
        );
        if horizontal_blocked(&intended, field.obstacles(), &candidates) {
            state.velocity.x *= config.wall_penalty;
            state.velocity.z *= config.wall_penalty;
        } else {
            state.position.x = intended.x;
            state.position.z = intended.z;
        }

        // Vertical move, then snap to ground.
        state.position.y += state.velocity.y * dt;
        let was_grounded = state.grounded;
        let mut outcome = StepOutcome::default();
        match ground_snap(
            &state.position,
            state.velocity.y,
            field.obstacles(),
            &candidates,
        ) {
            Some(surface) => {
                state.position.y = surface;
                if !was_grounded {
                    outcome.landed = true;
                    outcome.impact_speed = (-state.velocity.y).max(0.0);
                }
                state.velocity.y = 0.0;
                state.grounded = true;
                state.jump_phase = 0;
            }
            None => state.grounded = false,
        }

        // Recovery fallback for falling out of the world; an anomaly of the
        // level geometry, not a physical behavior.
        if state.position.y < config.floor_y {
            log::warn!(
                "character fell below the world floor at y={:.1}, respawning",
                state.position.y
            );
            state.position = config.respawn_point;
            state.velocity = Vec3::zeros();
            outcome = StepOutcome::default();
        }

        // Facing follows the horizontal velocity by the shortest path; holds
        // still near rest to avoid jitter.
        let planar_speed = state.planar_speed();
        if planar_speed > config.yaw_min_speed {
            let target = state.velocity.x.atan2(state.velocity.z);
            state.yaw += wrap_angle(target - state.yaw) * config.yaw_gain * dt;
        }

        // Visual banking from the lateral (strafe) intent.
        let lateral = (input.right as i8 - input.left as i8) as f32;
        let lean_target = -lateral * config.lean_scale;
        state.lean += (lean_target - state.lean) * (config.lean_gain * dt).min(1.0);

        outcome
    }
}

/// Clamp the frame time into a safe integration range. Negative or non-finite
/// values become zero; stalls are capped at `max_dt`.
#[inline]
fn sanitize_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        return 0.0;
    }
    dt.min(max_dt)
}

/// Project the camera forward onto the horizontal plane and derive a right
/// vector. A camera looking straight up or down has no horizontal component;
/// fall back to the current facing so intent stays well-defined.
fn planar_frame(camera_forward: Vec3, yaw: f32) -> (Vec3, Vec3) {
    let flat = Vec3::new(camera_forward.x, 0.0, camera_forward.z);
    let forward = flat
        .try_normalize(DIR_EPS_SQ.sqrt())
        .unwrap_or_else(|| Vec3::new(yaw.sin(), 0.0, yaw.cos()));
    let right = forward.cross(&Vec3::y());
    (forward, right)
}

/// Wrap an angle difference into `(-PI, PI]` for shortest-path interpolation.
#[inline]
fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (angle + PI).rem_euclid(TAU) - PI
}
