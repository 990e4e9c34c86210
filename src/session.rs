//! Host-facing tick facade.
//!
//! Wires the character controller, event sink and camera rig over one
//! obstacle field and runs them in order each frame. The host loop calls
//! [`Session::update`] once per tick and reads the returned frame output plus
//! the snapshot accessors; everything is settled by the time `update`
//! returns, so a renderer may read the snapshots between ticks.

use crate::camera::{CameraPose, CameraRig};
use crate::character::{
    AnimationPose, CharacterController, CharacterState, MovementConfig, derive_pose,
};
use crate::collision::types::{Obstacle, Point3, Vec3};
use crate::events::{EventSink, GameEvent};
use crate::input::InputState;
use crate::world::field::{Collectible, ObstacleField};

/// Where a fresh character spawns: over the cleared center block, in the air.
fn spawn_point() -> Point3 {
    Point3::new(0.0, 5.0, 0.0)
}

/// Initial camera position before the rig has locked on.
fn camera_start() -> Point3 {
    Point3::new(0.0, 5.0, 10.0)
}

/// Everything a single tick produced for the host.
#[derive(Debug)]
pub struct FrameOutput {
    /// Discrete events in the order they occurred this tick.
    pub events: Vec<GameEvent>,
    /// Total score after this tick.
    pub score: u32,
    /// Proposed camera placement.
    pub camera: CameraPose,
    /// Animation parameters for the presentation layer.
    pub pose: AnimationPose,
}

/// One play session: a generated world and the player moving through it.
pub struct Session {
    field: ObstacleField,
    controller: CharacterController,
    sink: EventSink,
    camera: CameraRig,
}

impl Session {
    pub fn new(field: ObstacleField, config: MovementConfig) -> Self {
        Self {
            field,
            controller: CharacterController::new(spawn_point(), config),
            sink: EventSink::new(),
            camera: CameraRig::new(camera_start()),
        }
    }

    /// Run one frame: physics, events, camera.
    ///
    /// `dt` is the elapsed seconds reported by the host loop; it may be zero
    /// and is sanitized internally. `input` is the host-owned latch set; the
    /// jump latch may be consumed.
    pub fn update(
        &mut self,
        dt: f32,
        input: &mut InputState,
        camera_forward: Vec3,
    ) -> FrameOutput {
        let outcome = self.controller.update(dt, input, camera_forward, &self.field);

        let mut events = Vec::new();
        let state = *self.controller.state();
        if outcome.landed {
            events.push(GameEvent::Landed {
                position: state.position,
                impact_speed: outcome.impact_speed,
            });
        }
        self.sink
            .check_collectibles(&state.position, &mut self.field, &mut events);

        let pose = derive_pose(&state, self.controller.config());
        let camera = self.camera.update(dt, &state);

        FrameOutput {
            events,
            score: self.sink.score(),
            camera,
            pose,
        }
    }

    /// Read-only world geometry for the renderer.
    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        self.field.obstacles()
    }

    /// Read-only live collectibles for the renderer.
    #[inline]
    pub fn collectibles(&self) -> &[Collectible] {
        self.field.collectibles()
    }

    #[inline]
    pub fn character(&self) -> &CharacterState {
        self.controller.state()
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.sink.score()
    }
}
