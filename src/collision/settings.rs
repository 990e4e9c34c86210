/*!
Collision tolerances and body dimensions.

These constants centralize the parameters used by the ground probe, the wall
overlap test, and the broad-phase candidate query. Keeping them together makes
tuning easier and keeps the two resolvers agreeing on the body's shape.

Notes
- Distances are in world units, time in seconds.
- Favor practical world-space tolerances over machine epsilon for robust
  frame-to-frame behavior.
*/

/// Height above the feet from which the downward ground probe is cast.
/// Casting from chest height keeps the probe origin above low ledges the body
/// is allowed to step onto.
pub const PROBE_HEIGHT: f32 = 0.8;

/// Maximum gap between the feet and a probe hit that still counts as ground.
/// Absorbs frame-to-frame float drift and lets the body step onto low ledges
/// without visible popping.
pub const GROUND_TOLERANCE: f32 = 0.5;

/// Maximum probe ray length. Hits beyond this can never satisfy the snap
/// policy, so the cast is bounded instead of infinite.
pub const PROBE_RANGE: f32 = PROBE_HEIGHT + GROUND_TOLERANCE;

/// Height of the implicit flat ground plane.
pub const GROUND_PLANE_Y: f32 = 0.0;

/// Horizontal half-extent of the body box used for wall tests.
pub const BODY_HALF_EXTENT: f32 = 0.4;

/// Lower edge of the blocking band, above the feet. An obstacle whose top
/// sits below this is walkable terrain for the ground probe, not a wall.
pub const BODY_BAND_MIN: f32 = 0.5;

/// Upper edge of the blocking band, above the feet (head height).
pub const BODY_BAND_MAX: f32 = 1.8;

/// Broad-phase radius for candidate obstacle queries around the body.
/// Covers the largest generated footprint half-diagonal plus one frame of
/// travel at sprint speed.
pub const BROAD_RADIUS: f32 = 30.0;

/// Practical small squared length for direction guards.
/// Use before normalizing intent or camera-derived vectors.
pub const DIR_EPS_SQ: f32 = 1.0e-6;
