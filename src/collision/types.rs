/*!
Core collision types and math aliases shared by the collision submodules.

This module intentionally contains no algorithms. It defines the data types
exchanged between:
- the obstacle field (broad-phase candidate queries over immutable statics)
- ground snapping (downward ray probe)
- wall resolution (torso-band box overlap test)
- the character controller
*/

use nalgebra as na;
use parry3d::bounding_volume::Aabb;

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Point3 = na::Point3<f32>;

/// An axis-aligned solid region of the static world (building, tower, deck).
///
/// Immutable after world generation. The top height is cached because the
/// ground and wall queries read it on every candidate.
#[derive(Clone, Copy, Debug)]
pub struct Obstacle {
    /// World-space bounds. Invariant: `mins <= maxs` component-wise.
    pub aabb: Aabb,
    /// Cached `aabb.maxs.y`.
    pub top: f32,
}

impl Obstacle {
    #[inline]
    pub fn new(mins: Point3, maxs: Point3) -> Self {
        debug_assert!(mins.x <= maxs.x && mins.y <= maxs.y && mins.z <= maxs.z);
        Self {
            aabb: Aabb::new(mins, maxs),
            top: maxs.y,
        }
    }

    /// Convenience: build an obstacle from its center and half-extents.
    #[inline]
    pub fn from_center(center: Point3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Vertical extent of the solid. Non-negative by construction.
    #[inline]
    pub fn height(&self) -> f32 {
        self.aabb.maxs.y - self.aabb.mins.y
    }

    /// Does the XZ footprint contain the given planar point?
    #[inline]
    pub fn footprint_contains(&self, x: f32, z: f32) -> bool {
        x >= self.aabb.mins.x
            && x <= self.aabb.maxs.x
            && z >= self.aabb.mins.z
            && z <= self.aabb.maxs.z
    }

    /// Squared XZ distance from the footprint center to `point`.
    ///
    /// This is the representative distance used by the broad phase.
    #[inline]
    pub fn planar_distance_sq(&self, point: &Point3) -> f32 {
        let center = self.aabb.center();
        let dx = center.x - point.x;
        let dz = center.z - point.z;
        dx * dx + dz * dz
    }
}
