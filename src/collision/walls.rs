use parry3d::bounding_volume::{Aabb, BoundingVolume};

use super::{
    settings::{BODY_BAND_MAX, BODY_BAND_MIN, BODY_HALF_EXTENT},
    types::{Obstacle, Point3},
};

/// Any-hit wall test for a horizontal move.
///
/// Builds the body's torso-band box around `intended` (the position the body
/// wants to occupy this frame) and tests it against the broad-phase candidate
/// obstacles. An obstacle whose top sits below the band's lower edge is
/// walkable terrain already handled by ground snapping and does not block.
///
/// This is an overlap test, not a penetration-depth resolution: the caller
/// responds by damping velocity and discarding the displacement.
pub fn horizontal_blocked(intended: &Point3, statics: &[Obstacle], candidates: &[usize]) -> bool {
    let body = Aabb::new(
        Point3::new(
            intended.x - BODY_HALF_EXTENT,
            intended.y + BODY_BAND_MIN,
            intended.z - BODY_HALF_EXTENT,
        ),
        Point3::new(
            intended.x + BODY_HALF_EXTENT,
            intended.y + BODY_BAND_MAX,
            intended.z + BODY_HALF_EXTENT,
        ),
    );

    for &idx in candidates {
        let ob = &statics[idx];
        // Top below the blocking band: a curb or rooftop, not a wall.
        if ob.top < intended.y + BODY_BAND_MIN {
            continue;
        }
        if body.intersects(&ob.aabb) {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::types::Vec3;

    #[test]
    fn tall_obstacle_in_the_band_blocks() {
        let statics = [Obstacle::new(
            Point3::new(0.5, 0.0, -2.0),
            Point3::new(4.0, 10.0, 2.0),
        )];
        let intended = Point3::new(0.2, 0.0, 0.0);
        assert!(horizontal_blocked(&intended, &statics, &[0]));
    }

    #[test]
    fn low_curb_below_the_band_does_not_block() {
        // Top at 0.4, band starts at 0.5: step-up territory, not a wall.
        let statics = [Obstacle::new(
            Point3::new(0.5, 0.0, -2.0),
            Point3::new(4.0, 0.4, 2.0),
        )];
        let intended = Point3::new(0.2, 0.0, 0.0);
        assert!(!horizontal_blocked(&intended, &statics, &[0]));
    }

    #[test]
    fn distant_obstacle_does_not_block() {
        let statics = [Obstacle::from_center(
            Point3::new(50.0, 10.0, 0.0),
            Vec3::new(5.0, 10.0, 5.0),
        )];
        let intended = Point3::new(0.0, 0.0, 0.0);
        assert!(!horizontal_blocked(&intended, &statics, &[0]));
    }

    #[test]
    fn band_is_relative_to_current_height() {
        // Standing on a rooftop at y=20, a neighboring box topping out at 20.3
        // is below the band and walkable.
        let statics = [Obstacle::new(
            Point3::new(0.5, 0.0, -2.0),
            Point3::new(4.0, 20.3, 2.0),
        )];
        let intended = Point3::new(0.2, 20.0, 0.0);
        assert!(!horizontal_blocked(&intended, &statics, &[0]));
    }

    #[test]
    fn empty_candidate_set_never_blocks() {
        let statics = [Obstacle::new(
            Point3::new(-1.0, 0.0, -1.0),
            Point3::new(1.0, 10.0, 1.0),
        )];
        assert!(!horizontal_blocked(&Point3::new(0.0, 0.0, 0.0), &statics, &[]));
    }
}
