use crate::collision::types::{Obstacle, Point3};

/// A point-like floating pickup.
#[derive(Clone, Copy, Debug)]
pub struct Collectible {
    /// Stable id, assigned densely at generation.
    pub id: u32,
    /// World position.
    pub position: Point3,
}

/// The static world: solid obstacles plus the live collectible set.
///
/// Obstacles are write-once after generation and read-only during play.
/// Collectibles support a single mutating operation, removal, which is
/// irreversible within a session.
///
/// Queries return candidate indices into the obstacle slice so callers can
/// run several narrow-phase tests against one broad-phase result without
/// cloning obstacles.
#[derive(Debug, Default)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    collectibles: Vec<Collectible>,
    next_collectible_id: u32,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Adds a collectible and returns its id.
    pub fn spawn_collectible(&mut self, position: Point3) -> u32 {
        let id = self.next_collectible_id;
        self.next_collectible_id += 1;
        self.collectibles.push(Collectible { id, position });
        id
    }

    /// Read-only snapshot of the solid world, e.g. for rendering.
    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Read-only snapshot of the live collectibles.
    #[inline]
    pub fn collectibles(&self) -> &[Collectible] {
        &self.collectibles
    }

    /// Broad-phase: indices of obstacles whose footprint center lies within
    /// `radius` of `point` in the XZ plane.
    ///
    /// This is the mandatory filter before any narrow-phase test; it bounds
    /// per-frame collision cost to the local neighborhood.
    pub fn query_nearby(&self, point: &Point3, radius: f32) -> Vec<usize> {
        let radius_sq = radius * radius;
        self.obstacles
            .iter()
            .enumerate()
            .filter(|(_, ob)| ob.planar_distance_sq(point) <= radius_sq)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Maximum top height of any obstacle whose footprint contains `(x, z)`,
    /// or 0 for the flat ground fallback.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let mut max_top = 0.0_f32;
        for ob in &self.obstacles {
            if ob.footprint_contains(x, z) && ob.top > max_top {
                max_top = ob.top;
            }
        }
        max_top
    }

    /// Removes a collectible by id. Returns whether it was present; removing
    /// an absent id is a no-op, so duplicate delivery is harmless.
    pub fn remove_collectible(&mut self, id: u32) -> bool {
        match self.collectibles.iter().position(|c| c.id == id) {
            Some(idx) => {
                self.collectibles.swap_remove(idx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::types::Vec3;

    fn block_at(x: f32, z: f32, top: f32) -> Obstacle {
        Obstacle::from_center(Point3::new(x, top * 0.5, z), Vec3::new(4.0, top * 0.5, 4.0))
    }

    #[test]
    fn query_nearby_filters_by_planar_center_distance() {
        let mut field = ObstacleField::new();
        field.insert_obstacle(block_at(5.0, 0.0, 10.0));
        field.insert_obstacle(block_at(100.0, 0.0, 10.0));

        let near = field.query_nearby(&Point3::new(0.0, 0.0, 0.0), 30.0);
        assert_eq!(near, vec![0]);
    }

    #[test]
    fn height_at_takes_the_tallest_containing_footprint() {
        let mut field = ObstacleField::new();
        field.insert_obstacle(block_at(0.0, 0.0, 10.0));
        field.insert_obstacle(block_at(1.0, 1.0, 25.0));

        assert_eq!(field.height_at(0.0, 0.0), 25.0);
    }

    #[test]
    fn height_at_falls_back_to_flat_ground() {
        let mut field = ObstacleField::new();
        field.insert_obstacle(block_at(50.0, 50.0, 10.0));
        assert_eq!(field.height_at(0.0, 0.0), 0.0);
    }

    #[test]
    fn removing_a_collectible_twice_is_a_no_op() {
        let mut field = ObstacleField::new();
        let id = field.spawn_collectible(Point3::new(1.0, 2.0, 3.0));

        assert!(field.remove_collectible(id));
        assert!(!field.remove_collectible(id));
        assert!(field.collectibles().is_empty());
    }

    #[test]
    fn collectible_ids_stay_stable_across_removals() {
        let mut field = ObstacleField::new();
        let a = field.spawn_collectible(Point3::new(0.0, 0.0, 0.0));
        let b = field.spawn_collectible(Point3::new(1.0, 0.0, 0.0));
        let c = field.spawn_collectible(Point3::new(2.0, 0.0, 0.0));

        // swap_remove reorders storage but must not alias ids.
        assert!(field.remove_collectible(a));
        assert!(field.remove_collectible(c));
        assert_eq!(field.collectibles().len(), 1);
        assert_eq!(field.collectibles()[0].id, b);
    }
}
