//! Procedural city generation.
//!
//! Populates an [`ObstacleField`] with a lattice of building solids, a few
//! fixed landmark solids, and a scattering of floating collectibles. The
//! random source is injected so tests can seed it; layout is only
//! deterministic under a seeded generator, and tests assert structural
//! invariants rather than exact positions.

use rand::Rng;

use crate::collision::types::{Obstacle, Point3, Vec3};
use crate::world::field::ObstacleField;

/// Layout parameters for world generation.
///
/// The defaults reproduce the shipped city: a ±300 lattice with 20-unit
/// spacing, a clear spawn block at the center, a river band across the map,
/// and 50 collectibles floating over the rooftops' lower reaches.
#[derive(Clone, Copy, Debug)]
pub struct WorldGenConfig {
    /// Half-extent of the lattice along each axis.
    pub range: f32,
    /// Lattice spacing between building cells.
    pub step: f32,
    /// Half-extent of the spawn-safe clearing around the origin.
    pub spawn_clear: f32,
    /// River band: lattice cells with `river_z_min < z < river_z_max` stay empty.
    pub river_z_min: f32,
    pub river_z_max: f32,
    /// Building height range (min inclusive, max exclusive).
    pub height_min: f32,
    pub height_max: f32,
    /// Building footprint side range (min inclusive, max exclusive).
    pub footprint_min: f32,
    pub footprint_max: f32,
    /// Number of collectibles to scatter.
    pub collectible_count: usize,
    /// Half-extent of the collectible scatter volume in XZ.
    pub collectible_spread: f32,
    /// Collectible altitude band (min inclusive, max exclusive).
    pub collectible_y_min: f32,
    pub collectible_y_max: f32,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            range: 300.0,
            step: 20.0,
            spawn_clear: 20.0,
            river_z_min: 20.0,
            river_z_max: 80.0,
            height_min: 10.0,
            height_max: 50.0,
            footprint_min: 8.0,
            footprint_max: 18.0,
            collectible_count: 50,
            collectible_spread: 200.0,
            collectible_y_min: 2.0,
            collectible_y_max: 22.0,
        }
    }
}

/// Generate a fresh world: lattice buildings, landmarks, collectibles.
pub fn generate<R: Rng>(config: &WorldGenConfig, rng: &mut R) -> ObstacleField {
    let mut field = ObstacleField::new();

    let cells = (config.range * 2.0 / config.step).round() as i32;
    for ix in 0..=cells {
        let x = -config.range + ix as f32 * config.step;
        for iz in 0..=cells {
            let z = -config.range + iz as f32 * config.step;

            // Keep the spawn block and the river band clear.
            if x.abs() < config.spawn_clear && z.abs() < config.spawn_clear {
                continue;
            }
            if z > config.river_z_min && z < config.river_z_max {
                continue;
            }

            let height = rng.gen_range(config.height_min..config.height_max);
            let width = rng.gen_range(config.footprint_min..config.footprint_max);
            let depth = rng.gen_range(config.footprint_min..config.footprint_max);

            field.insert_obstacle(Obstacle::new(
                Point3::new(x - width * 0.5, 0.0, z - depth * 0.5),
                Point3::new(x + width * 0.5, height, z + depth * 0.5),
            ));
        }
    }

    insert_landmarks(&mut field);

    for _ in 0..config.collectible_count {
        let x = rng.gen_range(-config.collectible_spread..config.collectible_spread);
        let z = rng.gen_range(-config.collectible_spread..config.collectible_spread);
        let y = rng.gen_range(config.collectible_y_min..config.collectible_y_max);
        field.spawn_collectible(Point3::new(x, y, z));
    }

    log::info!(
        "generated world: {} obstacles, {} collectibles",
        field.obstacles().len(),
        field.collectibles().len()
    );

    field
}

/// Fixed landmark solids. The ferris-wheel landmark is visual-only and
/// contributes no obstacle.
fn insert_landmarks(field: &mut ObstacleField) {
    // Clock tower body.
    field.insert_obstacle(Obstacle::from_center(
        Point3::new(-20.0, 20.0, -40.0),
        Vec3::new(3.0, 20.0, 3.0),
    ));

    // Bridge towers flanking the river crossing.
    field.insert_obstacle(Obstacle::from_center(
        Point3::new(-20.0, 12.5, 50.0),
        Vec3::new(4.0, 12.5, 4.0),
    ));
    field.insert_obstacle(Obstacle::from_center(
        Point3::new(20.0, 12.5, 50.0),
        Vec3::new(4.0, 12.5, 4.0),
    ));

    // Bridge deck over the river; its top is walkable.
    field.insert_obstacle(Obstacle::from_center(
        Point3::new(0.0, 5.0, 50.0),
        Vec3::new(30.0, 1.0, 5.0),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded_world(seed: u64) -> ObstacleField {
        generate(&WorldGenConfig::default(), &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn all_obstacles_satisfy_the_box_invariant() {
        let field = seeded_world(7);
        assert!(!field.obstacles().is_empty());
        for ob in field.obstacles() {
            assert!(ob.aabb.mins.x <= ob.aabb.maxs.x);
            assert!(ob.aabb.mins.y <= ob.aabb.maxs.y);
            assert!(ob.aabb.mins.z <= ob.aabb.maxs.z);
            assert!(ob.height() >= 0.0);
        }
    }

    #[test]
    fn spawn_point_is_clear() {
        let field = seeded_world(7);
        // No footprint may cover the origin; a fresh character stands on flat
        // ground there.
        assert_eq!(field.height_at(0.0, 0.0), 0.0);
    }

    #[test]
    fn bridge_deck_is_walkable_over_the_river() {
        let field = seeded_world(7);
        assert_eq!(field.height_at(0.0, 50.0), 6.0);
    }

    #[test]
    fn river_band_has_no_lattice_buildings() {
        let field = seeded_world(42);
        // Only the bridge landmarks may stand in the band; everything there
        // must be confined to the bridge's X span.
        for ob in field.obstacles() {
            let center = ob.aabb.center();
            if center.z > 20.0 && center.z < 80.0 {
                assert!(
                    center.x.abs() <= 30.0,
                    "non-bridge obstacle in the river band at {center:?}"
                );
            }
        }
    }

    #[test]
    fn collectibles_land_inside_the_configured_volume() {
        let config = WorldGenConfig::default();
        let field = seeded_world(7);
        assert_eq!(field.collectibles().len(), config.collectible_count);
        for c in field.collectibles() {
            assert!(c.position.x.abs() <= config.collectible_spread);
            assert!(c.position.z.abs() <= config.collectible_spread);
            assert!(c.position.y >= config.collectible_y_min);
            assert!(c.position.y < config.collectible_y_max);
        }
    }

    #[test]
    fn collectible_ids_are_unique() {
        let field = seeded_world(7);
        let mut ids: Vec<u32> = field.collectibles().iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), field.collectibles().len());
    }

    #[test]
    fn same_seed_reproduces_the_same_layout() {
        let a = seeded_world(1234);
        let b = seeded_world(1234);

        assert_eq!(a.obstacles().len(), b.obstacles().len());
        for (oa, ob) in a.obstacles().iter().zip(b.obstacles()) {
            assert_eq!(oa.aabb.mins, ob.aabb.mins);
            assert_eq!(oa.aabb.maxs, ob.aabb.maxs);
        }
        for (ca, cb) in a.collectibles().iter().zip(b.collectibles()) {
            assert_eq!(ca.id, cb.id);
            assert_eq!(ca.position, cb.position);
        }
    }
}
