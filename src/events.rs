//! Score bookkeeping and the discrete event stream.
//!
//! The sink owns the score and is the only writer to the obstacle field's
//! collectible set. Events are purely additive output for the host's UI and
//! audio layers; nothing here can fail.

use crate::collision::types::Point3;
use crate::world::field::ObstacleField;

/// Squared pickup radius around the character's feet.
pub const PICKUP_RADIUS_SQ: f32 = 4.0;

/// Score reward per collectible.
pub const COLLECT_REWARD: u32 = 100;

/// A discrete world-interaction event produced by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    /// The character touched down after being airborne.
    Landed { position: Point3, impact_speed: f32 },
    /// A collectible was picked up and removed from the world.
    Collected {
        id: u32,
        position: Point3,
        reward: u32,
    },
}

/// Collection bookkeeping.
#[derive(Debug, Default)]
pub struct EventSink {
    score: u32,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Sweep the live collectibles around `position`, removing every hit and
    /// crediting the reward.
    ///
    /// The hits are snapshotted before removal so that removing one pickup
    /// cannot skip an adjacent one mid-traversal. Removal is idempotent at
    /// the field level, so a duplicate id can never double-credit.
    pub fn check_collectibles(
        &mut self,
        position: &Point3,
        field: &mut ObstacleField,
        events: &mut Vec<GameEvent>,
    ) {
        let hits: Vec<(u32, Point3)> = field
            .collectibles()
            .iter()
            .filter(|c| (c.position - *position).norm_squared() < PICKUP_RADIUS_SQ)
            .map(|c| (c.id, c.position))
            .collect();

        for (id, position) in hits {
            if field.remove_collectible(id) {
                self.score += COLLECT_REWARD;
                events.push(GameEvent::Collected {
                    id,
                    position,
                    reward: COLLECT_REWARD,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pickup_credits_the_reward_exactly_once() {
        let mut field = ObstacleField::new();
        let id = field.spawn_collectible(Point3::new(0.5, 0.0, 0.0));
        let mut sink = EventSink::new();
        let mut events = Vec::new();

        sink.check_collectibles(&Point3::new(0.0, 0.0, 0.0), &mut field, &mut events);
        assert_eq!(sink.score(), COLLECT_REWARD);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::Collected { id: got, .. } if got == id));

        // The collectible is gone; a second sweep finds nothing.
        events.clear();
        sink.check_collectibles(&Point3::new(0.0, 0.0, 0.0), &mut field, &mut events);
        assert_eq!(sink.score(), COLLECT_REWARD);
        assert!(events.is_empty());
        assert!(field.collectibles().is_empty());
    }

    #[test]
    fn adjacent_pickups_are_both_collected_in_one_sweep() {
        // Removal during traversal must not skip the neighbor.
        let mut field = ObstacleField::new();
        field.spawn_collectible(Point3::new(0.5, 0.0, 0.0));
        field.spawn_collectible(Point3::new(-0.5, 0.0, 0.0));
        let mut sink = EventSink::new();
        let mut events = Vec::new();

        sink.check_collectibles(&Point3::new(0.0, 0.0, 0.0), &mut field, &mut events);
        assert_eq!(sink.score(), 2 * COLLECT_REWARD);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn out_of_range_collectibles_are_untouched() {
        let mut field = ObstacleField::new();
        field.spawn_collectible(Point3::new(10.0, 0.0, 0.0));
        let mut sink = EventSink::new();
        let mut events = Vec::new();

        sink.check_collectibles(&Point3::new(0.0, 0.0, 0.0), &mut field, &mut events);
        assert_eq!(sink.score(), 0);
        assert!(events.is_empty());
        assert_eq!(field.collectibles().len(), 1);
    }

    #[test]
    fn pickup_radius_is_strict() {
        // Exactly on the radius boundary (distance² == 4) does not collect.
        let mut field = ObstacleField::new();
        field.spawn_collectible(Point3::new(2.0, 0.0, 0.0));
        let mut sink = EventSink::new();
        let mut events = Vec::new();

        sink.check_collectibles(&Point3::new(0.0, 0.0, 0.0), &mut field, &mut events);
        assert_eq!(sink.score(), 0);
    }
}
