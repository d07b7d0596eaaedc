//! Overlap testing between actors and the collectible
//!
//! The only collision the game cares about is actor vs. coin; actors pass
//! freely through each other. Both entities are treated as axis-aligned
//! boxes centered on their positions, sized by their sprite footprints.

use glam::Vec2;

use super::state::{Actor, Collectible};

/// An axis-aligned bounding box, center + half-extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size / 2.0,
        }
    }

    /// Strict intersection on both axes; boxes that merely share an edge
    /// do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let gap = (self.center - other.center).abs();
        let reach = self.half + other.half;
        gap.x < reach.x && gap.y < reach.y
    }
}

/// Does this actor's box intersect the coin's box?
pub fn actor_hits_collectible(
    actor: &Actor,
    actor_half: Vec2,
    collectible: &Collectible,
    collectible_half: Vec2,
) -> bool {
    let a = Aabb {
        center: actor.pos,
        half: actor_half,
    };
    let c = Aabb {
        center: collectible.pos,
        half: collectible_half,
    };
    a.overlaps(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ActorId;

    fn actor_at(x: f32, y: f32) -> Actor {
        Actor {
            id: ActorId::P1,
            pos: Vec2::new(x, y),
            tint: 0,
        }
    }

    #[test]
    fn test_near_positions_overlap() {
        // Reference footprints: actor 32, coin 16 -> reach 24 per axis
        let coin = Collectible {
            pos: Vec2::new(300.0, 300.0),
        };
        let actor = actor_at(298.0, 298.0);
        assert!(actor_hits_collectible(
            &actor,
            Vec2::splat(16.0),
            &coin,
            Vec2::splat(8.0)
        ));
    }

    #[test]
    fn test_distant_positions_do_not_overlap() {
        let coin = Collectible {
            pos: Vec2::new(300.0, 300.0),
        };
        let actor = actor_at(100.0, 100.0);
        assert!(!actor_hits_collectible(
            &actor,
            Vec2::splat(16.0),
            &coin,
            Vec2::splat(8.0)
        ));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        let a = Aabb::from_center_size(Vec2::ZERO, Vec2::splat(32.0));
        let b = Aabb::from_center_size(Vec2::new(24.0, 0.0), Vec2::splat(16.0));
        assert!(!a.overlaps(&b));
        let c = Aabb::from_center_size(Vec2::new(23.9, 0.0), Vec2::splat(16.0));
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_overlap_on_one_axis_only_is_not_overlap() {
        let a = Aabb::from_center_size(Vec2::ZERO, Vec2::splat(32.0));
        let b = Aabb::from_center_size(Vec2::new(2.0, 100.0), Vec2::splat(16.0));
        assert!(!a.overlaps(&b));
    }
}
