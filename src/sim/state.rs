//! Game state and core simulation types
//!
//! Everything that must survive between frame ticks lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, SessionConfig};

/// Which of the two players an entity or event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorId {
    P1,
    P2,
}

impl ActorId {
    /// Both players, in simulation order
    pub const ALL: [ActorId; 2] = [ActorId::P1, ActorId::P2];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            ActorId::P1 => 0,
            ActorId::P2 => 1,
        }
    }
}

/// The fixed rectangular playable area, and also the coin respawn zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl FieldBounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Bounds of a width x height field anchored at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }

    /// Clamp a position onto the bounds, both axes independently
    #[inline]
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        pos.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.min.x && pos.x <= self.max.x && pos.y >= self.min.y && pos.y <= self.max.y
    }
}

/// A player-controlled entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub pos: Vec2,
    /// Display tint, 0xRRGGBB; carried for the host, never read by the sim
    pub tint: u32,
}

impl Actor {
    /// Integrate one frame of intent, then clamp to the field.
    /// An actor pressed against an edge stays at the edge.
    pub fn apply_intent(&mut self, intent: super::Intent, speed: f32, bounds: &FieldBounds) {
        self.pos += Vec2::new(intent.dx, intent.dy) * speed;
        self.pos = bounds.clamp(self.pos);
    }
}

/// The single coin both players chase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
}

impl Collectible {
    /// Move the coin to a fresh position inside the respawn zone, each
    /// axis sampled independently. Landing on the old spot is allowed.
    pub fn relocate(&mut self, zone: &FieldBounds, rng: &mut Pcg32) -> Vec2 {
        self.pos = Vec2::new(
            rng.random_range(zone.min.x..=zone.max.x),
            rng.random_range(zone.min.y..=zone.max.y),
        );
        self.pos
    }
}

/// Per-player accumulated score. Only hit resolution writes to it;
/// there is no decrement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    scores: [u64; 2],
}

impl ScoreBoard {
    pub fn award(&mut self, actor: ActorId, amount: u64) {
        self.scores[actor.index()] += amount;
    }

    pub fn read(&self, actor: ActorId) -> u64 {
        self.scores[actor.index()]
    }
}

/// Presentation events emitted each tick for the host to render.
/// Fire-and-forget: the sim never waits on the host's reaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Emitted every frame for each actor
    ActorMoved { actor: ActorId, pos: Vec2 },
    /// Emitted on a hit
    ScoreChanged { actor: ActorId, score: u64 },
    /// Emitted on a hit
    CollectibleRelocated { pos: Vec2 },
    /// Emitted on a hit; cosmetic only (e.g. a scale-pulse on the sprite)
    HitFeedback { actor: ActorId },
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Frame tick counter
    pub time_ticks: u64,
    /// Playable area actors are clamped to
    pub bounds: FieldBounds,
    /// Coin respawn sampling zone, inset from the field
    pub respawn_zone: FieldBounds,
    /// Half-extents of the sprite footprints, for overlap testing
    pub actor_half: Vec2,
    pub collectible_half: Vec2,
    /// Both actors, player one first
    pub actors: [Actor; 2],
    pub collectible: Collectible,
    pub scores: ScoreBoard,
    pub(super) rng: Pcg32,
}

impl GameState {
    /// Build the session from validated configuration.
    /// Rejecting a bad config here is the only failure in this core.
    pub fn new(config: &SessionConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let actors = [
            Actor {
                id: ActorId::P1,
                pos: config.actors[0].start,
                tint: config.actors[0].tint,
            },
            Actor {
                id: ActorId::P2,
                pos: config.actors[1].start,
                tint: config.actors[1].tint,
            },
        ];

        log::info!(
            "session start: field {}x{}, seed {seed}",
            config.field_width,
            config.field_height
        );

        Ok(Self {
            seed,
            time_ticks: 0,
            bounds: FieldBounds::from_size(config.field_width, config.field_height),
            respawn_zone: FieldBounds::new(config.respawn_min, config.respawn_max),
            actor_half: Vec2::splat(config.actor_size / 2.0),
            collectible_half: Vec2::splat(config.collectible_size / 2.0),
            actors,
            collectible: Collectible {
                pos: config.collectible_start,
            },
            scores: ScoreBoard::default(),
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    pub fn actor(&self, id: ActorId) -> &Actor {
        &self.actors[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MOVE_SPEED;
    use crate::sim::Intent;
    use proptest::prelude::*;

    fn test_state(seed: u64) -> GameState {
        GameState::new(&SessionConfig::default(), seed).unwrap()
    }

    #[test]
    fn test_diagonal_move() {
        let bounds = FieldBounds::from_size(700.0, 400.0);
        let mut actor = Actor {
            id: ActorId::P1,
            pos: Vec2::new(200.0, 200.0),
            tint: 0,
        };
        actor.apply_intent(Intent { dx: 1.0, dy: -1.0 }, MOVE_SPEED, &bounds);
        assert_eq!(actor.pos, Vec2::new(203.0, 197.0));
    }

    #[test]
    fn test_edge_clamp() {
        let bounds = FieldBounds::from_size(700.0, 400.0);
        let mut actor = Actor {
            id: ActorId::P1,
            pos: Vec2::new(699.0, 200.0),
            tint: 0,
        };
        actor.apply_intent(Intent { dx: 1.0, dy: 0.0 }, MOVE_SPEED, &bounds);
        assert_eq!(actor.pos.x, 700.0);
    }

    #[test]
    fn test_score_award_accumulates() {
        let mut scores = ScoreBoard::default();
        assert_eq!(scores.read(ActorId::P1), 0);
        for _ in 0..3 {
            scores.award(ActorId::P2, 10);
        }
        assert_eq!(scores.read(ActorId::P2), 30);
        assert_eq!(scores.read(ActorId::P1), 0);
    }

    #[test]
    fn test_relocate_stays_in_zone() {
        let mut state = test_state(7);
        let zone = state.respawn_zone;
        for _ in 0..100 {
            let pos = state.collectible.relocate(&zone, &mut state.rng);
            assert!(zone.contains(pos), "coin respawned outside zone: {pos}");
        }
    }

    #[test]
    fn test_bad_config_rejected_at_construction() {
        let config = SessionConfig {
            field_width: f32::NAN,
            ..Default::default()
        };
        assert!(GameState::new(&config, 1).is_err());
    }

    proptest! {
        /// Actors never leave the field, whatever intent sequence arrives.
        #[test]
        fn prop_bounds_invariant(steps in proptest::collection::vec((-1i8..=1, -1i8..=1), 0..200)) {
            let mut state = test_state(42);
            let bounds = state.bounds;
            for (dx, dy) in steps {
                let intent = Intent { dx: dx as f32, dy: dy as f32 };
                state.actors[0].apply_intent(intent, MOVE_SPEED, &bounds);
                let pos = state.actors[0].pos;
                prop_assert!(bounds.contains(pos), "actor escaped field at {}", pos);
            }
        }

        /// Relocation holds the zone bounds for arbitrary seeds.
        #[test]
        fn prop_relocate_in_zone(seed in any::<u64>()) {
            let mut state = test_state(seed);
            let zone = state.respawn_zone;
            let pos = state.collectible.relocate(&zone, &mut state.rng);
            prop_assert!(zone.contains(pos));
        }
    }
}
