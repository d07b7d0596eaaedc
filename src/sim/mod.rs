//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per host frame-tick
//! - Seeded RNG only
//! - Fixed actor order (player one before player two)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{Aabb, actor_hits_collectible};
pub use input::{Intent, KeySet, PadState, SourceSample, sample};
pub use state::{
    Actor, ActorId, Collectible, FieldBounds, GameEvent, GameState, ScoreBoard,
};
pub use tick::{TickInput, tick};
