//! Coin Clash - a two-player coin-chase arena
//!
//! Two actors race across a bounded field to touch a single coin; touching
//! it scores and relocates the coin. This crate is the simulation core
//! only: the rendering host drives it once per display frame and draws
//! from the events it emits.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input sampling, movement, collision,
//!   scoring)
//! - `config`: Session bootstrap parameters and validation

pub mod config;
pub mod sim;

pub use config::{ActorSetup, ConfigError, InputBinding, SessionConfig};
pub use sim::{GameEvent, GameState, Intent, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Field dimensions (world units)
    pub const FIELD_WIDTH: f32 = 700.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Per-frame step distance, both axes
    pub const MOVE_SPEED: f32 = 3.0;

    /// Points awarded per coin pickup
    pub const SCORE_PER_HIT: u64 = 10;

    /// Coin respawn zone, inset from the field so the coin never lands
    /// flush against an edge or under the score text
    pub const RESPAWN_MIN_X: f32 = 100.0;
    pub const RESPAWN_MAX_X: f32 = 600.0;
    pub const RESPAWN_MIN_Y: f32 = 100.0;
    pub const RESPAWN_MAX_Y: f32 = 300.0;

    /// Sprite footprints (square) used for overlap testing
    pub const ACTOR_SIZE: f32 = 32.0;
    pub const COLLECTIBLE_SIZE: f32 = 16.0;

    /// Player one: start position and display tint
    pub const P1_START: (f32, f32) = (100.0, 100.0);
    pub const P1_TINT: u32 = 0xFA8072;

    /// Player two
    pub const P2_START: (f32, f32) = (600.0, 100.0);
    pub const P2_TINT: u32 = 0x98FB98;

    /// Coin start position
    pub const COLLECTIBLE_START: (f32, f32) = (300.0, 300.0);
}
