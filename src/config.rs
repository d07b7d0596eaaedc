//! Session bootstrap configuration
//!
//! Read once at session start and immutable thereafter. Validated before
//! the simulation is constructed so it never starts in an inconsistent
//! state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which host input device feeds an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputBinding {
    /// A logical keyboard key-set (e.g. slot 0 = WASD, slot 1 = arrows)
    Keyboard { slot: u8 },
    /// A gamepad slot; may be disconnected at any given frame
    Gamepad { slot: u8 },
}

/// Per-actor bootstrap parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActorSetup {
    /// Start position (field coordinates)
    pub start: Vec2,
    /// Display tint, 0xRRGGBB (presentation-only, carried for the host)
    pub tint: u32,
    /// Input device feeding this actor
    pub binding: InputBinding,
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Field dimensions; actors are clamped to [0, width] x [0, height]
    pub field_width: f32,
    pub field_height: f32,
    /// Exactly two actors, player one first
    pub actors: [ActorSetup; 2],
    /// Coin start position
    pub collectible_start: Vec2,
    /// Coin respawn sampling zone (min corner, max corner)
    pub respawn_min: Vec2,
    pub respawn_max: Vec2,
    /// Square sprite footprints used for overlap testing
    pub actor_size: f32,
    pub collectible_size: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            actors: [
                ActorSetup {
                    start: Vec2::new(P1_START.0, P1_START.1),
                    tint: P1_TINT,
                    binding: InputBinding::Keyboard { slot: 0 },
                },
                ActorSetup {
                    start: Vec2::new(P2_START.0, P2_START.1),
                    tint: P2_TINT,
                    binding: InputBinding::Keyboard { slot: 1 },
                },
            ],
            collectible_start: Vec2::new(COLLECTIBLE_START.0, COLLECTIBLE_START.1),
            respawn_min: Vec2::new(RESPAWN_MIN_X, RESPAWN_MIN_Y),
            respawn_max: Vec2::new(RESPAWN_MAX_X, RESPAWN_MAX_Y),
            actor_size: ACTOR_SIZE,
            collectible_size: COLLECTIBLE_SIZE,
        }
    }
}

/// Configuration rejected at session bootstrap
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("field dimensions must be positive and finite: {width}x{height}")]
    BadFieldSize { width: f32, height: f32 },
    #[error("actor {index} start position {x},{y} lies outside the field")]
    ActorStartOutOfField { index: usize, x: f32, y: f32 },
    #[error("collectible start position {x},{y} lies outside the field")]
    CollectibleStartOutOfField { x: f32, y: f32 },
    #[error("respawn zone is empty or extends outside the field")]
    BadRespawnZone,
    #[error("sprite footprints must be positive and finite")]
    BadSpriteSize,
    #[error("both actors are bound to the same input device")]
    DuplicateBinding,
}

impl SessionConfig {
    /// Check the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_width.is_finite() && self.field_width > 0.0)
            || !(self.field_height.is_finite() && self.field_height > 0.0)
        {
            return Err(ConfigError::BadFieldSize {
                width: self.field_width,
                height: self.field_height,
            });
        }

        let in_field = |p: Vec2| {
            p.x.is_finite()
                && p.y.is_finite()
                && (0.0..=self.field_width).contains(&p.x)
                && (0.0..=self.field_height).contains(&p.y)
        };

        for (index, actor) in self.actors.iter().enumerate() {
            if !in_field(actor.start) {
                return Err(ConfigError::ActorStartOutOfField {
                    index,
                    x: actor.start.x,
                    y: actor.start.y,
                });
            }
        }

        if !in_field(self.collectible_start) {
            return Err(ConfigError::CollectibleStartOutOfField {
                x: self.collectible_start.x,
                y: self.collectible_start.y,
            });
        }

        if !in_field(self.respawn_min)
            || !in_field(self.respawn_max)
            || self.respawn_min.x > self.respawn_max.x
            || self.respawn_min.y > self.respawn_max.y
        {
            return Err(ConfigError::BadRespawnZone);
        }

        if !(self.actor_size.is_finite() && self.actor_size > 0.0)
            || !(self.collectible_size.is_finite() && self.collectible_size > 0.0)
        {
            return Err(ConfigError::BadSpriteSize);
        }

        if self.actors[0].binding == self.actors[1].binding {
            return Err(ConfigError::DuplicateBinding);
        }

        Ok(())
    }
}
