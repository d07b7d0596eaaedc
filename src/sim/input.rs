//! Input sampling: per-frame device snapshots reduced to movement intent
//!
//! The host polls its devices once per tick and hands the simulation a
//! frame-scoped snapshot per actor. Sampling is a pure function of that
//! snapshot; the simulation never touches a device directly.

use serde::{Deserialize, Serialize};

/// Desired movement direction for one frame, each component in {-1, 0, +1}
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub dx: f32,
    pub dy: f32,
}

impl Intent {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };
}

/// Pressed-states of one logical keyboard key-set (e.g. WASD or arrows)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySet {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Polled snapshot of a connected gamepad: two axes plus the d-pad
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PadState {
    /// Horizontal axis in [-1, 1], positive = right
    pub axis_x: f32,
    /// Vertical axis in [-1, 1], positive = down
    pub axis_y: f32,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// One actor's input source for one frame
///
/// A pad that is absent or unplugged shows up as `Disconnected` rather
/// than as stale pad state; it contributes no movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum SourceSample {
    Keys(KeySet),
    Pad(PadState),
    #[default]
    Disconnected,
}

/// Substitute 0 for a malformed axis value, clamp the rest to [-1, 1].
/// A single frame of bad device input must not take the session down.
#[inline]
fn sanitize_axis(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Reduce one frame's source snapshot to an Intent
///
/// Opposing directions held together resolve right-over-left and
/// down-over-up. The axes are independent, so diagonal intent is normal.
pub fn sample(source: &SourceSample) -> Intent {
    match source {
        SourceSample::Keys(keys) => {
            let dx = if keys.right {
                1.0
            } else if keys.left {
                -1.0
            } else {
                0.0
            };
            let dy = if keys.down {
                1.0
            } else if keys.up {
                -1.0
            } else {
                0.0
            };
            Intent { dx, dy }
        }
        SourceSample::Pad(pad) => {
            let axis_x = sanitize_axis(pad.axis_x);
            let axis_y = sanitize_axis(pad.axis_y);
            let dx = if pad.right || axis_x > 0.0 {
                1.0
            } else if pad.left || axis_x < 0.0 {
                -1.0
            } else {
                0.0
            };
            let dy = if pad.down || axis_y > 0.0 {
                1.0
            } else if pad.up || axis_y < 0.0 {
                -1.0
            } else {
                0.0
            };
            Intent { dx, dy }
        }
        SourceSample::Disconnected => Intent::ZERO,
    }
}
