//! Per-frame simulation step
//!
//! Advances the whole simulation by exactly one host frame-tick: sample
//! both inputs, move both actors, resolve coin pickups, emit presentation
//! events. Deterministic given the same seed and input stream.

use crate::consts::{MOVE_SPEED, SCORE_PER_HIT};

use super::collision::actor_hits_collectible;
use super::input::{SourceSample, sample};
use super::state::{ActorId, GameEvent, GameState};

/// One frame's input snapshot for both players, indexed by actor.
/// Scoped to the frame it was polled for; never cached across ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub players: [SourceSample; 2],
}

/// Advance the game state by one frame tick, returning the presentation
/// events the host should render.
///
/// Fixed order every frame: player one moves before player two, and
/// player one's pickup is resolved before player two is tested. When both
/// players touch the coin in the same frame, player one's hit relocates
/// it first and player two scores only if still overlapping the new
/// position.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    state.time_ticks += 1;
    let mut events = Vec::with_capacity(2);

    for id in ActorId::ALL {
        let intent = sample(&input.players[id.index()]);
        let bounds = state.bounds;
        let actor = &mut state.actors[id.index()];
        actor.apply_intent(intent, MOVE_SPEED, &bounds);
        events.push(GameEvent::ActorMoved {
            actor: id,
            pos: actor.pos,
        });
    }

    for id in ActorId::ALL {
        let hit = actor_hits_collectible(
            state.actor(id),
            state.actor_half,
            &state.collectible,
            state.collectible_half,
        );
        if hit {
            resolve_hit(state, id, &mut events);
        }
    }

    events
}

/// The scoring state transition: relocate the coin, award points, tell
/// the host. Nothing else changes.
fn resolve_hit(state: &mut GameState, actor: ActorId, events: &mut Vec<GameEvent>) {
    let zone = state.respawn_zone;
    let pos = state.collectible.relocate(&zone, &mut state.rng);
    state.scores.award(actor, SCORE_PER_HIT);
    let score = state.scores.read(actor);

    log::debug!("tick {}: {actor:?} scored, total {score}", state.time_ticks);

    events.push(GameEvent::ScoreChanged { actor, score });
    events.push(GameEvent::CollectibleRelocated { pos });
    events.push(GameEvent::HitFeedback { actor });
}
