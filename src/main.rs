//! Coin Clash headless demo host
//!
//! Drives the simulation library the way a rendering host would: one tick
//! per frame with a fresh input snapshot, consuming the emitted events.
//! Player one is scripted to chase the coin; player two's pad stays
//! disconnected.

use coin_clash::config::SessionConfig;
use coin_clash::sim::{ActorId, GameEvent, GameState, KeySet, SourceSample, TickInput, tick};

/// Steer toward a target by pressing the keys a human would
fn chase(from: glam::Vec2, to: glam::Vec2) -> SourceSample {
    SourceSample::Keys(KeySet {
        up: to.y < from.y - 1.0,
        down: to.y > from.y + 1.0,
        left: to.x < from.x - 1.0,
        right: to.x > from.x + 1.0,
    })
}

fn main() {
    env_logger::init();

    let config = SessionConfig::default();
    let mut state = match GameState::new(&config, 0xC01C_1A54) {
        Ok(state) => state,
        Err(err) => {
            log::error!("bad session config: {err}");
            std::process::exit(1);
        }
    };

    log::info!("running 600 demo frames");

    for _ in 0..600 {
        let input = TickInput {
            players: [
                chase(state.actor(ActorId::P1).pos, state.collectible.pos),
                SourceSample::Disconnected,
            ],
        };

        for event in tick(&mut state, &input) {
            match event {
                GameEvent::ScoreChanged { actor, score } => {
                    log::info!("tick {}: {actor:?} score {score}", state.time_ticks);
                }
                GameEvent::CollectibleRelocated { pos } => {
                    log::info!("coin relocated to {pos}");
                }
                // A renderer would redraw/pulse sprites here
                GameEvent::ActorMoved { .. } | GameEvent::HitFeedback { .. } => {}
            }
        }
    }

    let scores = serde_json::json!({
        "p1": state.scores.read(ActorId::P1),
        "p2": state.scores.read(ActorId::P2),
    });
    println!("{scores}");
}
