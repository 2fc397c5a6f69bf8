//! Glade Pinball headless driver
//!
//! Runs the simulation without a renderer: launches the ball, flaps the
//! flippers on a fixed cadence, and logs scoring events. Useful for
//! exercising the physics core and for replaying a seed deterministically.
//!
//! Usage: `glade-pinball [seed] [ticks]`

use glade_pinball::sim::{FlipperSide, GameEvent, GamePhase, GameState, tick};

/// Default run length (one minute at 60 ticks per second)
const DEFAULT_TICKS: u64 = 3600;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random);
    let max_ticks: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TICKS);

    log::info!("Glade Pinball starting with seed {seed}");

    let mut state = GameState::new(seed);
    state.start_game();
    state.launch_ball();

    for i in 0..max_ticks {
        // Scripted input: hold both flippers briefly every second and a half
        let pressed = i % 90 < 25;
        state.set_flipper_pressed(FlipperSide::Left, pressed);
        state.set_flipper_pressed(FlipperSide::Right, pressed);

        tick(&mut state);

        for event in &state.events {
            match event {
                GameEvent::BumperHit { score } => {
                    log::info!("tick {i}: bumper +{score} (total {})", state.score);
                }
                GameEvent::FlipperHit { side } => {
                    log::debug!("tick {i}: flipper hit ({side:?})");
                }
                GameEvent::BallLost { lives_remaining } => {
                    log::info!("tick {i}: ball lost, {lives_remaining} remaining");
                }
                GameEvent::GameOver => {
                    log::info!("tick {i}: game over");
                }
            }
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
        if state.ball.stuck {
            state.launch_ball();
        }
    }

    println!(
        "seed {seed}: score {} after {} ticks, {} lives left",
        state.score, state.time_ticks, state.lives
    );
}
