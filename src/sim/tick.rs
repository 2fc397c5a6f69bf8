//! Fixed-step simulation tick
//!
//! One call per display refresh. The tick only does work in the Playing
//! phase: flipper actuation first, then ball integration, then collision
//! resolution in a fixed order (outer bounds, guide walls, flippers,
//! bumpers), then the drain check.

use glam::Vec2;

use super::collision;
use super::flipper::FlipperSide;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Advance the simulation by one fixed step
pub fn tick(state: &mut GameState) {
    state.events.clear();

    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    state.left_flipper.advance();
    state.right_flipper.advance();

    if state.ball.stuck {
        // Pinned to the launch lane, no physics until launched
        state.ball.pos = Vec2::new(LAUNCH_X, LAUNCH_Y);
        return;
    }

    // Integrate: gravity, position, then uniform damping
    state.ball.vel.y += GRAVITY;
    state.ball.pos += state.ball.vel;
    state.ball.vel *= DAMPING;

    collision::collide_bounds(&mut state.ball);
    collision::collide_wall(&mut state.ball, &state.left_wall);
    collision::collide_wall(&mut state.ball, &state.right_wall);

    if collision::collide_flipper(&mut state.ball, &state.left_flipper) {
        state.events.push(GameEvent::FlipperHit {
            side: FlipperSide::Left,
        });
    }
    if collision::collide_flipper(&mut state.ball, &state.right_flipper) {
        state.events.push(GameEvent::FlipperHit {
            side: FlipperSide::Right,
        });
    }

    for bumper in &state.bumpers {
        if collision::collide_bumper(&mut state.ball, bumper) {
            state.score += bumper.score;
            state.events.push(GameEvent::BumperHit {
                score: bumper.score,
            });
        }
    }

    // Drain: past the bottom edge the ball is lost
    if state.ball.pos.y > TABLE_HEIGHT + DRAIN_MARGIN {
        state.lives = state.lives.saturating_sub(1);
        state.events.push(GameEvent::BallLost {
            lives_remaining: state.lives,
        });
        if state.lives > 0 {
            log::info!("Ball drained, {} remaining", state.lives);
            state.reset_ball();
        } else {
            log::info!("Game over, final score {}", state.score);
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::GameOver);
        }
    }
}
