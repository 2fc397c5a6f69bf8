//! Game state and core simulation types
//!
//! The whole table is one `GameState`, owned by whoever drives the tick loop
//! and serializable as a snapshot. Determinism: identical seeds plus
//! identical input sequences replay identically, because the launch RNG is
//! part of the state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::flipper::{Flipper, FlipperSide};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Attract screen, waiting for a start action
    Menu,
    /// Active gameplay
    Playing,
    /// Lives exhausted; a restart re-enters Playing
    GameOver,
}

/// The ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Resting in the launch lane: immune to gravity and collisions until
    /// launched
    pub stuck: bool,
}

impl Ball {
    fn at_launch() -> Self {
        Self {
            pos: Vec2::new(LAUNCH_X, LAUNCH_Y),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            stuck: true,
        }
    }
}

/// A scoring bumper, immutable after construction
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bumper {
    pub center: Vec2,
    pub radius: f32,
    pub score: u64,
}

/// One side's guide wall: an open polyline from the bottom of the table up
/// and over toward the top center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    pub points: Vec<Vec2>,
}

impl Wall {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Derive the opposite side's wall by reflecting x about the table's
    /// vertical center
    pub fn mirrored(&self, table_width: f32) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| Vec2::new(table_width - p.x, p.y))
                .collect(),
        }
    }

    /// Consecutive vertex pairs
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Events emitted during a tick, for rendering/audio collaborators
///
/// Cleared at the start of every tick; consumers read them after `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BumperHit { score: u64 },
    FlipperHit { side: FlipperSide },
    BallLost { lives_remaining: u8 },
    GameOver,
}

/// Complete table state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    /// Launch RNG, advanced only by `launch_ball`
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Score (never decreases)
    pub score: u64,
    /// Remaining balls (never increases during a game)
    pub lives: u8,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ball: Ball,
    pub left_flipper: Flipper,
    pub right_flipper: Flipper,
    pub bumpers: Vec<Bumper>,
    pub left_wall: Wall,
    pub right_wall: Wall,
    /// Events from the most recent tick (not part of the snapshot)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build the fixed table with the given launch seed, in the Menu phase
    pub fn new(seed: u64) -> Self {
        let left_wall = Wall::new(vec![
            Vec2::new(WALL_PADDING, TABLE_HEIGHT - 80.0),
            Vec2::new(60.0, 500.0),
            Vec2::new(60.0, 100.0),
            Vec2::new(TABLE_WIDTH / 2.0 - 40.0, 40.0),
            Vec2::new(TABLE_WIDTH / 2.0, 20.0),
        ]);
        let right_wall = left_wall.mirrored(TABLE_WIDTH);

        let bumpers = vec![
            Bumper {
                center: Vec2::new(TABLE_WIDTH / 2.0, 200.0),
                radius: 27.0,
                score: 150,
            },
            Bumper {
                center: Vec2::new(130.0, 300.0),
                radius: 22.0,
                score: 100,
            },
            Bumper {
                center: Vec2::new(TABLE_WIDTH - 130.0, 300.0),
                radius: 22.0,
                score: 100,
            },
            Bumper {
                center: Vec2::new(200.0, 400.0),
                radius: 18.0,
                score: 50,
            },
        ];

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            score: 0,
            lives: STARTING_LIVES,
            time_ticks: 0,
            ball: Ball::at_launch(),
            left_flipper: Flipper::new(FlipperSide::Left),
            right_flipper: Flipper::new(FlipperSide::Right),
            bumpers,
            left_wall,
            right_wall,
            events: Vec::new(),
        }
    }

    /// Start (or restart) a game
    ///
    /// Valid from Menu and GameOver; a silent no-op mid-game.
    pub fn start_game(&mut self) {
        match self.phase {
            GamePhase::Menu | GamePhase::GameOver => {
                self.score = 0;
                self.lives = STARTING_LIVES;
                self.phase = GamePhase::Playing;
                self.reset_ball();
                log::info!("Game started (seed {})", self.seed);
            }
            GamePhase::Playing => {}
        }
    }

    /// Return the ball to the launch lane, stuck and at rest
    pub fn reset_ball(&mut self) {
        self.ball = Ball::at_launch();
    }

    /// Launch a stuck ball with a randomized plunger stroke
    ///
    /// No-op unless Playing with a stuck ball, so repeated launch input
    /// while the ball is in play changes nothing.
    pub fn launch_ball(&mut self) {
        if self.phase != GamePhase::Playing || !self.ball.stuck {
            return;
        }
        self.ball.stuck = false;
        self.ball.vel = Vec2::new(
            self.rng.random_range(-LAUNCH_VX_MAX..=LAUNCH_VX_MAX),
            self.rng.random_range(LAUNCH_VY_MIN..=LAUNCH_VY_MAX),
        );
        log::debug!("Ball launched with velocity {:?}", self.ball.vel);
    }

    /// Set a flipper's control flag (Playing only)
    pub fn set_flipper_pressed(&mut self, side: FlipperSide, pressed: bool) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.flipper_mut(side).pressed = pressed;
    }

    pub fn flipper(&self, side: FlipperSide) -> &Flipper {
        match side {
            FlipperSide::Left => &self.left_flipper,
            FlipperSide::Right => &self.right_flipper,
        }
    }

    pub fn flipper_mut(&mut self, side: FlipperSide) -> &mut Flipper {
        match side {
            FlipperSide::Left => &mut self.left_flipper,
            FlipperSide::Right => &mut self.right_flipper,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_menu_with_full_table() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert!(state.ball.stuck);
        assert_eq!(state.bumpers.len(), 4);
        assert_eq!(state.left_wall.points.len(), 5);
        assert_eq!(state.right_wall.points.len(), 5);
    }

    #[test]
    fn test_right_wall_mirrors_left() {
        let state = GameState::new(7);
        for (l, r) in state
            .left_wall
            .points
            .iter()
            .zip(state.right_wall.points.iter())
        {
            assert!((r.x - (TABLE_WIDTH - l.x)).abs() < 1e-6);
            assert!((r.y - l.y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_start_game_transitions() {
        let mut state = GameState::new(7);
        state.start_game();
        assert_eq!(state.phase, GamePhase::Playing);

        // Mid-game start is a no-op
        state.score = 500;
        state.start_game();
        assert_eq!(state.score, 500);
        assert_eq!(state.phase, GamePhase::Playing);

        // Restart from game over resets the run
        state.phase = GamePhase::GameOver;
        state.lives = 0;
        state.start_game();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert!(state.ball.stuck);
    }

    #[test]
    fn test_launch_requires_playing_and_stuck() {
        let mut state = GameState::new(42);

        // Menu: no-op
        state.launch_ball();
        assert!(state.ball.stuck);

        state.start_game();
        state.launch_ball();
        assert!(!state.ball.stuck);
        assert!(state.ball.vel.x >= -LAUNCH_VX_MAX && state.ball.vel.x <= LAUNCH_VX_MAX);
        assert!(state.ball.vel.y >= LAUNCH_VY_MIN && state.ball.vel.y <= LAUNCH_VY_MAX);

        // Free ball: launch is idempotent
        let pos = state.ball.pos;
        let vel = state.ball.vel;
        state.launch_ball();
        assert_eq!(state.ball.pos, pos);
        assert_eq!(state.ball.vel, vel);
    }

    #[test]
    fn test_launch_is_seed_deterministic() {
        let mut a = GameState::new(123);
        let mut b = GameState::new(123);
        a.start_game();
        b.start_game();
        a.launch_ball();
        b.launch_ball();
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_flipper_press_gated_by_phase() {
        let mut state = GameState::new(7);
        state.set_flipper_pressed(FlipperSide::Left, true);
        assert!(!state.left_flipper.pressed);

        state.start_game();
        state.set_flipper_pressed(FlipperSide::Left, true);
        assert!(state.left_flipper.pressed);
        state.set_flipper_pressed(FlipperSide::Left, false);
        assert!(!state.left_flipper.pressed);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut state = GameState::new(99);
        state.start_game();
        state.launch_ball();

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.phase, state.phase);
        assert_eq!(restored.ball.pos, state.ball.pos);
        assert_eq!(restored.ball.vel, state.ball.vel);
        assert_eq!(restored.score, state.score);
    }
}
