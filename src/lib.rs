//! Glade Pinball - a forest-themed single-ball pinball table
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//!
//! Rendering, input-device binding, and frame scheduling are external
//! collaborators: they read table state through `&GameState` once per frame
//! and drive the core through `start_game` / `launch_ball` /
//! `set_flipper_pressed` / `tick`.
//!
//! Coordinates are screen-style: x grows rightward, y grows downward, so
//! gravity is a positive y acceleration and "up" is negative vy.

pub mod sim;

pub use sim::{Ball, Bumper, Flipper, FlipperSide, GameEvent, GamePhase, GameState, Wall, tick};

/// Game configuration constants
///
/// All units are pixels and pixels-per-tick; the simulation advances in
/// fixed ticks, one per display refresh.
pub mod consts {
    use std::f32::consts::PI;

    /// Table dimensions
    pub const TABLE_WIDTH: f32 = 400.0;
    pub const TABLE_HEIGHT: f32 = 700.0;
    /// Inset of the rectangular outer bounds from the table edge
    pub const WALL_PADDING: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 11.0;
    /// Launch-lane rest position (right side, above the plunger)
    pub const LAUNCH_X: f32 = TABLE_WIDTH - 50.0;
    pub const LAUNCH_Y: f32 = TABLE_HEIGHT - 110.0;
    /// Launch velocity ranges (horizontal symmetric, vertical upward)
    pub const LAUNCH_VX_MAX: f32 = 2.5;
    pub const LAUNCH_VY_MIN: f32 = -12.0;
    pub const LAUNCH_VY_MAX: f32 = -10.0;

    /// Gravity (added to vy every tick)
    pub const GRAVITY: f32 = 0.22;
    /// Uniform velocity damping per tick (air/rolling resistance)
    pub const DAMPING: f32 = 0.995;

    /// Restitution for the rectangular outer bounds
    pub const BOUNDS_RESTITUTION: f32 = 0.92;
    /// Restitution for the polygonal guide walls (applied to both axes)
    pub const WALL_RESTITUTION: f32 = 0.95;
    /// Contact skin around wall segments (detection and separation)
    pub const WALL_SKIN: f32 = 2.0;

    /// Flipper geometry
    pub const FLIPPER_LENGTH: f32 = 90.0;
    pub const FLIPPER_THICKNESS: f32 = 22.0;
    /// Flipper pivots, mirrored about the table center
    pub const FLIPPER_PIVOT_Y: f32 = TABLE_HEIGHT - 90.0;
    pub const FLIPPER_PIVOT_X_LEFT: f32 = 110.0;
    pub const FLIPPER_PIVOT_X_RIGHT: f32 = TABLE_WIDTH - 110.0;
    /// Rest/active angles (left rotates up-right when pressed, right mirrors)
    pub const FLIPPER_REST_LEFT: f32 = PI / 6.0;
    pub const FLIPPER_ACTIVE_LEFT: f32 = -PI / 4.0;
    pub const FLIPPER_REST_RIGHT: f32 = PI - PI / 6.0;
    pub const FLIPPER_ACTIVE_RIGHT: f32 = PI + PI / 4.0;
    /// Fraction of the remaining angle delta covered per tick
    pub const FLIPPER_EASING: f32 = 0.22;
    /// Angle delta below which a flipper is considered settled (radians)
    pub const FLIPPER_SETTLE: f32 = 0.01;
    /// Extra velocity imparted along the contact normal by a pressed flipper
    pub const FLIPPER_KICK: f32 = 6.0;

    /// Velocity amplification on bumper contact (bumpers add energy)
    pub const BUMPER_BOOST: f32 = 1.15;

    /// How far below the table bottom the ball must fall to drain
    pub const DRAIN_MARGIN: f32 = 30.0;
    /// Lives at the start of a game
    pub const STARTING_LIVES: u8 = 3;
}
