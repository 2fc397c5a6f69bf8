//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick constants only (no wall-clock time)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod flipper;
pub mod geometry;
pub mod state;
pub mod tick;

pub use flipper::{Flipper, FlipperConfig, FlipperSide};
pub use geometry::{SegmentHit, project_onto_segment, reflect};
pub use state::{Ball, Bumper, GameEvent, GamePhase, GameState, Wall};
pub use tick::tick;
