//! Flippers: side-parameterized geometry and easing actuation
//!
//! A flipper is a rotated line segment, not a torque body. Each tick its
//! angle eases a fixed fraction of the remaining delta toward the target
//! (active angle while pressed, rest angle otherwise), so it approaches
//! monotonically and never overshoots either bound.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which side of the table a flipper sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipperSide {
    Left,
    Right,
}

/// Per-side flipper parameters, fixed at construction
///
/// Left and right flippers share all behavior; only this record differs
/// between them (mirrored pivot, angles, and kick sign).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlipperConfig {
    pub side: FlipperSide,
    /// Rotation pivot (segment midpoint)
    pub pivot: Vec2,
    /// Angle while the control is released (radians)
    pub rest_angle: f32,
    /// Angle target while the control is held
    pub active_angle: f32,
    /// Sign of the kick impulse along the contact normal (+1 left, -1 right)
    pub kick_dir: f32,
}

impl FlipperConfig {
    pub fn for_side(side: FlipperSide) -> Self {
        match side {
            FlipperSide::Left => Self {
                side,
                pivot: Vec2::new(FLIPPER_PIVOT_X_LEFT, FLIPPER_PIVOT_Y),
                rest_angle: FLIPPER_REST_LEFT,
                active_angle: FLIPPER_ACTIVE_LEFT,
                kick_dir: 1.0,
            },
            FlipperSide::Right => Self {
                side,
                pivot: Vec2::new(FLIPPER_PIVOT_X_RIGHT, FLIPPER_PIVOT_Y),
                rest_angle: FLIPPER_REST_RIGHT,
                active_angle: FLIPPER_ACTIVE_RIGHT,
                kick_dir: -1.0,
            },
        }
    }
}

/// An actuated flipper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flipper {
    pub config: FlipperConfig,
    /// Current angle (radians)
    pub angle: f32,
    /// Control state, written by the input collaborator
    pub pressed: bool,
}

impl Flipper {
    pub fn new(side: FlipperSide) -> Self {
        let config = FlipperConfig::for_side(side);
        Self {
            angle: config.rest_angle,
            pressed: false,
            config,
        }
    }

    /// Target angle for the current control state
    #[inline]
    pub fn target_angle(&self) -> f32 {
        if self.pressed {
            self.config.active_angle
        } else {
            self.config.rest_angle
        }
    }

    /// Ease the angle toward the target by one tick
    ///
    /// Deltas below `FLIPPER_SETTLE` are left alone, preventing perpetual
    /// micro-oscillation around the target.
    pub fn advance(&mut self) {
        let target = self.target_angle();
        if (self.angle - target).abs() > FLIPPER_SETTLE {
            self.angle += (target - self.angle) * FLIPPER_EASING;
        }
    }

    /// Segment endpoints at the current angle
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        let half = Vec2::new(self.angle.cos(), self.angle.sin()) * (FLIPPER_LENGTH / 2.0);
        (self.config.pivot - half, self.config.pivot + half)
    }

    /// Kick speed imparted along the contact normal
    ///
    /// Unpressed flippers reflect passively and add no energy.
    #[inline]
    pub fn kick_velocity(&self) -> f32 {
        if self.pressed {
            self.config.kick_dir * FLIPPER_KICK
        } else {
            0.0
        }
    }

    /// Lower/upper angle bounds for this side
    pub fn angle_bounds(&self) -> (f32, f32) {
        let (rest, active) = (self.config.rest_angle, self.config.active_angle);
        (rest.min(active), rest.max(active))
    }
}
