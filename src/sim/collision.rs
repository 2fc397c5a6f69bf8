//! Collision detection and response
//!
//! One resolver per obstacle category, called in a fixed order each tick:
//! outer bounds, guide walls, flippers, bumpers. Each resolver mutates the
//! ball's velocity and position and always leaves the ball strictly clear of
//! the surface it hit, so a resolved contact cannot re-trigger on the next
//! tick from residual penetration alone.
//!
//! Contacts are resolved independently and sequentially; a ball touching two
//! obstacles in one tick receives both corrections. There is no contact
//! manifold solving at this scale.

use super::flipper::Flipper;
use super::geometry::{project_onto_segment, reflect};
use super::state::{Ball, Bumper, Wall};
use crate::consts::*;

/// Distances below this cannot produce a well-defined normal; treated as
/// "no collision" per the degenerate-geometry policy
const MIN_CONTACT_DIST: f32 = 1e-4;

/// Bounce the ball off the rectangular outer bounds (left, right, top).
///
/// The bottom edge is deliberately open: falling past it is the drain/life
/// loss path, handled by the tick.
pub fn collide_bounds(ball: &mut Ball) -> bool {
    let mut hit = false;

    if ball.pos.x - ball.radius < WALL_PADDING {
        ball.pos.x = WALL_PADDING + ball.radius;
        ball.vel.x = -ball.vel.x * BOUNDS_RESTITUTION;
        hit = true;
    }
    if ball.pos.x + ball.radius > TABLE_WIDTH - WALL_PADDING {
        ball.pos.x = TABLE_WIDTH - WALL_PADDING - ball.radius;
        ball.vel.x = -ball.vel.x * BOUNDS_RESTITUTION;
        hit = true;
    }
    if ball.pos.y - ball.radius < WALL_PADDING {
        ball.pos.y = WALL_PADDING + ball.radius;
        ball.vel.y = -ball.vel.y * BOUNDS_RESTITUTION;
        hit = true;
    }

    hit
}

/// Bounce the ball off a polyline guide wall.
///
/// Every segment is tested; segments are well separated on this table, so
/// when more than one matches in a tick the last correction simply wins.
pub fn collide_wall(ball: &mut Ball, wall: &Wall) -> bool {
    let mut hit = false;

    for (a, b) in wall.segments() {
        let Some(contact) = project_onto_segment(ball.pos, a, b) else {
            continue;
        };
        let offset = ball.pos - contact.point;
        let dist = offset.length();
        if dist < MIN_CONTACT_DIST || dist >= ball.radius + WALL_SKIN {
            continue;
        }

        let normal = offset / dist;
        ball.vel = reflect(ball.vel, normal) * WALL_RESTITUTION;
        ball.pos = contact.point + normal * (ball.radius + WALL_SKIN);
        hit = true;
    }

    hit
}

/// Bounce the ball off a flipper segment.
///
/// The flipper is a thick segment: contact when the ball center is within
/// `ball.radius + FLIPPER_THICKNESS / 2` of the segment. A pressed flipper
/// adds its kick impulse along the contact normal; an unpressed one only
/// reflects.
pub fn collide_flipper(ball: &mut Ball, flipper: &Flipper) -> bool {
    let (a, b) = flipper.endpoints();
    let Some(contact) = project_onto_segment(ball.pos, a, b) else {
        return false;
    };

    let offset = ball.pos - contact.point;
    let dist = offset.length();
    let reach = ball.radius + FLIPPER_THICKNESS / 2.0;
    if dist < MIN_CONTACT_DIST || dist >= reach {
        return false;
    }

    let normal = offset / dist;
    ball.vel = reflect(ball.vel, normal);
    ball.vel += normal * flipper.kick_velocity();
    ball.pos = contact.point + normal * (reach + 1.0);

    true
}

/// Bounce the ball off a bumper, amplifying its speed.
///
/// Bumpers are active elements: the reflected velocity is scaled up by
/// `BUMPER_BOOST`. The caller is responsible for awarding `bumper.score`.
pub fn collide_bumper(ball: &mut Ball, bumper: &Bumper) -> bool {
    let offset = ball.pos - bumper.center;
    let dist = offset.length();
    if dist < MIN_CONTACT_DIST || dist >= bumper.radius + ball.radius {
        return false;
    }

    let normal = offset / dist;
    ball.vel = reflect(ball.vel, normal) * BUMPER_BOOST;
    ball.pos = bumper.center + normal * (bumper.radius + ball.radius + 1.0);

    true
}
