//! Point/segment projection and reflection math
//!
//! Contact normals everywhere in the simulation are "from nearest surface
//! point toward ball center": walls, flippers, and bumpers all behave as
//! rounded solids, never as oriented faces. Endpoints of segments act as
//! rounded caps implicitly, since the projection parameter is clamped.

use glam::Vec2;

/// Segments shorter than this (squared) are treated as degenerate
const MIN_SEGMENT_LEN_SQ: f32 = 1e-4;

/// Result of projecting a point onto a segment
#[derive(Debug, Clone, Copy)]
pub struct SegmentHit {
    /// Closest point on the segment
    pub point: Vec2,
    /// Projection parameter, clamped to [0, 1]
    pub t: f32,
}

/// Project a point onto a segment, clamping to the segment's extent.
///
/// Returns `None` for a degenerate (near zero-length) segment; callers treat
/// that as "no collision" rather than a fault.
pub fn project_onto_segment(point: Vec2, seg_start: Vec2, seg_end: Vec2) -> Option<SegmentHit> {
    let seg = seg_end - seg_start;
    let len_sq = seg.length_squared();
    if len_sq < MIN_SEGMENT_LEN_SQ {
        return None;
    }

    let t = ((point - seg_start).dot(seg) / len_sq).clamp(0.0, 1.0);
    Some(SegmentHit {
        point: seg_start + seg * t,
        t,
    })
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n, with `n` a unit normal.
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
