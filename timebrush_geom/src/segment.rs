// Copyright 2026 the Timebrush Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment-versus-rectangle crossing tests.

use kurbo::{Point, Rect};

use crate::rect::point_in_rect;

/// Inclusive overlap test for two 1-D spans, each given in any order.
#[inline]
fn spans_overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> bool {
    a0.min(a1) <= b1.max(b0) && b0.min(b1) <= a1.max(a0)
}

/// Does the segment `p0 -> p1` cross the vertical edge at `x = edge_x`,
/// within the edge's span `[y0, y1]`?
///
/// A segment parallel to the edge counts only when it lies exactly on the
/// edge line and the y-spans overlap; the slope is never computed in that
/// case, so a zero x-delta cannot poison the result.
fn crosses_vertical_edge(p0: Point, p1: Point, edge_x: f64, y0: f64, y1: f64) -> bool {
    if edge_x < p0.x.min(p1.x) || p0.x.max(p1.x) < edge_x {
        return false;
    }
    if p0.x == p1.x {
        // On the edge line (the straddle test above already pinned x).
        return spans_overlap(p0.y, p1.y, y0, y1);
    }
    let t = (edge_x - p0.x) / (p1.x - p0.x);
    let y = p0.y + t * (p1.y - p0.y);
    y0 <= y && y <= y1
}

/// Does the segment `p0 -> p1` cross the horizontal edge at `y = edge_y`,
/// within the edge's span `[x0, x1]`?
fn crosses_horizontal_edge(p0: Point, p1: Point, edge_y: f64, x0: f64, x1: f64) -> bool {
    if edge_y < p0.y.min(p1.y) || p0.y.max(p1.y) < edge_y {
        return false;
    }
    if p0.y == p1.y {
        return spans_overlap(p0.x, p1.x, x0, x1);
    }
    let t = (edge_y - p0.y) / (p1.y - p0.y);
    let x = p0.x + t * (p1.x - p0.x);
    x0 <= x && x <= x1
}

/// Returns `true` if the segment `p0 -> p1` crosses (or touches) any of the
/// four boundary edges of `rect`, within that edge's extent.
///
/// `rect` must be normalized. A segment lying entirely in the rectangle's
/// interior does not cross; see [`segment_hits_rect`] for the
/// boundary-or-interior variant. Zero-length segments degrade to a
/// point-on-boundary test.
#[must_use]
pub fn segment_crosses_rect(p0: Point, p1: Point, rect: Rect) -> bool {
    crosses_vertical_edge(p0, p1, rect.x0, rect.y0, rect.y1)
        || crosses_vertical_edge(p0, p1, rect.x1, rect.y0, rect.y1)
        || crosses_horizontal_edge(p0, p1, rect.y0, rect.x0, rect.x1)
        || crosses_horizontal_edge(p0, p1, rect.y1, rect.x0, rect.x1)
}

/// Returns `true` if the segment `p0 -> p1` touches `rect` at all: crossing
/// its boundary or lying wholly inside it.
///
/// This is the per-segment predicate for brush intersection. A segment with
/// both endpoints strictly inside crosses no edge, so the endpoint check is
/// what keeps fully-enclosed polylines selectable. Only one endpoint needs
/// testing besides the crossing test: if `p1` is inside but `p0` is not, the
/// segment necessarily crosses the boundary on the way in.
#[must_use]
pub fn segment_hits_rect(p0: Point, p1: Point, rect: Rect) -> bool {
    point_in_rect(p0, rect) || segment_crosses_rect(p0, p1, rect)
}
