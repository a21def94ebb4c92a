// Copyright 2026 the Timebrush Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inclusive point-in-rect and rect-in-rect containment.

use kurbo::{Point, Rect};

/// Returns `true` if `p` lies inside `rect`, boundary included.
///
/// `rect` must be normalized (`x0 <= x1`, `y0 <= y1`); callers holding a
/// possibly-inverted rectangle should pass `rect.abs()`.
#[inline]
#[must_use]
pub fn point_in_rect(p: Point, rect: Rect) -> bool {
    rect.x0 <= p.x && p.x <= rect.x1 && rect.y0 <= p.y && p.y <= rect.y1
}

/// Returns `true` if `outer` contains all of `inner`, boundaries included.
///
/// Both rectangles must be normalized. An `inner` edge coinciding with an
/// `outer` edge still counts as contained.
#[inline]
#[must_use]
pub fn rect_contains_rect(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && inner.x1 <= outer.x1 && outer.y0 <= inner.y0 && inner.y1 <= outer.y1
}
