// Copyright 2026 the Timebrush Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timebrush Geom: exact axis-aligned brush predicates.
//!
//! Stateless geometric tests shared by the Timebrush grid index and its query
//! engine. They answer three questions about a polyline segment and an
//! axis-aligned rectangle, in screen space (y grows downward):
//!
//! - Does the segment cross the rectangle's boundary?
//!   ([`segment_crosses_rect`])
//! - Does the segment touch the rectangle at all, boundary or interior?
//!   ([`segment_hits_rect`])
//! - Is a point, or a whole box, inside the rectangle?
//!   ([`point_in_rect`], [`rect_contains_rect`])
//!
//! All bounds are inclusive. Kurbo's own [`Rect::contains`](kurbo::Rect::contains)
//! is half-open, which is the right call for pixel coverage but the wrong one
//! for brush selection, where a polyline grazing the brush edge must count as
//! selected; hence the dedicated predicates here.
//!
//! Vertical and horizontal segments are handled by explicit casework rather
//! than a slope computation, so degenerate deltas never produce NaN or
//! infinity. Zero-length segments (duplicate consecutive points) degrade to
//! point-on-edge tests.
//!
//! This crate is `no_std`.

#![no_std]

mod rect;
mod segment;

pub use rect::{point_in_rect, rect_contains_rect};
pub use segment::{segment_crosses_rect, segment_hits_rect};
