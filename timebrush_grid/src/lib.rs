// Copyright 2026 the Timebrush Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timebrush Grid: a spatial grid index for brushing timeline polylines.
//!
//! Many timelines (keyed, ordered point sequences) are rendered as
//! polylines; a user drags rectangular "timeboxes" over them to select
//! matching timelines. Re-testing every segment of every timeline on every
//! drag frame is the bottleneck this crate removes: it partitions the drawing
//! domain into a fixed grid of cells, stores each timeline's geometry as
//! per-cell runs, and answers rectangle queries by scanning only the covered
//! cells.
//!
//! - [`GridIndex::build`] ingests the timelines once per dataset or axis
//!   rescale and produces an immutable index: per-cell runs, per-timeline
//!   exact bounding boxes, and the stable key list.
//! - [`GridIndex::query`] (or [`GridIndex::intersect_rect`] /
//!   [`GridIndex::contains_rect`]) evaluates one brush rectangle per
//!   (throttled) drag frame and returns a deterministic [`MatchSet`].
//! - [`MatchSet::same_keys`] lets the interaction layer skip a redraw when a
//!   drag frame changed nothing.
//!
//! Two query modes, per [`QueryMode`]:
//! - **Intersect**: the polyline touches the rectangle — crosses its
//!   boundary or lies inside it. Decided from the indexed runs in the
//!   covered cells, short-circuiting per timeline at the first touching run.
//! - **Contains**: every point of the timeline lies within the rectangle.
//!   Decided from the precomputed bounding box alone, O(1) per timeline, no
//!   cell scan at all.
//!
//! Coordinates are pixel-space (post scale transform, y-down); projecting
//! data into that space, capturing drags, and throttling are the embedding
//! application's concerns. The exact segment/rectangle predicates live in
//! [`timebrush_geom`].
//!
//! ```rust
//! use kurbo::Rect;
//! use timebrush_grid::{GridIndex, QueryMode, Timeline};
//!
//! let lines = [
//!     Timeline::new("a", [(10.0, 10.0), (60.0, 40.0), (90.0, 20.0)]),
//!     Timeline::new("b", [(5.0, 80.0), (95.0, 85.0)]),
//! ];
//! let index = GridIndex::build(&lines, 100.0, 100.0, 10, 10)?;
//!
//! let brush = Rect::new(50.0, 0.0, 100.0, 50.0);
//! let hits = index.query(brush, QueryMode::Intersect);
//! assert!(hits.contains(&"a"));
//! assert!(!hits.contains(&"b"));
//!
//! // The whole of "a" fits in a taller box; "b" still does not.
//! let hits = index.query(Rect::new(0.0, 0.0, 100.0, 50.0), QueryMode::Contains);
//! assert_eq!(hits.keys(), &["a"]);
//! # Ok::<(), timebrush_grid::BuildError>(())
//! ```
//!
//! The index is read-only after build; changing the dataset, domain, or
//! partitioning means building a new one, so a query running elsewhere never
//! observes a partially built structure.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod grid;
mod query;
mod results;
mod types;

pub use grid::GridIndex;
pub use results::MatchSet;
pub use types::{BuildError, QueryMode, Timeline};
