// Copyright 2026 the Timebrush Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brush queries against a built index.

use alloc::vec;
use core::hash::Hash;
use core::ops::RangeInclusive;

use kurbo::Rect;
use timebrush_geom::{point_in_rect, rect_contains_rect, segment_hits_rect};

use crate::grid::{GridIndex, Run, cell_coord};
use crate::results::MatchSet;
use crate::types::QueryMode;

impl Run {
    /// Does any part of this run touch `rect`?
    ///
    /// Multi-point runs test every consecutive pair; a single-point run
    /// (a timeline with one sample, or one restarted after a gap) falls back
    /// to point containment since it has no edges to cross.
    fn hits(&self, rect: Rect) -> bool {
        match self.points.as_slice() {
            [] => false,
            [p] => point_in_rect(*p, rect),
            points => points
                .windows(2)
                .any(|pair| segment_hits_rect(pair[0], pair[1], rect)),
        }
    }
}

impl<K: Clone + Eq + Hash> GridIndex<K> {
    /// Evaluates a brush rectangle in the given mode.
    ///
    /// The rectangle need not be normalized (a drag can invert it); it is
    /// normalized here. Queries are pure reads of the immutable index: the
    /// same rectangle and mode always produce the same key set, and nothing
    /// is cached between calls.
    #[must_use]
    pub fn query(&self, rect: Rect, mode: QueryMode) -> MatchSet<K> {
        match mode {
            QueryMode::Intersect => self.intersect_rect(rect),
            QueryMode::Contains => self.contains_rect(rect),
        }
    }

    /// All timelines whose polyline touches `rect`: crossing its boundary or
    /// lying inside it.
    ///
    /// Scans only the cells the rectangle covers. Each timeline is decided
    /// at its first touching run and skipped thereafter; timelines never
    /// encountered in a covered cell are absent from the result.
    #[must_use]
    pub fn intersect_rect(&self, rect: Rect) -> MatchSet<K> {
        let rect = rect.abs();
        let Some((cols, rows)) = self.covered_cells(rect) else {
            return MatchSet::new();
        };
        let mut matched = vec![false; self.keys.len()];
        for j in rows {
            for i in cols.clone() {
                let cell = &self.cells[self.cell_index(i, j)];
                for (&slot, runs) in &cell.runs {
                    if matched[slot] {
                        continue;
                    }
                    if runs.iter().any(|run| run.hits(rect)) {
                        matched[slot] = true;
                    }
                }
            }
        }
        self.collect(&matched)
    }

    /// All timelines whose entire point set lies within `rect`.
    ///
    /// Pure bounding-box test per timeline, no cell traversal: the
    /// precomputed bbox inside the rectangle is both necessary (a bbox edge
    /// outside means some point is outside) and sufficient (every point lies
    /// within its bbox). Timelines with no finite points never match.
    #[must_use]
    pub fn contains_rect(&self, rect: Rect) -> MatchSet<K> {
        let rect = rect.abs();
        let mut matched = vec![false; self.keys.len()];
        for (slot, bounds) in self.bounds.iter().enumerate() {
            if let Some(b) = bounds
                && rect_contains_rect(rect, *b)
            {
                matched[slot] = true;
            }
        }
        self.collect(&matched)
    }

    /// The inclusive cell index ranges covered by a normalized rectangle, or
    /// `None` when the rectangle lies entirely outside the domain.
    ///
    /// Floor division with index clamping; a rectangle edge exactly on the
    /// domain's outer boundary resolves to the last column/row instead of
    /// addressing one past it.
    fn covered_cells(
        &self,
        rect: Rect,
    ) -> Option<(RangeInclusive<usize>, RangeInclusive<usize>)> {
        if rect.x1 < 0.0 || rect.y1 < 0.0 || rect.x0 > self.width || rect.y0 > self.height {
            return None;
        }
        let i0 = cell_coord(rect.x0, self.cell_width, self.x_partitions);
        let i1 = cell_coord(rect.x1, self.cell_width, self.x_partitions);
        let j0 = cell_coord(rect.y0, self.cell_height, self.y_partitions);
        let j1 = cell_coord(rect.y1, self.cell_height, self.y_partitions);
        Some((i0..=i1, j0..=j1))
    }

    fn collect(&self, matched: &[bool]) -> MatchSet<K> {
        MatchSet::from_keys(
            self.keys
                .iter()
                .zip(matched)
                .filter(|&(_, &hit)| hit)
                .map(|(key, _)| key.clone())
                .collect(),
        )
    }
}
