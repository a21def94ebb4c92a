// Copyright 2026 the Timebrush Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid index: cell storage and the build walk.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;
use timebrush_geom::segment_crosses_rect;

use crate::types::{BuildError, Timeline};

/// A contiguous point chain stored in one cell for one timeline.
///
/// Either a maximal in-cell sub-chain of the original sequence (closed with
/// the first point that left the cell, so the boundary segment keeps its
/// exact geometry), or a 2-point clipped representative of a segment that
/// merely crosses the cell.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Run {
    pub(crate) points: SmallVec<[Point; 4]>,
}

impl Run {
    fn single(p: Point) -> Self {
        let mut points = SmallVec::new();
        points.push(p);
        Self { points }
    }

    fn pair(a: Point, b: Point) -> Self {
        let mut points = SmallVec::new();
        points.push(a);
        points.push(b);
        Self { points }
    }
}

/// One grid cell: interned key slot to the runs of that timeline here.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Cell {
    pub(crate) runs: HashMap<usize, Vec<Run>>,
}

/// An immutable spatial partition of keyed polylines for fast rectangular
/// brush queries.
///
/// Built once per dataset (or axis rescale) with [`GridIndex::build`];
/// queried on every brush frame with [`GridIndex::query`],
/// [`intersect_rect`](GridIndex::intersect_rect), or
/// [`contains_rect`](GridIndex::contains_rect). The index never mutates
/// after build; a new dataset or partitioning means building a new index, so
/// concurrent readers never observe a partially built structure. Queries
/// take `&self` and keep no state, so they may run in parallel freely.
pub struct GridIndex<K> {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) x_partitions: usize,
    pub(crate) y_partitions: usize,
    pub(crate) cell_width: f64,
    pub(crate) cell_height: f64,
    /// Flat row-major cell storage, index `j * x_partitions + i`.
    pub(crate) cells: Vec<Cell>,
    /// All timeline keys, in first-encounter order. Slot = position here.
    pub(crate) keys: Vec<K>,
    /// Per-slot exact bounding box over all finite points; `None` when a
    /// timeline had no finite point (such a key never matches).
    pub(crate) bounds: Vec<Option<Rect>>,
    slots: HashMap<K, usize>,
}

impl<K: Clone + Eq + Hash> GridIndex<K> {
    /// Builds an index over `timelines` for the domain
    /// `[0, width] x [0, height]`, split into `x_partitions * y_partitions`
    /// cells.
    ///
    /// Points are expected to lie within the domain; stray coordinates are
    /// clamped into the edge cells rather than rejected, which also absorbs
    /// floating-point error for points exactly on the outer boundary.
    /// Partition counts trade build cost for query cost: more cells mean
    /// more clipped-run insertions up front and fewer candidate runs per
    /// query cell.
    ///
    /// # Errors
    ///
    /// [`BuildError::InvalidDomain`] for a non-finite or non-positive
    /// domain, [`BuildError::InvalidPartitions`] for a zero partition count.
    pub fn build(
        timelines: &[Timeline<K>],
        width: f64,
        height: f64,
        x_partitions: usize,
        y_partitions: usize,
    ) -> Result<Self, BuildError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(BuildError::InvalidDomain { width, height });
        }
        if x_partitions == 0 || y_partitions == 0 {
            return Err(BuildError::InvalidPartitions {
                x_partitions,
                y_partitions,
            });
        }
        let mut index = Self {
            width,
            height,
            x_partitions,
            y_partitions,
            cell_width: width / x_partitions as f64,
            cell_height: height / y_partitions as f64,
            cells: vec![Cell::default(); x_partitions * y_partitions],
            keys: Vec::new(),
            bounds: Vec::new(),
            slots: HashMap::new(),
        };
        for timeline in timelines {
            index.insert_timeline(timeline);
        }
        Ok(index)
    }

    /// All timeline keys, in first-encounter order.
    #[must_use]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// The exact bounding box of a timeline's finite points, if it has any.
    #[must_use]
    pub fn key_bounds(&self, key: &K) -> Option<Rect> {
        self.slots.get(key).and_then(|&slot| self.bounds[slot])
    }

    /// The indexed domain as `(width, height)`.
    #[must_use]
    pub fn domain(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Partition counts as `(x_partitions, y_partitions)`.
    #[must_use]
    pub fn partitions(&self) -> (usize, usize) {
        (self.x_partitions, self.y_partitions)
    }

    /// Cell extent as `(cell_width, cell_height)`.
    #[must_use]
    pub fn cell_size(&self) -> Size {
        Size::new(self.cell_width, self.cell_height)
    }

    fn insert_timeline(&mut self, timeline: &Timeline<K>) {
        let slot = match self.slots.get(&timeline.key) {
            Some(&slot) => slot,
            None => {
                let slot = self.keys.len();
                self.slots.insert(timeline.key.clone(), slot);
                self.keys.push(timeline.key.clone());
                self.bounds.push(None);
                slot
            }
        };

        let mut last: Option<(Point, (usize, usize))> = None;
        for &p in &timeline.points {
            if !p.is_finite() {
                // Missing sample. Break the chain; the next finite point
                // restarts a run instead of bridging the gap.
                last = None;
                continue;
            }
            self.bounds[slot] = Some(match self.bounds[slot] {
                None => Rect::new(p.x, p.y, p.x, p.y),
                Some(b) => b.union_pt(p),
            });
            let cell = self.cell_of(p);
            match last {
                None => self.start_run(cell, slot, p),
                Some((_, prev_cell)) if prev_cell == cell => self.extend_run(cell, slot, p),
                Some((prev, prev_cell)) => {
                    // Close the run in the cell being left with the point
                    // that left it, keeping the boundary segment's exact
                    // geometry for intersection tests at the edge.
                    self.extend_run(prev_cell, slot, p);
                    self.clip_segment(prev, p, prev_cell, cell, slot);
                }
            }
            last = Some((p, cell));
        }
    }

    /// Distributes the cell-changing segment `prev -> p` as 2-point clipped
    /// runs.
    ///
    /// The destination cell is seeded unconditionally: `p` lies in it, so
    /// the segment always touches it, and the seeded run becomes the chain
    /// that subsequent in-cell points extend. Every other cell in the
    /// segment's covered cell range gets the representative iff the segment
    /// crosses that cell's rectangle. Cells outside the covered range cannot
    /// intersect the segment, so the scan stops there.
    fn clip_segment(
        &mut self,
        prev: Point,
        p: Point,
        prev_cell: (usize, usize),
        dest_cell: (usize, usize),
        slot: usize,
    ) {
        self.push_run(dest_cell, slot, Run::pair(prev, p));

        let i_lo = prev_cell.0.min(dest_cell.0);
        let i_hi = prev_cell.0.max(dest_cell.0);
        let j_lo = prev_cell.1.min(dest_cell.1);
        let j_hi = prev_cell.1.max(dest_cell.1);
        for j in j_lo..=j_hi {
            for i in i_lo..=i_hi {
                if (i, j) == prev_cell || (i, j) == dest_cell {
                    continue;
                }
                if segment_crosses_rect(prev, p, self.cell_rect(i, j)) {
                    self.push_run((i, j), slot, Run::pair(prev, p));
                }
            }
        }
    }

    fn start_run(&mut self, cell: (usize, usize), slot: usize, p: Point) {
        self.push_run(cell, slot, Run::single(p));
    }

    fn extend_run(&mut self, cell: (usize, usize), slot: usize, p: Point) {
        let idx = self.cell_index(cell.0, cell.1);
        let runs = self.cells[idx].runs.entry(slot).or_default();
        match runs.last_mut() {
            Some(run) => run.points.push(p),
            None => runs.push(Run::single(p)),
        }
    }

    fn push_run(&mut self, cell: (usize, usize), slot: usize, run: Run) {
        let idx = self.cell_index(cell.0, cell.1);
        self.cells[idx].runs.entry(slot).or_default().push(run);
    }

    pub(crate) fn cell_index(&self, i: usize, j: usize) -> usize {
        j * self.x_partitions + i
    }

    pub(crate) fn cell_rect(&self, i: usize, j: usize) -> Rect {
        Rect::new(
            i as f64 * self.cell_width,
            j as f64 * self.cell_height,
            (i + 1) as f64 * self.cell_width,
            (j + 1) as f64 * self.cell_height,
        )
    }

    /// The cell a point falls in. Floor division; coordinates on a cell
    /// boundary land in the cell starting there, and out-of-range
    /// coordinates clamp into the edge cells. Build and query share this so
    /// the boundary convention cannot drift between them.
    pub(crate) fn cell_of(&self, p: Point) -> (usize, usize) {
        (
            cell_coord(p.x, self.cell_width, self.x_partitions),
            cell_coord(p.y, self.cell_height, self.y_partitions),
        )
    }
}

pub(crate) fn cell_coord(v: f64, cell_size: f64, count: usize) -> usize {
    (v / cell_size).floor().clamp(0.0, (count - 1) as f64) as usize
}

impl<K: Eq + Hash> PartialEq for GridIndex<K> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.x_partitions == other.x_partitions
            && self.y_partitions == other.y_partitions
            && self.cells == other.cells
            && self.keys == other.keys
            && self.bounds == other.bounds
    }
}

impl<K> fmt::Debug for GridIndex<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridIndex")
            .field("x_partitions", &self.x_partitions)
            .field("y_partitions", &self.y_partitions)
            .field("timelines", &self.keys.len())
            .finish_non_exhaustive()
    }
}
