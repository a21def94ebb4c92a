// Copyright 2026 the Timebrush Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: input timelines, query modes, and build errors.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

/// A keyed, temporally ordered point sequence, treated as an implicit
/// polyline connecting consecutive points.
///
/// Coordinates are in the shared pixel space of the index (post scale
/// transform, y-down). A point with a non-finite coordinate marks a missing
/// sample: the builder skips it and does not bridge a segment across the
/// gap, matching how a renderer breaks the drawn line there.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<K> {
    /// Opaque unique identifier for this timeline.
    pub key: K,
    /// The ordered point sequence. May be empty or a single point; a
    /// single-point timeline has no segments and can only match a query
    /// through point containment.
    pub points: Vec<Point>,
}

impl<K> Timeline<K> {
    /// Creates a timeline from anything convertible to points, such as
    /// `(f64, f64)` tuples.
    pub fn new<I, P>(key: K, points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self {
            key,
            points: points.into_iter().map(Into::into).collect(),
        }
    }
}

/// Which predicate a brush query evaluates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryMode {
    /// Match timelines whose polyline touches the rectangle: crossing its
    /// boundary or lying (partly or wholly) inside it.
    Intersect,
    /// Match timelines whose entire point set lies within the rectangle.
    Contains,
}

/// Rejected configuration at [`GridIndex::build`](crate::GridIndex::build) time.
///
/// These are caller bugs, reported synchronously; no partially built index
/// is ever returned. Queries, by contrast, have no error cases: a rectangle
/// outside the domain is a valid "no match" outcome.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BuildError {
    /// Domain width or height was zero, negative, or non-finite.
    InvalidDomain {
        /// The rejected domain width.
        width: f64,
        /// The rejected domain height.
        height: f64,
    },
    /// A partition count was zero.
    InvalidPartitions {
        /// The rejected horizontal partition count.
        x_partitions: usize,
        /// The rejected vertical partition count.
        y_partitions: usize,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain { width, height } => {
                write!(f, "grid domain must be finite and positive, got {width}x{height}")
            }
            Self::InvalidPartitions {
                x_partitions,
                y_partitions,
            } => {
                write!(
                    f,
                    "grid partition counts must be nonzero, got {x_partitions}x{y_partitions}"
                )
            }
        }
    }
}

impl core::error::Error for BuildError {}
