// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

/// Error returned when a [`Boundary`](crate::Boundary) or [`QuadTree`](crate::QuadTree)
/// cannot be constructed.
///
/// Runtime operations never fail: out-of-range inserts return `false`, and
/// queries that miss the tree return nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuadTreeError {
    /// The top-left corner is not strictly less than the bottom-right corner on both axes.
    #[error("boundary top-left corner must be strictly less than bottom-right on both axes")]
    InvertedBoundary,
    /// A boundary coordinate is infinite or NaN.
    #[error("boundary coordinates must be finite")]
    NonFiniteBoundary,
    /// Leaves hold `capacity - 1` points, so a capacity below 2 could never store a point.
    #[error("capacity must be at least 2, got {capacity}")]
    CapacityTooSmall {
        /// The rejected capacity.
        capacity: usize,
    },
    /// The depth cutoff exceeds what recursive traversal, cloning, and dropping can support.
    #[error("max depth must be at most {limit}, got {max_depth}")]
    DepthTooLarge {
        /// The rejected depth cutoff.
        max_depth: usize,
        /// The largest accepted depth cutoff.
        limit: usize,
    },
}
