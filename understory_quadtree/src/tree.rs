// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The quadtree container and its construction options.

use alloc::vec::Vec;

use crate::QuadTreeError;
use crate::node::QuadNode;
use crate::stats::{self, TreeStats};
use crate::types::{Boundary, Point, Scalar};

/// Depth cutoff used by [`QuadTree::new`] and [`QuadTreeOptions::default`].
///
/// At 32 levels a cell is 2^-32 of the root's extent, well below any useful resolution.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Largest depth cutoff [`QuadTree::with_options`] accepts.
///
/// Cloning and dropping a tree recurse once per level, so the depth must stay
/// shallow enough for the call stack.
pub const MAX_DEPTH_LIMIT: usize = 128;

/// Construction options for a [`QuadTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuadTreeOptions {
    /// Leaves divide when they would reach this many points, so each leaf
    /// buffers at most `capacity - 1`. Must be at least 2.
    pub capacity: usize,
    /// Depth at which leaves stop dividing and keep points beyond capacity.
    ///
    /// Subdivision alone cannot separate coincident points, so the tree is
    /// always bounded. A leaf whose boundary can no longer be bisected in the
    /// scalar's precision also stops dividing. At most [`MAX_DEPTH_LIMIT`].
    pub max_depth: usize,
}

impl QuadTreeOptions {
    /// Options with the given capacity and [`DEFAULT_MAX_DEPTH`].
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the depth cutoff.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for QuadTreeOptions {
    fn default() -> Self {
        Self::new(4)
    }
}

/// A point-region quadtree over a fixed root [`Boundary`].
///
/// The tree is single-writer: [`QuadTree::insert`] takes `&mut self`, and the
/// read-only operations take `&self`, so the borrow checker already rules out
/// reads observing a half-divided node. Wrap it in a lock to share it across threads.
#[derive(Clone, Debug)]
pub struct QuadTree<T> {
    root: QuadNode<T>,
    max_depth: usize,
    len: usize,
}

/// Quadtree over `f32` coordinates.
pub type QuadTreeF32 = QuadTree<f32>;
/// Quadtree over `f64` coordinates.
pub type QuadTreeF64 = QuadTree<f64>;

impl<T: Scalar> QuadTree<T> {
    /// Create an empty tree with the given capacity and [`DEFAULT_MAX_DEPTH`].
    pub fn new(boundary: Boundary<T>, capacity: usize) -> Result<Self, QuadTreeError> {
        Self::with_options(boundary, QuadTreeOptions::new(capacity))
    }

    /// Create an empty tree from [`QuadTreeOptions`].
    pub fn with_options(
        boundary: Boundary<T>,
        options: QuadTreeOptions,
    ) -> Result<Self, QuadTreeError> {
        if options.capacity < 2 {
            return Err(QuadTreeError::CapacityTooSmall {
                capacity: options.capacity,
            });
        }
        if options.max_depth > MAX_DEPTH_LIMIT {
            return Err(QuadTreeError::DepthTooLarge {
                max_depth: options.max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }
        Ok(Self {
            root: QuadNode::new(boundary, options.capacity),
            max_depth: options.max_depth,
            len: 0,
        })
    }

    /// Insert a point. Returns `false`, leaving the tree unchanged, if the point
    /// lies outside the root boundary.
    pub fn insert(&mut self, p: Point<T>) -> bool {
        let stored = self.root.insert(p, 0, self.max_depth);
        if stored {
            self.len += 1;
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(point = ?p, boundary = ?self.root.boundary(), "insert out of bounds");
        }
        stored
    }

    /// Insert every point from `points`, returning how many were stored.
    pub fn extend<I: IntoIterator<Item = Point<T>>>(&mut self, points: I) -> usize {
        points.into_iter().filter(|p| self.insert(*p)).count()
    }

    /// All stored points contained in `range`.
    ///
    /// `range` may be larger than, smaller than, or disjoint from the root boundary.
    pub fn query(&self, range: &Boundary<T>) -> Vec<Point<T>> {
        self.root.query(range)
    }

    /// Visit all stored points contained in `range` without allocating.
    pub fn visit_rect<F: FnMut(&Point<T>)>(&self, range: &Boundary<T>, f: F) {
        self.root.visit_rect(range, f);
    }

    /// Returns `true` if a point equal to `p` has been inserted.
    pub fn has(&self, p: &Point<T>) -> bool {
        self.root.has(p)
    }

    /// Every stored point.
    pub fn points(&self) -> Vec<Point<T>> {
        self.root.query(self.root.boundary())
    }

    /// Number of stored points, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no point has been stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root boundary.
    #[inline]
    pub fn boundary(&self) -> &Boundary<T> {
        self.root.boundary()
    }

    /// Leaf capacity shared by every node.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.root.capacity()
    }

    /// Depth at which leaves stop dividing.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The root node, for read-only traversal by renderers and diagnostics.
    #[inline]
    pub fn root(&self) -> &QuadNode<T> {
        &self.root
    }

    /// Pre-order traversal of all nodes with their depth (the root is 0).
    pub fn visit_nodes<F: FnMut(&QuadNode<T>, usize)>(&self, f: F) {
        self.root.visit_nodes(f);
    }

    /// Node, leaf and depth counts.
    pub fn stats(&self) -> TreeStats {
        TreeStats::collect(&self.root)
    }

    /// `hist[k]` is the number of leaves holding exactly `k` points.
    pub fn occupancy_histogram(&self) -> Vec<usize> {
        stats::occupancy_histogram(&self.root)
    }
}
