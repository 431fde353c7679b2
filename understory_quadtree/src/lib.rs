// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a point-region quadtree for 2D range queries and membership tests.
//!
//! A [`QuadTree`] indexes a growing set of [`Point`]s inside a fixed root [`Boundary`].
//! Each node is a leaf buffering points or an internal node with exactly four children.
//! A leaf divides at its center once it would reach the tree's capacity. Range
//! queries prune subtrees whose boundary misses the query window, and membership
//! tests descend only through nodes whose boundary contains the point.
//!
//! ## Geometry
//!
//! - [`Boundary`] is half-open: `[top_left.x, bottom_right.x) × [top_left.y, bottom_right.y)`.
//!   Points on a center seam belong to exactly one quadrant, so nothing is stored twice
//!   or dropped at subdivision boundaries.
//! - [`Boundary::intersects`] is a closed overlap test used only for pruning; exact
//!   membership is always decided by [`Boundary::contains`].
//! - Quadrant selection uses the node's center; coordinates equal to the center go to
//!   the east/south side. See [`Quadrant::select`].
//!
//! ## API overview
//!
//! - [`QuadTree::new`] / [`QuadTree::with_options`]: construction over a root boundary.
//! - [`QuadTree::insert`] → `bool`: `false` for points outside the root; no other failure.
//! - [`QuadTree::query`] and [`QuadTree::visit_rect`]: every stored point inside a window.
//! - [`QuadTree::has`]: exact-coordinate membership.
//! - [`QuadTree::root`] / [`QuadTree::visit_nodes`]: read-only access to the tree's shape
//!   for renderers; [`QuadTree::stats`] and [`QuadTree::occupancy_histogram`] summarize it.
//!
//! ```rust
//! use understory_quadtree::{Boundary, Point, Quadrant, QuadTree};
//!
//! let world = Boundary::from_xywh(0.0, 0.0, 100.0, 100.0).unwrap();
//! let mut tree = QuadTree::new(world, 4).unwrap();
//!
//! for p in [(10.0, 10.0), (20.0, 20.0), (30.0, 30.0)] {
//!     assert!(tree.insert(p.into()));
//! }
//! assert!(tree.root().is_leaf());
//!
//! // The fourth point would fill the leaf, so the root divides first.
//! assert!(tree.insert(Point::new(40.0, 40.0)));
//! let nw = tree.root().child(Quadrant::NorthWest).unwrap();
//! assert_eq!(nw.point_count(), 4);
//!
//! assert_eq!(tree.query(&world).len(), 4);
//! assert!(tree.has(&Point::new(20.0, 20.0)));
//! assert!(!tree.has(&Point::new(25.0, 25.0)));
//! assert!(!tree.insert(Point::new(100.0, 5.0)));
//! ```
//!
//! ## Depth
//!
//! Subdivision alone cannot separate coincident points, so every tree has a
//! depth cutoff ([`DEFAULT_MAX_DEPTH`] unless [`QuadTreeOptions::max_depth`] says
//! otherwise, up to [`MAX_DEPTH_LIMIT`]). Leaves at the cutoff, or whose boundary
//! can no longer be bisected, keep points beyond capacity.
//!
//! ## Features
//!
//! - `std` (default): forwards to optional dependencies.
//! - `kurbo`: conversions between `kurbo::Point`/`kurbo::Rect` and `f64` geometry.
//! - `tracing`: emits `tracing` events on subdivision and rejected inserts.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
#[cfg(feature = "kurbo")]
mod kurbo_interop;
mod node;
mod stats;
mod tree;
mod types;

pub use error::QuadTreeError;
pub use node::QuadNode;
pub use stats::TreeStats;
pub use tree::{
    DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT, QuadTree, QuadTreeF32, QuadTreeF64, QuadTreeOptions,
};
pub use types::{Boundary, Point, Quadrant, Scalar};
