// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree nodes: leaf buffers, subdivision, and recursive queries.

use alloc::boxed::Box;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::types::{Boundary, Point, Quadrant, Scalar};

/// Points stored inline in a leaf before spilling to the heap.
///
/// Matches the default capacity of 4, whose leaves hold at most 3 points.
const INLINE_POINTS: usize = 4;

type PointBuf<T> = SmallVec<[Point<T>; INLINE_POINTS]>;

/// A node is either a leaf buffering points or an internal node with exactly four children.
///
/// The transition from `Leaf` to `Internal` happens once and is never undone.
#[derive(Clone, Debug)]
enum NodeKind<T> {
    Leaf(PointBuf<T>),
    Internal(Box<[QuadNode<T>; 4]>),
}

/// A node of a [`QuadTree`](crate::QuadTree).
///
/// Nodes are exposed read-only so that renderers and diagnostics can walk the
/// tree's shape; all mutation goes through [`QuadTree`](crate::QuadTree).
#[derive(Clone, Debug)]
pub struct QuadNode<T> {
    boundary: Boundary<T>,
    capacity: usize,
    kind: NodeKind<T>,
}

impl<T: Scalar> QuadNode<T> {
    /// Create an empty leaf.
    pub(crate) fn new(boundary: Boundary<T>, capacity: usize) -> Self {
        Self {
            boundary,
            capacity,
            kind: NodeKind::Leaf(SmallVec::new()),
        }
    }

    /// Spatial extent of this node.
    #[inline]
    pub fn boundary(&self) -> &Boundary<T> {
        &self.boundary
    }

    /// Capacity shared by every node in the tree.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if this node stores points directly and has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Points buffered in this leaf, in insertion order. Empty for internal nodes.
    pub fn points(&self) -> &[Point<T>] {
        match &self.kind {
            NodeKind::Leaf(points) => points.as_slice(),
            NodeKind::Internal(_) => &[],
        }
    }

    /// The four children in [`Quadrant::ALL`] order, or `None` for a leaf.
    pub fn children(&self) -> Option<&[Self; 4]> {
        match &self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Internal(children) => Some(&**children),
        }
    }

    /// The child covering `quadrant`, or `None` for a leaf.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children().map(|c| &c[quadrant.index()])
    }

    /// Number of points stored in this subtree.
    pub fn point_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(points) => points.len(),
            NodeKind::Internal(children) => children.iter().map(Self::point_count).sum(),
        }
    }

    /// Insert `p` if this node's boundary contains it. Returns whether it was stored.
    ///
    /// `depth` is this node's depth (the root is 0). A leaf at `max_depth`, or one
    /// whose boundary can no longer be bisected, keeps points beyond capacity
    /// instead of dividing.
    pub(crate) fn insert(&mut self, p: Point<T>, depth: usize, max_depth: usize) -> bool {
        if !self.boundary.contains(&p) {
            return false;
        }
        match &mut self.kind {
            NodeKind::Internal(children) => {
                let q = self.boundary.quadrant_of(&p);
                children[q.index()].insert(p, depth + 1, max_depth)
            }
            NodeKind::Leaf(points) if points.len() + 1 < self.capacity => {
                points.push(p);
                true
            }
            NodeKind::Leaf(points) => {
                let at_cutoff = depth >= max_depth;
                match self.boundary.split().filter(|_| !at_cutoff) {
                    Some(quads) => {
                        self.divide(quads, depth, max_depth);
                        self.insert(p, depth, max_depth)
                    }
                    None => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(
                            depth,
                            len = points.len() + 1,
                            boundary = ?self.boundary,
                            "leaf cannot divide; storing beyond capacity"
                        );
                        points.push(p);
                        true
                    }
                }
            }
        }
    }

    /// Turn this leaf into an internal node and migrate its points into the children.
    fn divide(&mut self, quads: [Boundary<T>; 4], depth: usize, max_depth: usize) {
        #[cfg(feature = "tracing")]
        tracing::trace!(depth, boundary = ?self.boundary, "subdivide");

        let capacity = self.capacity;
        let children = Box::new(quads.map(|b| Self::new(b, capacity)));
        let NodeKind::Leaf(points) =
            core::mem::replace(&mut self.kind, NodeKind::Internal(children))
        else {
            return;
        };
        for p in points {
            let stored = self.insert(p, depth, max_depth);
            debug_assert!(stored, "buffered point {p:?} lies outside {:?}", self.boundary);
        }
    }

    /// Visit every stored point contained in `range`.
    pub fn visit_rect<F: FnMut(&Point<T>)>(&self, range: &Boundary<T>, mut f: F) {
        self.visit_rect_inner(range, &mut f);
    }

    fn visit_rect_inner<F: FnMut(&Point<T>)>(&self, range: &Boundary<T>, f: &mut F) {
        if !self.boundary.intersects(range) {
            return;
        }
        match &self.kind {
            NodeKind::Leaf(points) => {
                for p in points.iter().filter(|p| range.contains(p)) {
                    f(p);
                }
            }
            NodeKind::Internal(children) => {
                for child in children.iter() {
                    child.visit_rect_inner(range, f);
                }
            }
        }
    }

    /// Collect every stored point contained in `range`.
    ///
    /// Points within a leaf come out in insertion order; leaves are visited in
    /// [`Quadrant::ALL`] order at each level.
    pub fn query(&self, range: &Boundary<T>) -> Vec<Point<T>> {
        let mut out = Vec::new();
        self.visit_rect(range, |p| out.push(*p));
        out
    }

    /// Returns `true` if a point equal to `p` was stored in this subtree.
    pub fn has(&self, p: &Point<T>) -> bool {
        if !self.boundary.contains(p) {
            return false;
        }
        match &self.kind {
            NodeKind::Leaf(points) => points.contains(p),
            NodeKind::Internal(children) => children.iter().any(|c| c.has(p)),
        }
    }

    /// Pre-order traversal of this subtree. `f` receives each node and its depth
    /// relative to this node.
    pub fn visit_nodes<F: FnMut(&Self, usize)>(&self, mut f: F) {
        self.visit_nodes_inner(0, &mut f);
    }

    fn visit_nodes_inner<F: FnMut(&Self, usize)>(&self, depth: usize, f: &mut F) {
        f(self, depth);
        if let NodeKind::Internal(children) = &self.kind {
            for child in children.iter() {
                child.visit_nodes_inner(depth + 1, f);
            }
        }
    }
}
