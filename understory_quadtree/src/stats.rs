// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape diagnostics for debugging and visualization.

use alloc::vec::Vec;

use crate::node::QuadNode;
use crate::types::Scalar;

/// Aggregate counts describing the shape of a quadtree.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes, leaves and internal nodes together.
    pub nodes: usize,
    /// Number of leaves.
    pub leaves: usize,
    /// Number of internal (divided) nodes.
    pub internal: usize,
    /// Number of stored points.
    pub points: usize,
    /// Depth of the deepest node; the root is at depth 0.
    pub max_depth: usize,
}

impl TreeStats {
    pub(crate) fn collect<T: Scalar>(root: &QuadNode<T>) -> Self {
        let mut stats = Self::default();
        root.visit_nodes(|node, depth| {
            stats.nodes += 1;
            stats.max_depth = stats.max_depth.max(depth);
            if node.is_leaf() {
                stats.leaves += 1;
                stats.points += node.points().len();
            } else {
                stats.internal += 1;
            }
        });
        stats
    }
}

/// `hist[k]` is the number of leaves holding exactly `k` points.
///
/// The vector always has `capacity` entries; leaves that overflowed at a depth
/// cutoff extend it as needed.
pub(crate) fn occupancy_histogram<T: Scalar>(root: &QuadNode<T>) -> Vec<usize> {
    let mut hist = alloc::vec![0; root.capacity()];
    root.visit_nodes(|node, _| {
        if node.is_leaf() {
            let k = node.points().len();
            if k >= hist.len() {
                hist.resize(k + 1, 0);
            }
            hist[k] += 1;
        }
    });
    hist
}

#[cfg(test)]
mod tests {
    use super::{TreeStats, occupancy_histogram};
    use crate::DEFAULT_MAX_DEPTH;
    use crate::node::QuadNode;
    use crate::types::{Boundary, Point};

    #[test]
    fn single_leaf() {
        let mut n = QuadNode::new(Boundary::from_xywh(0.0, 0.0, 8.0, 8.0).unwrap(), 4);
        n.insert(Point::new(1.0, 1.0), 0, DEFAULT_MAX_DEPTH);
        assert_eq!(
            TreeStats::collect(&n),
            TreeStats {
                nodes: 1,
                leaves: 1,
                internal: 0,
                points: 1,
                max_depth: 0,
            }
        );
        assert_eq!(occupancy_histogram(&n), [0, 1, 0, 0]);
    }

    #[test]
    fn divided_root() {
        let mut n = QuadNode::new(Boundary::from_xywh(0.0, 0.0, 8.0, 8.0).unwrap(), 2);
        n.insert(Point::new(1.0, 1.0), 0, DEFAULT_MAX_DEPTH);
        n.insert(Point::new(7.0, 7.0), 0, DEFAULT_MAX_DEPTH);
        let stats = TreeStats::collect(&n);
        assert_eq!(stats.nodes, 5);
        assert_eq!(stats.leaves, 4);
        assert_eq!(stats.internal, 1);
        assert_eq!(stats.points, 2);
        assert_eq!(stats.max_depth, 1);
        assert_eq!(occupancy_histogram(&n), [2, 2]);
    }

    #[test]
    fn overflowing_leaf_extends_histogram() {
        let mut n = QuadNode::new(Boundary::from_xywh(0.0, 0.0, 8.0, 8.0).unwrap(), 2);
        for _ in 0..5 {
            n.insert(Point::new(3.0, 3.0), 0, 0);
        }
        assert_eq!(occupancy_histogram(&n), [0, 0, 0, 0, 0, 1]);
    }
}
