// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry primitives: scalar trait, points, half-open boundaries, and quadrants.

use core::fmt::Debug;
use core::ops::Add;

use crate::QuadTreeError;

/// Coordinate type usable in a [`QuadTree`](crate::QuadTree).
///
/// Boundaries are bisected at their center on every subdivision, so the scalar
/// must support a midpoint with fractional precision. Integer scalars are not
/// supported: a unit-wide cell has no interior center.
pub trait Scalar: Copy + PartialOrd + Debug + Add<Output = Self> {
    /// Midpoint of `a` and `b`, computed without intermediate overflow.
    fn midpoint(a: Self, b: Self) -> Self;

    /// Returns `true` if `v` is neither infinite nor NaN.
    fn is_finite(v: Self) -> bool;
}

impl Scalar for f32 {
    #[inline]
    fn midpoint(a: Self, b: Self) -> Self {
        Self::midpoint(a, b)
    }

    #[inline]
    fn is_finite(v: Self) -> bool {
        Self::is_finite(v)
    }
}

impl Scalar for f64 {
    #[inline]
    fn midpoint(a: Self, b: Self) -> Self {
        Self::midpoint(a, b)
    }

    #[inline]
    fn is_finite(v: Self) -> bool {
        Self::is_finite(v)
    }
}

/// A 2D point. Equality is coordinate equality.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate, growing "south".
    pub y: T,
}

impl<T> Point<T> {
    /// Create a point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// One of the four regions produced by bisecting a [`Boundary`] at its center.
///
/// With `y` growing downward, "north" is the half with the smaller `y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `x < cx`, `y < cy`.
    NorthWest = 0,
    /// `x >= cx`, `y < cy`.
    NorthEast = 1,
    /// `x < cx`, `y >= cy`.
    SouthWest = 2,
    /// `x >= cx`, `y >= cy`.
    SouthEast = 3,
}

impl Quadrant {
    /// All quadrants in child-storage and traversal order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Position of this quadrant in [`Quadrant::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Select the quadrant of `p` relative to `center`.
    ///
    /// Coordinates equal to the center go to the east/south side on each axis.
    #[inline]
    pub fn select<T: PartialOrd>(center: &Point<T>, p: &Point<T>) -> Self {
        match (p.x < center.x, p.y < center.y) {
            (true, true) => Self::NorthWest,
            (false, true) => Self::NorthEast,
            (true, false) => Self::SouthWest,
            (false, false) => Self::SouthEast,
        }
    }
}

/// Axis-aligned rectangle `[top_left.x, bottom_right.x) × [top_left.y, bottom_right.y)`.
///
/// Used both as the extent of a quadtree node and as a query window. The
/// corners are strictly ordered and finite; [`Boundary::new`] enforces this.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Boundary<T> {
    top_left: Point<T>,
    bottom_right: Point<T>,
}

impl<T: Scalar> Boundary<T> {
    /// Create a boundary from its top-left (inclusive) and bottom-right (exclusive) corners.
    ///
    /// Fails with [`QuadTreeError::NonFiniteBoundary`] if any coordinate is infinite or NaN,
    /// and with [`QuadTreeError::InvertedBoundary`] unless `top_left` is strictly less than
    /// `bottom_right` on both axes.
    pub fn new(top_left: Point<T>, bottom_right: Point<T>) -> Result<Self, QuadTreeError> {
        let coords = [top_left.x, top_left.y, bottom_right.x, bottom_right.y];
        if !coords.into_iter().all(T::is_finite) {
            return Err(QuadTreeError::NonFiniteBoundary);
        }
        if !(top_left.x < bottom_right.x && top_left.y < bottom_right.y) {
            return Err(QuadTreeError::InvertedBoundary);
        }
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Create a boundary from origin and size.
    ///
    /// Fails like [`Boundary::new`], so sizes must be positive.
    pub fn from_xywh(x: T, y: T, w: T, h: T) -> Result<Self, QuadTreeError> {
        Self::new(Point::new(x, y), Point::new(x + w, y + h))
    }

    /// Top-left corner (inclusive).
    #[inline]
    pub fn top_left(&self) -> Point<T> {
        self.top_left
    }

    /// Bottom-right corner (exclusive).
    #[inline]
    pub fn bottom_right(&self) -> Point<T> {
        self.bottom_right
    }

    /// Geometric center.
    #[inline]
    pub fn center(&self) -> Point<T> {
        Point::new(
            T::midpoint(self.top_left.x, self.bottom_right.x),
            T::midpoint(self.top_left.y, self.bottom_right.y),
        )
    }

    /// Half-open containment: inclusive on the top/left edges, exclusive on the bottom/right.
    ///
    /// NaN coordinates are never contained.
    #[inline]
    pub fn contains(&self, p: &Point<T>) -> bool {
        p.x >= self.top_left.x
            && p.x < self.bottom_right.x
            && p.y >= self.top_left.y
            && p.y < self.bottom_right.y
    }

    /// Closed-rectangle overlap test. Touching edges count as intersecting.
    ///
    /// This is conservative and only suitable for pruning; exact membership
    /// is decided by [`Boundary::contains`].
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.top_left.x > self.bottom_right.x
            || other.bottom_right.x < self.top_left.x
            || other.top_left.y > self.bottom_right.y
            || other.bottom_right.y < self.top_left.y)
    }

    /// Quadrant of `p` relative to this boundary's center.
    #[inline]
    pub fn quadrant_of(&self, p: &Point<T>) -> Quadrant {
        Quadrant::select(&self.center(), p)
    }

    /// Bisect at the center into children ordered as [`Quadrant::ALL`].
    ///
    /// Returns `None` once the center is no longer strictly inside on both axes,
    /// which happens when repeated halving exhausts the scalar's precision.
    pub fn split(&self) -> Option<[Self; 4]> {
        let c = self.center();
        let (tl, br) = (self.top_left, self.bottom_right);
        if !(tl.x < c.x && c.x < br.x && tl.y < c.y && c.y < br.y) {
            return None;
        }
        let child = |top_left, bottom_right| Self {
            top_left,
            bottom_right,
        };
        Some([
            child(tl, c),
            child(Point::new(c.x, tl.y), Point::new(br.x, c.y)),
            child(Point::new(tl.x, c.y), Point::new(c.x, br.y)),
            child(c, br),
        ])
    }
}
