// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions to and from Kurbo geometry.

use crate::QuadTreeError;
use crate::types::{Boundary, Point};

impl From<kurbo::Point> for Point<f64> {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point<f64>> for kurbo::Point {
    fn from(p: Point<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Kurbo rects may be unnormalized or zero-area; only strictly ordered,
/// finite rects convert. Use [`kurbo::Rect::abs`] first to normalize.
impl TryFrom<kurbo::Rect> for Boundary<f64> {
    type Error = QuadTreeError;

    fn try_from(r: kurbo::Rect) -> Result<Self, Self::Error> {
        Self::new(Point::new(r.x0, r.y0), Point::new(r.x1, r.y1))
    }
}

impl From<Boundary<f64>> for kurbo::Rect {
    fn from(b: Boundary<f64>) -> Self {
        Self::from_points(b.top_left(), b.bottom_right())
    }
}

#[cfg(test)]
mod tests {
    use crate::QuadTreeError;
    use crate::types::{Boundary, Point};

    #[test]
    fn rect_round_trip_and_rejection() {
        let r = kurbo::Rect::new(1.0, 2.0, 5.0, 6.0);
        let b = Boundary::try_from(r).unwrap();
        assert_eq!(b.top_left(), Point::new(1.0, 2.0));
        assert_eq!(kurbo::Rect::from(b), r);

        let flipped = kurbo::Rect::new(5.0, 6.0, 1.0, 2.0);
        assert_eq!(
            Boundary::try_from(flipped).unwrap_err(),
            QuadTreeError::InvertedBoundary
        );
        assert!(Boundary::try_from(flipped.abs()).is_ok());
    }

    #[test]
    fn kurbo_points_are_contained_like_native_ones() {
        let b = Boundary::try_from(kurbo::Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert!(b.contains(&kurbo::Point::new(0.0, 0.0).into()));
        assert!(!b.contains(&kurbo::Point::new(10.0, 10.0).into()));
    }
}
