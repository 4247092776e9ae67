// Copyright 2024 the Hairline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A path made of lines and cubic Bézier curves.

use alloc::vec::Vec;

use crate::Point;

/// One element of a path.
///
/// A well-formed path begins with a `MoveTo`; `LineTo` and `CurveTo` draw
/// from the current point, and `ClosePath` connects back to the point of the
/// last `MoveTo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Start a new subpath at the given point.
    MoveTo(Point),
    /// Draw a line from the current point to the given point.
    LineTo(Point),
    /// Draw a cubic Bézier from the current point to the third point, using
    /// the first two points as control points.
    CurveTo(Point, Point, Point),
    /// Close off the subpath with a line back to its start point.
    ClosePath,
}

/// A path in fixed-point device coordinates.
///
/// This is a thin wrapper around a vector of [`PathEl`]; any iterator of
/// elements works just as well as input to the stroker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezPath(Vec<PathEl>);

impl BezPath {
    /// Create a new path.
    #[inline]
    pub fn new() -> BezPath {
        BezPath(Vec::new())
    }

    /// Create a path from a vector of path elements.
    #[inline]
    pub fn from_vec(v: Vec<PathEl>) -> BezPath {
        BezPath(v)
    }

    /// Push a generic path element onto the path.
    #[inline]
    pub fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    /// Push a "move to" element onto the path.
    #[inline]
    pub fn move_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::MoveTo(p.into()));
    }

    /// Push a "line to" element onto the path.
    #[inline]
    pub fn line_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::LineTo(p.into()));
    }

    /// Push a "curve to" element onto the path.
    #[inline]
    pub fn curve_to<P: Into<Point>>(&mut self, p1: P, p2: P, p3: P) {
        self.push(PathEl::CurveTo(p1.into(), p2.into(), p3.into()));
    }

    /// Push a "close path" element onto the path.
    #[inline]
    pub fn close_path(&mut self) {
        self.push(PathEl::ClosePath);
    }

    /// Get the path elements.
    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// Returns an iterator over the path's elements.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = PathEl> + Clone + '_ {
        self.0.iter().copied()
    }

    /// Returns `true` if the path contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for BezPath {
    type Item = PathEl;
    type IntoIter = alloc::vec::IntoIter<PathEl>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BezPath {
    type Item = PathEl;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, PathEl>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl FromIterator<PathEl> for BezPath {
    #[inline]
    fn from_iter<T: IntoIterator<Item = PathEl>>(iter: T) -> BezPath {
        BezPath(iter.into_iter().collect())
    }
}

impl Extend<PathEl> for BezPath {
    #[inline]
    fn extend<I: IntoIterator<Item = PathEl>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[test]
    fn builder() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.curve_to((13.0, 0.0), (17.0, 10.0), (20.0, 10.0));
        path.close_path();

        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::ZERO),
                PathEl::LineTo(Point::from_f64(10.0, 0.0)),
                PathEl::CurveTo(
                    Point::from_f64(13.0, 0.0),
                    Point::from_f64(17.0, 10.0),
                    Point::from_f64(20.0, 10.0)
                ),
                PathEl::ClosePath,
            ]
        );
        assert_eq!(path.iter().count(), 4);
        assert!(!path.is_empty());
    }
}
