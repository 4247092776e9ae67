// Copyright 2024 the Hairline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D point on the device grid.

use core::fmt;
use core::ops::{Add, Sub};

use crate::{Fixed, Vec2};

/// A 2D point in fixed-point device coordinates.
///
/// Points compare exactly: two points are equal when they land on the same
/// spot of the device grid. The stroker's touching test relies on this.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x coordinate.
    pub x: Fixed,
    /// The y coordinate.
    pub y: Fixed,
}

impl Point {
    /// The point (0, 0).
    pub const ZERO: Point = Point::new(Fixed::ZERO, Fixed::ZERO);

    /// Create a new `Point` with the provided `x` and `y` coordinates.
    #[inline]
    pub const fn new(x: Fixed, y: Fixed) -> Point {
        Point { x, y }
    }

    /// The nearest representable point to (`x`, `y`) device units.
    #[inline]
    pub fn from_f64(x: f64, y: f64) -> Point {
        Point::new(Fixed::from_f64(x), Fixed::from_f64(y))
    }

    /// This point's coordinates in device units.
    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x.to_f64(), self.y.to_f64())
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from(v: (f64, f64)) -> Point {
        Point::from_f64(v.0, v.1)
    }
}

/// The device-space delta between two points, in device units.
impl Sub for Point {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Point) -> Vec2 {
        Vec2::new((self.x - other.x).to_f64(), (self.y - other.y).to_f64())
    }
}

/// Offsets the point, rounding each component onto the device grid.
impl Add<Vec2> for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Vec2) -> Point {
        Point::new(
            self.x + Fixed::from_f64(other.x),
            self.y + Fixed::from_f64(other.y),
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_equality() {
        assert_eq!(Point::from_f64(1.5, -2.0), Point::from_f64(1.5, -2.0));
        assert_ne!(
            Point::from_f64(1.5, 0.0),
            Point::from_f64(1.5 + 1.0 / 256.0, 0.0)
        );
    }

    #[test]
    fn delta() {
        let a = Point::from_f64(1.0, 2.0);
        let b = Point::from_f64(4.0, -2.0);
        assert_eq!(b - a, Vec2::new(3.0, -4.0));
    }

    #[test]
    fn offset() {
        let p = Point::from_f64(10.0, 0.0);
        assert_eq!(p + Vec2::new(0.5, -0.25), Point::from_f64(10.5, -0.25));
        assert_eq!(p + Vec2::ZERO, p);
    }
}
