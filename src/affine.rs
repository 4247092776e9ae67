// Copyright 2024 the Hairline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Affine transforms.

use core::ops::{Mul, MulAssign};

use crate::Vec2;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A 2D affine transform.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Affine([f64; 6]);

impl Affine {
    /// The identity transform.
    pub const IDENTITY: Affine = Affine::scale(1.0);

    /// Construct an affine transform from coefficients.
    ///
    /// If the coefficients are `(a, b, c, d, e, f)`, then the resulting
    /// transformation represents this augmented matrix:
    ///
    /// ```text
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    /// ```
    ///
    /// The idea is that `(A * B) * v == A * (B * v)`, where `*` is the
    /// [`Mul`] trait.
    #[inline]
    pub const fn new(c: [f64; 6]) -> Affine {
        Affine(c)
    }

    /// An affine transform representing uniform scaling.
    #[inline]
    pub const fn scale(s: f64) -> Affine {
        Affine([s, 0.0, 0.0, s, 0.0, 0.0])
    }

    /// An affine transform representing non-uniform scaling
    /// with different scale values for x and y.
    #[inline]
    pub const fn scale_non_uniform(s_x: f64, s_y: f64) -> Affine {
        Affine([s_x, 0.0, 0.0, s_y, 0.0, 0.0])
    }

    /// An affine transform representing rotation.
    ///
    /// The convention for rotation is that a positive angle rotates a
    /// positive X direction into positive Y. Thus, in a Y-down coordinate
    /// system (as is common for graphics), it is a clockwise rotation, and
    /// in Y-up (traditional for math), it is anti-clockwise.
    ///
    /// The angle, `th`, is expressed in radians.
    #[inline]
    pub fn rotate(th: f64) -> Affine {
        let (s, c) = th.sin_cos();
        Affine([c, s, -s, c, 0.0, 0.0])
    }

    /// An affine transform representing translation.
    #[inline]
    pub fn translate<V: Into<Vec2>>(p: V) -> Affine {
        let p = p.into();
        Affine([1.0, 0.0, 0.0, 1.0, p.x, p.y])
    }

    /// Get the coefficients of the transform.
    #[inline]
    pub const fn as_coeffs(self) -> [f64; 6] {
        self.0
    }

    /// Compute the determinant of this transform.
    #[inline]
    pub fn determinant(self) -> f64 {
        self.0[0] * self.0[3] - self.0[1] * self.0[2]
    }

    /// Compute the inverse transform.
    ///
    /// Produces NaN values when the determinant is zero.
    pub fn inverse(self) -> Affine {
        let inv_det = self.determinant().recip();
        Affine::new([
            inv_det * self.0[3],
            -inv_det * self.0[1],
            -inv_det * self.0[2],
            inv_det * self.0[0],
            inv_det * (self.0[2] * self.0[5] - self.0[3] * self.0[4]),
            inv_det * (self.0[1] * self.0[4] - self.0[0] * self.0[5]),
        ])
    }

    /// The scale factors of the transform's basis.
    ///
    /// Returns the length of the image of the x basis vector and the length
    /// the y basis direction maps to after accounting for shear, which is
    /// `|det| / major`. Returns `None` when the determinant is not finite.
    pub fn basis_scale_factors(self) -> Option<(f64, f64)> {
        let det = self.determinant();
        if !det.is_finite() {
            return None;
        }
        if det == 0.0 {
            return Some((0.0, 0.0));
        }
        let major = Vec2::new(self.0[0], self.0[1]).hypot();
        let minor = if major == 0.0 { 0.0 } else { det.abs() / major };
        Some((major, minor))
    }
}

impl Default for Affine {
    #[inline]
    fn default() -> Affine {
        Affine::IDENTITY
    }
}

/// Transforms the vector as a distance: the linear part of the transform
/// applies, the translation does not.
impl Mul<Vec2> for Affine {
    type Output = Vec2;

    #[inline]
    fn mul(self, other: Vec2) -> Vec2 {
        Vec2::new(
            self.0[0] * other.x + self.0[2] * other.y,
            self.0[1] * other.x + self.0[3] * other.y,
        )
    }
}

impl Mul for Affine {
    type Output = Affine;

    #[inline]
    fn mul(self, other: Affine) -> Affine {
        Affine([
            self.0[0] * other.0[0] + self.0[2] * other.0[1],
            self.0[1] * other.0[0] + self.0[3] * other.0[1],
            self.0[0] * other.0[2] + self.0[2] * other.0[3],
            self.0[1] * other.0[2] + self.0[3] * other.0[3],
            self.0[0] * other.0[4] + self.0[2] * other.0[5] + self.0[4],
            self.0[1] * other.0[4] + self.0[3] * other.0[5] + self.0[5],
        ])
    }
}

impl MulAssign for Affine {
    #[inline]
    fn mul_assign(&mut self, other: Affine) {
        *self = self.mul(other);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn assert_near(v0: Vec2, v1: Vec2) {
        assert!((v1 - v0).hypot() < 1e-9, "{v0:?} != {v1:?}");
    }

    #[test]
    fn affine_basic() {
        let v = Vec2::new(3.0, 4.0);

        assert_near(Affine::default() * v, v);
        assert_near(Affine::scale(2.0) * v, Vec2::new(6.0, 8.0));
        assert_near(Affine::rotate(0.0) * v, v);
        assert_near(Affine::rotate(PI / 2.0) * v, Vec2::new(-4.0, 3.0));
        // Vectors are distances, so translation leaves them alone.
        assert_near(Affine::translate((5.0, 6.0)) * v, v);
    }

    #[test]
    fn affine_mul() {
        let a1 = Affine::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let a2 = Affine::new([0.1, 1.2, 2.3, 3.4, 4.5, 5.6]);

        let px = Vec2::new(1.0, 0.0);
        let py = Vec2::new(0.0, 1.0);
        assert_near(a1 * (a2 * px), (a1 * a2) * px);
        assert_near(a1 * (a2 * py), (a1 * a2) * py);
        assert_near(a1 * (a2 * (px + py)), (a1 * a2) * (px + py));
    }

    #[test]
    fn affine_inverse() {
        let a = Affine::new([0.1, 1.2, 2.3, 3.4, 4.5, 5.6]);
        let inv = a.inverse();
        let coeffs = (a * inv).as_coeffs();
        let id = Affine::IDENTITY.as_coeffs();
        for i in 0..6 {
            assert!((coeffs[i] - id[i]).abs() < 1e-9, "coefficient {i}");
        }
    }

    #[test]
    fn basis_scale_factors() {
        assert_eq!(Affine::IDENTITY.basis_scale_factors(), Some((1.0, 1.0)));
        assert_eq!(
            Affine::scale_non_uniform(2.0, 3.0).basis_scale_factors(),
            Some((2.0, 3.0))
        );
        let (x, y) = Affine::rotate(PI / 3.0).basis_scale_factors().unwrap();
        assert!((x - 1.0).abs() < 1e-12);
        assert!((y - 1.0).abs() < 1e-12);
        assert_eq!(
            Affine::new([f64::NAN, 0.0, 0.0, 1.0, 0.0, 0.0]).basis_scale_factors(),
            None
        );
    }
}
