// Copyright 2024 the Hairline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening of cubic Bézier splines.

use crate::{Point, Vec2};

/// A cubic Bézier spline pending decomposition into line segments.
///
/// The knots are held as f64 device coordinates; emitted points are snapped
/// back onto the fixed-point device grid.
#[derive(Clone, Copy, Debug)]
pub struct CubicSpline {
    a: Vec2,
    b: Vec2,
    c: Vec2,
    d: Vec2,
}

impl CubicSpline {
    /// Create a spline from its four control points.
    ///
    /// Returns `None` when both end tangents vanish (`a == b` and `c == d`,
    /// which includes a fully collapsed control polygon). Such a spline has
    /// no direction to flatten along; the caller should fall back to a
    /// straight line to `d`.
    pub fn new(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Option<CubicSpline> {
        if a == b && c == d {
            return None;
        }
        Some(CubicSpline { a, b, c, d })
    }

    /// Evaluate the spline at parameter `t`.
    pub fn eval(&self, t: f64) -> Vec2 {
        let ab = self.a.lerp(self.b, t);
        let bc = self.b.lerp(self.c, t);
        let cd = self.c.lerp(self.d, t);
        let abc = ab.lerp(bc, t);
        let bcd = bc.lerp(cd, t);
        abc.lerp(bcd, t)
    }

    /// Subdivide into left and right halves at `t = 0.5`.
    fn subdivide(&self) -> (CubicSpline, CubicSpline) {
        let pm = self.eval(0.5);
        (
            CubicSpline {
                a: self.a,
                b: (self.a + self.b) / 2.0,
                c: (self.a + self.b * 2.0 + self.c) * 0.25,
                d: pm,
            },
            CubicSpline {
                a: pm,
                b: (self.b + self.c * 2.0 + self.d) * 0.25,
                c: (self.c + self.d) / 2.0,
                d: self.d,
            },
        )
    }

    /// Squared distance bound between the spline and its chord.
    ///
    /// Measures how far the interior control points sit from the line
    /// through `a` and `d`. The curve lies in the convex hull of its control
    /// points, so this bounds the flattening error of replacing the spline
    /// with that chord.
    fn error_squared(&self) -> f64 {
        let b = self.b - self.a;
        let c = self.c - self.a;
        let d = self.d - self.a;
        let v = d.hypot2();
        if v == 0.0 {
            // The chord has collapsed; fall back to plain distances.
            return b.hypot2().max(c.hypot2());
        }
        let ub = b.dot(d);
        let uc = c.dot(d);
        let berr = b.hypot2() - ub * ub / v;
        let cerr = c.hypot2() - uc * uc / v;
        berr.max(cerr)
    }

    /// Decompose the spline into a polyline within `tolerance`.
    ///
    /// The callback receives successive device points, ending with the
    /// spline's end point; the start point is not emitted. Decomposition
    /// stops early if the callback reports a failure.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by the callback.
    pub fn decompose<E>(
        &self,
        tolerance: f64,
        callback: &mut impl FnMut(Point) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut last = Point::from_f64(self.a.x, self.a.y);
        self.decompose_into(tolerance * tolerance, &mut last, callback)?;
        emit(&mut last, self.d, callback)
    }

    fn decompose_into<E>(
        &self,
        tolerance_squared: f64,
        last: &mut Point,
        callback: &mut impl FnMut(Point) -> Result<(), E>,
    ) -> Result<(), E> {
        if self.error_squared() < tolerance_squared {
            return emit(last, self.a, callback);
        }
        let (s1, s2) = self.subdivide();
        s1.decompose_into(tolerance_squared, last, callback)?;
        s2.decompose_into(tolerance_squared, last, callback)
    }
}

/// Pass a knot to the callback, skipping grid-exact duplicates.
fn emit<E>(
    last: &mut Point,
    knot: Vec2,
    callback: &mut impl FnMut(Point) -> Result<(), E>,
) -> Result<(), E> {
    let p = Point::from_f64(knot.x, knot.y);
    if p == *last {
        return Ok(());
    }
    *last = p;
    callback(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    fn flatten(spline: &CubicSpline, tolerance: f64) -> Vec<Point> {
        let mut points = Vec::new();
        spline
            .decompose(tolerance, &mut |p| {
                points.push(p);
                Ok::<_, ()>(())
            })
            .unwrap();
        points
    }

    fn dist_to_polyline(p: Vec2, points: &[Vec2]) -> f64 {
        points
            .windows(2)
            .map(|w| {
                let d = w[1] - w[0];
                let len2 = d.hypot2();
                let t = if len2 == 0.0 {
                    0.0
                } else {
                    ((p - w[0]).dot(d) / len2).clamp(0.0, 1.0)
                };
                (p - w[0].lerp(w[1], t)).hypot()
            })
            .fold(f64::INFINITY, f64::min)
    }

    #[test]
    fn degenerate() {
        let z = Vec2::ZERO;
        assert!(CubicSpline::new(z, z, z, z).is_none());
        assert!(CubicSpline::new(z, z, Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0)).is_none());
        assert!(CubicSpline::new(z, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0), z).is_some());
    }

    #[test]
    fn straight_spline_is_one_segment() {
        let spline = CubicSpline::new(
            Vec2::ZERO,
            Vec2::new(3.0, 0.0),
            Vec2::new(7.0, 0.0),
            Vec2::new(10.0, 0.0),
        )
        .unwrap();
        let points = flatten(&spline, 0.1);
        assert_eq!(points, vec![Point::from_f64(10.0, 0.0)]);
    }

    #[test]
    fn ends_at_end_point() {
        let spline = CubicSpline::new(
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 10.0),
            Vec2::new(30.0, 10.0),
        )
        .unwrap();
        let points = flatten(&spline, 0.25);
        assert!(points.len() > 2, "a bent spline needs several chords");
        assert_eq!(*points.last().unwrap(), Point::from_f64(30.0, 10.0));
    }

    #[test]
    fn stays_within_tolerance() {
        let tolerance = 0.25;
        let spline = CubicSpline::new(
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 10.0),
            Vec2::new(30.0, 10.0),
        )
        .unwrap();
        let mut polyline = vec![Vec2::ZERO];
        polyline.extend(flatten(&spline, tolerance).iter().map(|p| p.to_vec2()));
        for i in 0..=100 {
            let t = f64::from(i) / 100.0;
            let dist = dist_to_polyline(spline.eval(t), &polyline);
            // Grid snapping of emitted points can add up to half a device
            // ULP on top of the flattening tolerance.
            assert!(dist <= tolerance + 0.01, "t={t}: {dist}");
        }
    }

    #[test]
    fn callback_failure_stops_decomposition() {
        let spline = CubicSpline::new(
            Vec2::ZERO,
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 0.0),
        )
        .unwrap();
        let mut calls = 0;
        let result = spline.decompose(0.01, &mut |_| {
            calls += 1;
            if calls == 2 {
                Err("stop")
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("stop"));
        assert_eq!(calls, 2);
    }
}
