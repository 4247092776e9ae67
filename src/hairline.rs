// Copyright 2024 the Hairline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroking paths one device pixel wide.

use crate::{Affine, Cap, CubicSpline, DashState, Join, Line, PathEl, Point, Stroke, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// How far the basis scale factors of a transform may stray from 1.0 while
/// the transform still counts as isometric for stroking purposes.
const SCALE_TOLERANCE: f64 = 1e-7;

/// Whether a stroke style and transform qualify for hairline stroking.
///
/// True only if the stroke is exactly one device unit wide, the join style
/// cannot produce long miter spikes (a miter join with a limit above 10 is
/// rejected), and `ctm` maps user space to device space without meaningful
/// scaling in either axis. Pure; no side effects.
pub fn can_use_hairline(style: &Stroke, ctm: Affine) -> bool {
    if style.width != 1.0 {
        return false;
    }

    if style.join == Join::Miter && style.miter_limit > 10.0 {
        return false;
    }

    let Some((x, y)) = ctm.basis_scale_factors() else {
        return false;
    };
    (x - 1.0).abs() <= SCALE_TOLERANCE && (y - 1.0).abs() <= SCALE_TOLERANCE
}

/// Map a device-space delta into user space and normalize it.
///
/// Returns the unit direction and the pre-normalization magnitude, or `None`
/// for a zero-length delta, which the caller must treat as "no geometry to
/// emit". Axis-aligned deltas snap to exact ±1/0 components so horizontal
/// and vertical lines never pick up trigonometric rounding.
fn normalized_slope(device_delta: Vec2, ctm_inverse: Affine) -> Option<(Vec2, f64)> {
    let delta = ctm_inverse * device_delta;

    if delta.x == 0.0 && delta.y == 0.0 {
        return None;
    }

    if delta.x == 0.0 {
        if delta.y > 0.0 {
            Some((Vec2::new(0.0, 1.0), delta.y))
        } else {
            Some((Vec2::new(0.0, -1.0), -delta.y))
        }
    } else if delta.y == 0.0 {
        if delta.x > 0.0 {
            Some((Vec2::new(1.0, 0.0), delta.x))
        } else {
            Some((Vec2::new(-1.0, 0.0), -delta.x))
        }
    } else {
        let mag = delta.hypot();
        Some((delta / mag, mag))
    }
}

/// Internal state for one hairline stroke traversal.
struct HairlineCtx<F> {
    tolerance: f64,
    dash: DashState,
    ctm: Affine,
    ctm_inverse: Affine,
    cap: Cap,
    /// Current pen position.
    current: Point,
    /// First point of the active subpath; `close_path` targets this.
    subpath_start: Point,
    /// Endpoint and direction of the most recent segment on the active
    /// subpath. Meaningless unless `drew_segments` is set.
    last_end: Point,
    last_dir: Vec2,
    drew_segments: bool,
    /// Set only around the final line of `close_path`.
    closing: bool,
    /// Half a device unit, mapped through `ctm`. Computed once per stroke.
    half: Vec2,
    sink: F,
}

impl<F, E> HairlineCtx<F>
where
    F: FnMut(Line) -> Result<(), E>,
{
    /// The endpoint offset representing a cap or join for a segment with
    /// unit direction `dir`, decomposed component-wise.
    #[inline]
    fn cap_offset(&self, dir: Vec2) -> Vec2 {
        Vec2::new(self.half.x * dir.x, self.half.y * dir.y)
    }

    /// Extend the previous segment past its endpoint by half a unit along
    /// its own slope. This materializes the end cap of a segment that will
    /// not be joined to anything.
    fn add_trailing_cap(&mut self) -> Result<(), E> {
        let p1 = self.last_end;
        let p2 = p1 + self.cap_offset(self.last_dir);
        (self.sink)(Line::new(p1, p2))
    }

    /// Emit one segment, adjusting its endpoints for caps and joins.
    ///
    /// Everything here rests on the hairline trick: every join, and every
    /// cap except a butt cap, can be drawn by moving an endpoint half the
    /// line width (0.5 device units) along the segment's slope.
    fn add_segment(&mut self, p1: Point, p2: Point, dir: Vec2) -> Result<(), E> {
        let offset = self.cap_offset(dir);
        let mut a = p1;
        let mut b = p2;
        let using_butt_cap = self.cap == Cap::Butt;

        if self.drew_segments {
            let last_segment_touches = self.last_end == p1;

            // Earlier segments on this subpath don't reach the one we are
            // about to draw, so the previous segment ends here; give it its
            // cap before moving on.
            if !last_segment_touches && !using_butt_cap {
                self.add_trailing_cap()?;
            }

            // Touching the previous segment means a join; not touching
            // means a leading cap. Both pull the start point back by half a
            // unit, and a butt cap pulls nothing.
            if last_segment_touches || !using_butt_cap {
                a = a + -offset;
            }
        } else if !using_butt_cap {
            // First segment on the subpath. Whether the subpath ends up
            // closed or open, the start point gets the same half-unit pull:
            // a leading cap and a join look the same at this width.
            a = a + -offset;
        }

        // Closing under butt caps still needs a join at the seam, and the
        // first segment didn't draw one; extend the end point to fill it.
        if self.closing && using_butt_cap && p2 == self.subpath_start {
            b = b + offset;
        }

        self.drew_segments = true;
        self.last_end = p2;
        self.last_dir = dir;

        (self.sink)(Line::new(a, b))
    }

    fn move_to(&mut self, p: Point) -> Result<(), E> {
        self.dash.start();

        let mut status = Ok(());
        if self.drew_segments && self.cap != Cap::Butt {
            status = self.add_trailing_cap();
        }
        self.drew_segments = false;

        self.subpath_start = p;
        self.current = p;

        status
    }

    /// Dash-aware line entry point. Both the path dispatch loop and curve
    /// flattening come through here, so dashing applies per flattened chord.
    fn line_to(&mut self, p2: Point) -> Result<(), E> {
        if self.dash.is_dashed() {
            self.line_to_dashed(p2)
        } else {
            self.line_to_undashed(p2)
        }
    }

    fn line_to_undashed(&mut self, p2: Point) -> Result<(), E> {
        let p1 = self.current;
        let Some((dir, _)) = normalized_slope(p2 - p1, self.ctm_inverse) else {
            return Ok(());
        };

        let status = self.add_segment(p1, p2, dir);
        self.current = p2;
        status
    }

    fn line_to_dashed(&mut self, p2: Point) -> Result<(), E> {
        let p1 = self.current;
        let Some((dir, mag)) = normalized_slope(p2 - p1, self.ctm_inverse) else {
            return Ok(());
        };

        let mut remain = mag;
        let mut dash_start = p1;
        while remain > 0.0 {
            let step = self.dash.remaining().max(0.0).min(remain);
            remain -= step;

            // Step points are measured from p1, not accumulated, to keep
            // rounding from drifting along long dashed segments.
            let dash_end = p1 + self.ctm * (dir * (mag - remain));
            if self.dash.is_on() {
                self.add_segment(dash_start, dash_end, dir)?;
            }

            self.dash.step(step);
            dash_start = dash_end;
        }

        self.current = p2;
        Ok(())
    }

    fn curve_to(&mut self, p1: Point, p2: Point, p3: Point) -> Result<(), E> {
        let p0 = self.current;
        match CubicSpline::new(p0.to_vec2(), p1.to_vec2(), p2.to_vec2(), p3.to_vec2()) {
            Some(spline) => {
                let tolerance = self.tolerance;
                spline.decompose(tolerance, &mut |p| self.line_to(p))
            }
            None => self.line_to(p3),
        }
    }

    fn close_path(&mut self) -> Result<(), E> {
        self.closing = true;
        let status = self.line_to(self.subpath_start);
        self.closing = false;
        status
    }

    /// Close out the final subpath once the path runs out of elements,
    /// exactly as a trailing `move_to` would.
    fn finish(&mut self) -> Result<(), E> {
        if self.drew_segments && self.cap != Cap::Butt {
            self.drew_segments = false;
            return self.add_trailing_cap();
        }
        Ok(())
    }
}

/// Stroke a path one device pixel wide, emitting line segments to `sink`.
///
/// `ctm` maps user space to device space and `ctm_inverse` is its inverse;
/// both are needed because the half-pixel cap and join offsets are computed
/// from user-space slopes and applied in device space. `tolerance` is the
/// positive curve-flattening error bound, in device units.
///
/// The sink is called once per emitted segment, in path order, and must not
/// itself re-enter the stroker. Callers are expected to check
/// [`can_use_hairline`] first; on an ineligible style this emits unspecified
/// geometry rather than failing.
///
/// # Errors
///
/// The only failure source is the sink: its first error is returned
/// immediately and no further path elements are processed. Segments already
/// handed to the sink are not rolled back.
pub fn stroke<E>(
    path: impl IntoIterator<Item = PathEl>,
    style: &Stroke,
    ctm: Affine,
    ctm_inverse: Affine,
    tolerance: f64,
    sink: impl FnMut(Line) -> Result<(), E>,
) -> Result<(), E> {
    let mut ctx = HairlineCtx {
        tolerance,
        dash: DashState::new(style),
        ctm,
        ctm_inverse,
        cap: style.cap,
        current: Point::ZERO,
        subpath_start: Point::ZERO,
        last_end: Point::ZERO,
        last_dir: Vec2::ZERO,
        drew_segments: false,
        closing: false,
        half: ctm * Vec2::new(0.5, 0.5),
        sink,
    };

    for el in path {
        match el {
            PathEl::MoveTo(p) => ctx.move_to(p)?,
            PathEl::LineTo(p) => ctx.line_to(p)?,
            PathEl::CurveTo(p1, p2, p3) => ctx.curve_to(p1, p2, p3)?,
            PathEl::ClosePath => ctx.close_path()?,
        }
    }
    ctx.finish()
}
