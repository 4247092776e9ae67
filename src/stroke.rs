// Copyright 2024 the Hairline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke styles.

use core::borrow::Borrow;

use smallvec::SmallVec;

/// Defines the connection between two segments of a stroke.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Join {
    /// A straight line connecting the segments.
    Bevel,
    /// The segments are extended to their natural intersection point.
    Miter,
    /// An arc between the segments.
    Round,
}

/// Defines the shape to be drawn at the ends of a stroke.
///
/// At hairline width, `Square` and `Round` caps are indistinguishable: both
/// extend the stroke by half a device unit along its slope. Only `Butt` is
/// treated specially.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cap {
    /// Flat cap.
    Butt,
    /// Square cap with dimensions equal to half the stroke width.
    Square,
    /// Rounded cap with radius equal to half the stroke width.
    Round,
}

/// Collection of values representing lengths in a dash pattern.
pub type Dashes = SmallVec<[f64; 4]>;

/// Describes the visual style of a stroke.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stroke {
    /// Width of the stroke, in device units.
    pub width: f64,
    /// Style for connecting segments of the stroke.
    pub join: Join,
    /// Limit for miter joins.
    pub miter_limit: f64,
    /// Style for capping the ends of an open subpath.
    pub cap: Cap,
    /// Lengths of dashes in alternating on/off order.
    pub dash_pattern: Dashes,
    /// Offset of the first dash.
    pub dash_offset: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            join: Join::Miter,
            miter_limit: 10.0,
            cap: Cap::Butt,
            dash_pattern: Default::default(),
            dash_offset: 0.0,
        }
    }
}

impl Stroke {
    /// Creates a new stroke with the specified width.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Builder method for setting the join style.
    pub fn with_join(mut self, join: Join) -> Self {
        self.join = join;
        self
    }

    /// Builder method for setting the limit for miter joins.
    pub fn with_miter_limit(mut self, limit: f64) -> Self {
        self.miter_limit = limit;
        self
    }

    /// Builder method for setting the cap style.
    pub fn with_caps(mut self, cap: Cap) -> Self {
        self.cap = cap;
        self
    }

    /// Builder method for setting the dashing parameters.
    pub fn with_dashes<P>(mut self, offset: f64, pattern: P) -> Self
    where
        P: IntoIterator,
        P::Item: Borrow<f64>,
    {
        self.dash_offset = offset;
        self.dash_pattern.clear();
        self.dash_pattern
            .extend(pattern.into_iter().map(|dash| *dash.borrow()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let style = Stroke::default();
        assert_eq!(style.width, 1.0);
        assert_eq!(style.cap, Cap::Butt);
        assert_eq!(style.join, Join::Miter);
        assert_eq!(style.miter_limit, 10.0);
        assert!(style.dash_pattern.is_empty());
    }

    #[test]
    fn builders() {
        let style = Stroke::new(1.0)
            .with_caps(Cap::Round)
            .with_join(Join::Bevel)
            .with_miter_limit(4.0)
            .with_dashes(1.5, [4.0, 2.0]);
        assert_eq!(style.cap, Cap::Round);
        assert_eq!(style.join, Join::Bevel);
        assert_eq!(style.miter_limit, 4.0);
        assert_eq!(style.dash_offset, 1.5);
        assert_eq!(style.dash_pattern.as_slice(), &[4.0, 2.0]);
    }
}
