// Copyright 2024 the Hairline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-point device coordinates.

use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A signed fixed-point device coordinate, with 24 integer bits and 8
/// fractional bits.
///
/// Device geometry is snapped onto this grid, so two coordinates that are
/// "the same" compare exactly equal. That exactness is load-bearing: the
/// stroker decides between a join and a cap by comparing endpoints with `==`,
/// with no epsilon.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fixed(i32);

/// Number of fractional bits.
const FRAC_BITS: u32 = 8;

/// One device unit as a float.
const ONE_F64: f64 = (1 << FRAC_BITS) as f64;

impl Fixed {
    /// The coordinate 0.
    pub const ZERO: Fixed = Fixed(0);

    /// One device unit.
    pub const ONE: Fixed = Fixed(1 << FRAC_BITS);

    /// A coordinate at a whole number of device units.
    #[inline]
    pub const fn from_int(i: i32) -> Fixed {
        Fixed(i << FRAC_BITS)
    }

    /// The nearest representable coordinate to `x` device units.
    #[inline]
    pub fn from_f64(x: f64) -> Fixed {
        Fixed((x * ONE_F64).round() as i32)
    }

    /// This coordinate in device units.
    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / ONE_F64
    }

    /// The raw fixed-point payload.
    #[inline]
    pub const fn to_raw(self) -> i32 {
        self.0
    }

    /// A coordinate from a raw fixed-point payload.
    #[inline]
    pub const fn from_raw(raw: i32) -> Fixed {
        Fixed(raw)
    }
}

impl Add for Fixed {
    type Output = Fixed;

    #[inline]
    fn add(self, other: Fixed) -> Fixed {
        Fixed(self.0 + other.0)
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, other: Fixed) {
        self.0 += other.0;
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    #[inline]
    fn sub(self, other: Fixed) -> Fixed {
        Fixed(self.0 - other.0)
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, other: Fixed) {
        self.0 -= other.0;
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    #[inline]
    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), formatter)
    }
}
