// Copyright 2024 the Hairline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float intrinsics routed through libm when the standard library is off.

/// Defines a trait that chooses between libstd or libm implementations of
/// float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs: Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(#[inline]
            fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("hairline requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn hypot(self, other: Self) -> Self => hypot;
    fn round(self) -> Self => round;
    fn sin_cos(self) -> (Self, Self) => sincos;
}
