// Copyright 2026 the Deboor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers shared by the geometry types.

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("deboor requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn hypot(self, other: Self) -> Self => hypot;
}

/// Relative tolerance used when comparing points.
///
/// Scaled by the magnitude of the values compared, with `f64::EPSILON` as
/// the floor for values near zero.
#[inline]
pub(crate) fn tolerance(magnitude: f64, accuracy: f64) -> f64 {
    accuracy.max(magnitude.abs() * 1e-10).max(f64::EPSILON)
}
