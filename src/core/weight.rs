/*!
# Weight-Type Polymorphism

The engine is instantiated over the weight type chosen by the caller: single- or
double-precision floating point. This module realizes that through a sealed trait
implemented only for `f32` and `f64` rather than runtime dispatch, and rather than
pulling in a generic-numerics crate the rest of this codebase does not depend on.
*/

use std::fmt::Debug;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Edge/vertex weight scalar used throughout the engine.
///
/// Implemented only for `f32` and `f64`; this trait cannot be implemented outside this
/// crate, since no runtime dispatch over the weight type is required or desirable.
pub trait Weight:
    sealed::Sealed
    + Copy
    + Send
    + Sync
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Sum
{
    /// The additive identity.
    const ZERO: Self;

    /// The default convergence tolerance used by the inner loop: `1e-4` in the weight type.
    const CONVERGENCE_TOLERANCE: Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;

    /// Returns `true` if the value is NaN.
    fn is_nan(self) -> bool;

    /// Returns `true` if the value is strictly negative.
    fn is_negative(self) -> bool;

    /// Widens to `f64`, used only for computing the modularity formula's literal test
    /// expectations and for tolerance comparisons that are easier to express in one precision.
    fn to_f64(self) -> f64;

    /// Narrows from `f64`.
    fn from_f64(value: f64) -> Self;
}

impl Weight for f32 {
    const ZERO: Self = 0.0;
    const CONVERGENCE_TOLERANCE: Self = 1e-4;

    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    fn is_negative(self) -> bool {
        self < 0.0
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Weight for f64 {
    const ZERO: Self = 0.0;
    const CONVERGENCE_TOLERANCE: Self = 1e-4;

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    fn is_negative(self) -> bool {
        self < 0.0
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}
