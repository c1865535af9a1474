// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scalar abstraction over the supported floating-point precisions.
//!
//! The rotation algebra in this crate is written once against the [`Scalar`]
//! trait and monomorphized per precision; there is no runtime dispatch on
//! these hot-path value types.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// The numeric capabilities the kernel needs from a scalar type.
///
/// Implemented for `f32` and `f64` only.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
    /// One half.
    const HALF: Self;
    /// Two.
    const TWO: Self;
    /// Comparison tolerance for degenerate-length and parallelism checks.
    const EPSILON: Self;

    /// Computes the square root.
    fn sqrt(self) -> Self;
    /// Computes the absolute value.
    fn abs(self) -> Self;
    /// Computes the sine of an angle in radians.
    fn sin(self) -> Self;
    /// Computes the cosine of an angle in radians.
    fn cos(self) -> Self;
    /// Computes the arccosine, returning an angle in radians.
    fn acos(self) -> Self;

    /// Converts an `f64` into this scalar type, rounding if necessary.
    fn from_f64(value: f64) -> Self;
    /// Converts this scalar into an `f64` exactly.
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($t:ty, $eps:expr) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const HALF: Self = 0.5;
            const TWO: Self = 2.0;
            const EPSILON: Self = $eps;

            #[inline]
            fn sqrt(self) -> Self {
                self.sqrt()
            }

            #[inline]
            fn abs(self) -> Self {
                self.abs()
            }

            #[inline]
            fn sin(self) -> Self {
                self.sin()
            }

            #[inline]
            fn cos(self) -> Self {
                self.cos()
            }

            #[inline]
            fn acos(self) -> Self {
                self.acos()
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_scalar!(f32, 1e-5);
impl_scalar!(f64, 1e-9);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_consts_match_literals() {
        assert_eq!(f32::ZERO, 0.0);
        assert_eq!(f32::ONE, 1.0);
        assert_eq!(f64::HALF, 0.5);
        assert_eq!(f64::TWO, 2.0);
    }

    #[test]
    fn test_f64_roundtrip() {
        let x = 0.125_f32;
        assert_relative_eq!(f32::from_f64(x.to_f64()), x);

        let y = 1.0e-12_f64;
        assert_relative_eq!(f64::from_f64(y), y);
    }

    #[test]
    fn test_trig_dispatches_to_inherent_impls() {
        assert_relative_eq!(Scalar::sin(std::f32::consts::FRAC_PI_2), 1.0);
        assert_relative_eq!(Scalar::acos(1.0_f64), 0.0);
        assert_relative_eq!(Scalar::sqrt(4.0_f32), 2.0);
    }
}
