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

//! Provides the 3D vector type and its associated operations.

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// A 3-dimensional vector, generic over the scalar precision.
///
/// The type parameter is normally `f32` ([`Vec3f`]) for render-facing data
/// or `f64` ([`Vec3d`]) where accumulated error matters.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Vec3<T> {
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
}

/// A 3-dimensional vector with `f32` components.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with `f64` components.
pub type Vec3d = Vec3<f64>;

// Plain `f32`/`f64` fields in a `#[repr(C)]` struct; safe to upload to GPU
// buffers as raw bytes.
unsafe impl bytemuck::Zeroable for Vec3<f32> {}
unsafe impl bytemuck::Pod for Vec3<f32> {}
unsafe impl bytemuck::Zeroable for Vec3<f64> {}
unsafe impl bytemuck::Pod for Vec3<f64> {}

impl<T: Scalar> Vec3<T> {
    /// A vector with all components set to zero.
    pub const ZERO: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
        z: T::ZERO,
    };
    /// A vector with all components set to one.
    pub const ONE: Self = Self {
        x: T::ONE,
        y: T::ONE,
        z: T::ONE,
    };
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self {
        x: T::ONE,
        y: T::ZERO,
        z: T::ZERO,
    };
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self {
        x: T::ZERO,
        y: T::ONE,
        z: T::ZERO,
    };
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
        z: T::ONE,
    };

    /// Creates a new `Vec3` with the specified components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Returns a new vector with the absolute value of each component.
    #[inline]
    pub fn abs(self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }

    /// Calculates the squared length (magnitude) of the vector.
    /// This is faster than `length()` as it avoids a square root.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of the vector with a length of 1.
    /// If the vector's length is near zero, it returns `Vec3::ZERO`.
    #[inline]
    pub fn normalize(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > T::EPSILON * T::EPSILON {
            *self * (T::ONE / len_sq.sqrt())
        } else {
            Self::ZERO
        }
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product of this vector and another.
    /// The resulting vector is perpendicular to both inputs (right-handed).
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Calculates the squared distance between two points.
    #[inline]
    pub fn distance_squared(&self, other: Self) -> T {
        (*self - other).length_squared()
    }

    /// Calculates the distance between two points.
    #[inline]
    pub fn distance(&self, other: Self) -> T {
        self.distance_squared(other).sqrt()
    }

    /// Performs a linear interpolation between two vectors.
    /// The interpolation factor `t` is clamped to the `[0.0, 1.0]` range.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: T) -> Self {
        start + (end - start) * crate::clamp(t, T::ZERO, T::ONE)
    }
}

impl<T: Scalar> Default for Vec3<T> {
    /// Returns the zero vector.
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// --- Operator Overloads ---

impl<T: Scalar> Add for Vec3<T> {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl<T: Scalar> Sub for Vec3<T> {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, scalar: T) -> Self::Output {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Mul<Vec3<f32>> for f32 {
    type Output = Vec3<f32>;
    /// Multiplies the vector by a scalar (scalar on the left).
    #[inline]
    fn mul(self, vec: Vec3<f32>) -> Self::Output {
        vec * self
    }
}

impl Mul<Vec3<f64>> for f64 {
    type Output = Vec3<f64>;
    /// Multiplies the vector by a scalar (scalar on the left).
    #[inline]
    fn mul(self, vec: Vec3<f64>) -> Self::Output {
        vec * self
    }
}

impl<T: Scalar> Mul<Vec3<T>> for Vec3<T> {
    type Output = Self;
    /// Multiplies two vectors component-wise (Hadamard product).
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}

impl<T: Scalar> Div<T> for Vec3<T> {
    type Output = Self;
    /// Divides the vector by a scalar.
    #[inline]
    fn div(self, scalar: T) -> Self::Output {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl<T: Scalar> Neg for Vec3<T> {
    type Output = Self;
    /// Negates all components of the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: Scalar> Index<usize> for Vec3<T> {
    type Output = T;
    /// Accesses a component by index (0 = x, 1 = y, 2 = z).
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", index),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vec3<T> {
    /// Mutably accesses a component by index (0 = x, 1 = y, 2 = z).
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx_eq;
    use approx::assert_relative_eq;

    #[test]
    fn test_consts_and_new() {
        assert_eq!(Vec3f::ZERO, Vec3f::new(0.0, 0.0, 0.0));
        assert_eq!(Vec3f::ONE, Vec3f::new(1.0, 1.0, 1.0));
        assert_eq!(Vec3f::X, Vec3f::new(1.0, 0.0, 0.0));
        assert_eq!(Vec3f::Y, Vec3f::new(0.0, 1.0, 0.0));
        assert_eq!(Vec3f::Z, Vec3f::new(0.0, 0.0, 1.0));
        assert_eq!(Vec3f::default(), Vec3f::ZERO);
    }

    #[test]
    fn test_arithmetic_operators() {
        let a = Vec3f::new(1.0, 2.0, 3.0);
        let b = Vec3f::new(4.0, -5.0, 6.0);

        assert_eq!(a + b, Vec3f::new(5.0, -3.0, 9.0));
        assert_eq!(a - b, Vec3f::new(-3.0, 7.0, -3.0));
        assert_eq!(a * 2.0, Vec3f::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vec3f::new(2.0, 4.0, 6.0));
        assert_eq!(a * b, Vec3f::new(4.0, -10.0, 18.0));
        assert_eq!(a / 2.0, Vec3f::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Vec3f::new(-1.0, -2.0, -3.0));
        assert_eq!(b.abs(), Vec3f::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_length_and_dot() {
        let v = Vec3f::new(2.0, 3.0, 6.0);
        assert_relative_eq!(v.length_squared(), 49.0);
        assert_relative_eq!(v.length(), 7.0);

        let a = Vec3f::new(1.0, 2.0, 3.0);
        let b = Vec3f::new(4.0, 5.0, 6.0);
        assert_relative_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vec3f::new(0.0, 3.0, 4.0);
        let n = v.normalize();
        assert_relative_eq!(n.length(), 1.0, epsilon = crate::EPSILON);
        assert!(approx_eq(n.y, 0.6));
        assert!(approx_eq(n.z, 0.8));

        // Degenerate input collapses to zero rather than producing NaN.
        assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
    }

    #[test]
    fn test_cross_is_right_handed() {
        assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
        assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
        assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
        assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    }

    #[test]
    fn test_distance() {
        let a = Vec3f::new(1.0, 1.0, 1.0);
        let b = Vec3f::new(1.0, 4.0, 5.0);
        assert_relative_eq!(a.distance_squared(b), 25.0);
        assert_relative_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_lerp_clamps_t() {
        let a = Vec3f::ZERO;
        let b = Vec3f::new(10.0, 0.0, 0.0);

        assert_eq!(Vec3f::lerp(a, b, 0.5), Vec3f::new(5.0, 0.0, 0.0));
        assert_eq!(Vec3f::lerp(a, b, -1.0), a);
        assert_eq!(Vec3f::lerp(a, b, 2.0), b);
    }

    #[test]
    fn test_index_access() {
        let mut v = Vec3f::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
        v[1] = 5.0;
        assert_eq!(v.y, 5.0);
    }

    #[test]
    fn test_f64_instantiation() {
        let v = Vec3d::new(3.0, 0.0, 4.0);
        assert_relative_eq!(v.length(), 5.0);
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-12);
    }
}
