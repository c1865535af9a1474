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

//! Provides a precision-generic Quaternion type for representing 3D rotations.

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;
use crate::vector::Vec3;
use std::ops::{Add, Mul, MulAssign, Neg, Sub};

/// Represents a quaternion for efficient 3D rotations.
///
/// Quaternions are a four-dimensional complex number system that can represent
/// rotations in 3D space. They are generally more efficient and numerically stable
/// than rotation matrices, avoiding issues like gimbal lock.
///
/// A quaternion is stored as `(x, y, z, w)`, where `[x, y, z]` is the "vector" part
/// and `w` is the "scalar" part. For representing rotations, it should be a "unit
/// quaternion" where `x² + y² + z² + w² = 1`. The type does not enforce this;
/// callers normalize explicitly where it matters.
///
/// The type is generic over the scalar precision; [`Quatf`] and [`Quatd`] are
/// the `f32` and `f64` instantiations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Quaternion<T> {
    /// The x component of the vector part.
    pub x: T,
    /// The y component of the vector part.
    pub y: T,
    /// The z component of the vector part.
    pub z: T,
    /// The scalar (real) part.
    pub w: T,
}

/// A quaternion with `f32` components.
pub type Quatf = Quaternion<f32>;
/// A quaternion with `f64` components.
pub type Quatd = Quaternion<f64>;

// Plain float fields in a `#[repr(C)]` struct; safe to upload to GPU buffers
// as raw bytes.
unsafe impl bytemuck::Zeroable for Quaternion<f32> {}
unsafe impl bytemuck::Pod for Quaternion<f32> {}
unsafe impl bytemuck::Zeroable for Quaternion<f64> {}
unsafe impl bytemuck::Pod for Quaternion<f64> {}

impl<T: Scalar> Quaternion<T> {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
        z: T::ZERO,
        w: T::ONE,
    };

    /// Creates a new quaternion from its raw components.
    ///
    /// Note: This does not guarantee a unit quaternion. For creating rotations,
    /// prefer using `from_axis_angle` or other rotation-specific constructors.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Converts a quaternion of a different precision, component by component.
    ///
    /// Only lossless widenings compile (e.g. [`Quatf`] into [`Quatd`]);
    /// constructing from a scalar type that is not convertible into `T` is a
    /// compile error, not a runtime failure. For the lossy direction use
    /// [`cast`](Self::cast).
    #[inline]
    pub fn from_quaternion<U>(value: Quaternion<U>) -> Self
    where
        U: Scalar,
        T: From<U>,
    {
        Self {
            x: T::from(value.x),
            y: T::from(value.y),
            z: T::from(value.z),
            w: T::from(value.w),
        }
    }

    /// Converts this quaternion to another precision, rounding if necessary.
    #[inline]
    pub fn cast<U: Scalar>(self) -> Quaternion<U> {
        Quaternion {
            x: U::from_f64(self.x.to_f64()),
            y: U::from_f64(self.y.to_f64()),
            z: U::from_f64(self.z.to_f64()),
            w: U::from_f64(self.w.to_f64()),
        }
    }

    /// Creates a quaternion representing a rotation around a given axis by a given angle.
    ///
    /// # Arguments
    ///
    /// * `axis`: The axis of rotation. Must be unit length; it is **not**
    ///   renormalized here (caller responsibility, keeps this hot path cheap).
    /// * `angle_radians`: The angle of the right-handed rotation in radians.
    #[inline]
    pub fn from_axis_angle(axis: Vec3<T>, angle_radians: T) -> Self {
        let half_angle = angle_radians * T::HALF;
        let s = half_angle.sin();
        let c = half_angle.cos();
        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: c,
        }
    }

    /// Creates a quaternion from yaw, pitch, and roll angles in radians.
    ///
    /// Yaw rotates around the Y-axis, pitch around the X-axis, and roll around
    /// the Z-axis; the result applies yaw first, then pitch, then roll, and
    /// equals the Hamilton product `yaw_quat * pitch_quat * roll_quat`.
    pub fn from_yaw_pitch_roll(yaw: T, pitch: T, roll: T) -> Self {
        let (sr, cr) = ((roll * T::HALF).sin(), (roll * T::HALF).cos());
        let (sp, cp) = ((pitch * T::HALF).sin(), (pitch * T::HALF).cos());
        let (sy, cy) = ((yaw * T::HALF).sin(), (yaw * T::HALF).cos());
        Self {
            x: cy * sp * cr + sy * cp * sr,
            y: sy * cp * cr - cy * sp * sr,
            z: cy * cp * sr - sy * sp * cr,
            w: cy * cp * cr + sy * sp * sr,
        }
    }

    /// Calculates the squared length (magnitude) of the quaternion.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Calculates the length (magnitude) of the quaternion.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of the quaternion with a length of 1.
    /// If the quaternion has a near-zero magnitude, it returns the identity
    /// quaternion; no path through here produces NaN.
    pub fn normalized(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > T::EPSILON {
            self * (T::ONE / len_sq.sqrt())
        } else {
            Self::IDENTITY
        }
    }

    /// Normalizes the quaternion in place.
    ///
    /// Same degenerate-length policy as [`normalized`](Self::normalized): a
    /// near-zero-length receiver becomes the identity.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns the conjugate of the quaternion, which negates the vector part.
    #[inline]
    pub fn conjugated(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Conjugates the quaternion in place.
    #[inline]
    pub fn conjugate(&mut self) {
        *self = self.conjugated();
    }

    /// Returns the inverse of the quaternion: the conjugate divided by the
    /// squared length. For a unit quaternion this equals the conjugate; the
    /// general form also supports non-unit inputs.
    ///
    /// A near-zero-length input returns the identity quaternion.
    #[inline]
    pub fn inverted(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > T::EPSILON {
            self.conjugated() * (T::ONE / len_sq)
        } else {
            Self::IDENTITY
        }
    }

    /// Inverts the quaternion in place.
    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverted();
    }

    /// Computes the dot product of two quaternions.
    ///
    /// Usable in method position or as `Quaternion::dot(left, right)`; both
    /// forms compute the same sum of component-wise products.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Rotates a 3D vector by this quaternion.
    pub fn rotate_vec3(&self, v: Vec3<T>) -> Vec3<T> {
        let u = Vec3::new(self.x, self.y, self.z);
        let s = self.w;
        u * (T::TWO * u.dot(v)) + v * (s * s - u.dot(u)) + u.cross(v) * (T::TWO * s)
    }

    /// Performs a Spherical Linear Interpolation (Slerp) between two quaternions.
    ///
    /// Slerp provides a smooth, constant-speed interpolation between two rotations,
    /// following the shortest path on the surface of a 4D sphere. When the operands
    /// are nearly parallel the spherical weights degenerate (division by a
    /// near-zero `sin`), so the interpolation falls back to a normalized linear
    /// blend; this branch is required for numerical stability, not an optimization.
    ///
    /// *   `amount` - The interpolation factor, clamped to the `[0.0, 1.0]` range.
    pub fn slerp(previous: Self, current: Self, amount: T) -> Self {
        let t = crate::clamp(amount, T::ZERO, T::ONE);
        let mut cos_theta = previous.dot(current);
        let mut end = current;

        // If the dot product is negative, the quaternions are more than 90 degrees
        // apart on the 4-sphere; negate one operand to interpolate along the
        // shorter arc (quaternion double cover).
        if cos_theta < T::ZERO {
            cos_theta = -cos_theta;
            end = -current;
        }

        if cos_theta > T::ONE - T::EPSILON {
            // Near-parallel fallback: (1-t)*previous + t*end, renormalized to
            // counter floating-point drift.
            (previous * (T::ONE - t) + end * t).normalized()
        } else {
            let angle = cos_theta.acos();
            let inv_sin_theta = T::ONE / angle.sin();
            let scale_previous = ((T::ONE - t) * angle).sin() * inv_sin_theta;
            let scale_end = (t * angle).sin() * inv_sin_theta;
            previous * scale_previous + end * scale_end
        }
    }

    /// Linearly interpolates between two quaternions, then renormalizes.
    ///
    /// The same shortest-arc sign flip as [`slerp`](Self::slerp) is applied
    /// when the operands' dot product is negative, so the blend never cuts
    /// across the long way around the 4-sphere.
    ///
    /// *   `amount` - The interpolation factor, clamped to the `[0.0, 1.0]` range.
    pub fn lerp(previous: Self, current: Self, amount: T) -> Self {
        let t = crate::clamp(amount, T::ZERO, T::ONE);
        let end = if previous.dot(current) < T::ZERO {
            -current
        } else {
            current
        };
        (previous * (T::ONE - t) + end * t).normalized()
    }

    /// Concatenates two rotations: the result represents `left`'s rotation
    /// followed by `right`'s rotation.
    ///
    /// With the Hamilton product convention used by [`Mul`] (where `a * b`
    /// rotates by `b` first, then `a`), this is `right * left`.
    #[inline]
    pub fn concat(left: Self, right: Self) -> Self {
        right * left
    }
}

// --- Operator Overloads ---

impl<T: Scalar> Default for Quaternion<T> {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Mul<Quaternion<T>> for Quaternion<T> {
    type Output = Self;
    /// Combines two rotations using the Hamilton product.
    /// Note that quaternion multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl<T: Scalar> MulAssign<Quaternion<T>> for Quaternion<T> {
    /// Combines this rotation with another.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Mul<Vec3<T>> for Quaternion<T> {
    type Output = Vec3<T>;
    /// Rotates a `Vec3` by this quaternion.
    #[inline]
    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        self.normalized().rotate_vec3(rhs)
    }
}

impl<T: Scalar> Add<Quaternion<T>> for Quaternion<T> {
    type Output = Self;
    /// Adds two quaternions component-wise.
    /// Note: This is not a standard rotation operation.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl<T: Scalar> Sub<Quaternion<T>> for Quaternion<T> {
    type Output = Self;
    /// Subtracts two quaternions component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl<T: Scalar> Mul<T> for Quaternion<T> {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: T) -> Self::Output {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w * scalar,
        }
    }
}

impl<T: Scalar> Neg for Quaternion<T> {
    type Output = Self;
    /// Negates all components of the quaternion.
    /// The negation represents the same rotation (double cover).
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}
