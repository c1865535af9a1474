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

//! Provides a ray primitive with a ray-plane intersection test.

use serde::{Deserialize, Serialize};

use crate::plane::Plane;
use crate::vector::Vec3f;
use crate::EPSILON;

/// A half-line in 3D space, parameterized as `P(t) = position + t * direction`
/// for `t >= 0`.
///
/// Used by picking, culling, and physics queries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Serialize,
    Deserialize,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
#[repr(C)]
pub struct Ray {
    /// The starting point of the ray.
    pub position: Vec3f,
    /// The direction the ray is pointing. Expected to be unit length; the
    /// constructor does not normalize it.
    pub direction: Vec3f,
}

impl Ray {
    /// Creates a ray from a starting point and a direction.
    ///
    /// Both fields are stored verbatim; callers pass a unit-length direction.
    #[inline]
    pub const fn new(position: Vec3f, direction: Vec3f) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Evaluates the point on the ray at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3f {
        self.position + self.direction * t
    }

    /// Computes the ray parameter at which this ray crosses `plane`.
    ///
    /// Returns `None` when the ray is parallel to the plane (the denominator
    /// `direction . normal` is within [`EPSILON`] of zero) or when the
    /// crossing lies behind the ray origin (`t < 0`); rays are half-lines.
    /// A forward hit returns `Some(t)` with `t >= 0`, distinct from the
    /// parallel case even when `t` would be zero.
    pub fn intersects(&self, plane: &Plane) -> Option<f32> {
        let denom = self.direction.dot(plane.normal);
        if denom.abs() < EPSILON {
            return None;
        }

        let t = -(self.position.dot(plane.normal) + plane.distance) / denom;
        if t < 0.0 {
            None
        } else {
            Some(t)
        }
    }
}
