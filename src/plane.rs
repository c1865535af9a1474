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

//! Provides an infinite plane primitive.

use serde::{Deserialize, Serialize};

use crate::vector::Vec3f;

/// An infinite plane in 3D space.
///
/// The plane is stored in constant-normal form: a point `p` lies on the
/// plane when `normal.dot(p) + distance == 0`. With a unit `normal`,
/// `distance` is the signed offset of the plane from the origin along the
/// normal (a plane at `z = 5` has normal `(0, 0, 1)` and distance `-5`).
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
pub struct Plane {
    /// The unit normal vector of the plane.
    pub normal: Vec3f,
    /// The signed distance from the origin along the normal.
    pub distance: f32,
}

impl Plane {
    /// Creates a plane from a normal and a signed distance.
    ///
    /// The components are stored verbatim; `normal` is expected to be unit
    /// length (caller responsibility).
    #[inline]
    pub const fn new(normal: Vec3f, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Creates a plane passing through `point` with the given normal.
    ///
    /// The normal is normalized before use.
    #[inline]
    pub fn from_point_normal(point: Vec3f, normal: Vec3f) -> Self {
        let normal = normal.normalize();
        Self {
            normal,
            distance: -normal.dot(point),
        }
    }

    /// Returns the signed distance from `point` to the plane.
    ///
    /// Positive on the side the normal points toward, negative behind, and
    /// zero on the plane itself.
    #[inline]
    pub fn distance_to_point(&self, point: Vec3f) -> f32 {
        self.normal.dot(point) + self.distance
    }
}
