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

//! Provides the bounding-sphere primitive for spatial calculations.
//!
//! Bounding spheres are the cheapest enclosing volume to transform and test,
//! which makes them the first line of visibility culling and broad rejection
//! before tighter checks run.

use serde::{Deserialize, Serialize};

use crate::vector::Vec3f;
use crate::EPSILON;

/// A sphere enclosing a piece of geometry, defined by a center and a radius.
///
/// The radius is expected to be non-negative; the type stores what it is
/// given and does not validate.
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
pub struct BoundingSphere {
    /// The center point of the sphere.
    pub center: Vec3f,
    /// The radius of the sphere.
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a sphere from a center point and a radius.
    #[inline]
    pub const fn new(center: Vec3f, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Creates a sphere that encloses a given set of points.
    ///
    /// The center is the centroid of the points and the radius the distance
    /// to the farthest one; not minimal, but cheap and always enclosing.
    ///
    /// # Returns
    ///
    /// Returns `Some(BoundingSphere)` if the input slice is not empty,
    /// otherwise `None`.
    pub fn from_points(points: &[Vec3f]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut sum = Vec3f::ZERO;
        for point in points {
            sum = sum + *point;
        }
        let center = sum / points.len() as f32;

        let mut radius_squared = 0.0f32;
        for point in points {
            radius_squared = radius_squared.max(center.distance_squared(*point));
        }

        Some(Self {
            center,
            radius: radius_squared.sqrt(),
        })
    }

    /// Checks if a point is contained within or on the boundary of the sphere.
    #[inline]
    pub fn contains_point(&self, point: Vec3f) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Checks if another sphere lies entirely within this one.
    #[inline]
    pub fn contains_sphere(&self, other: &BoundingSphere) -> bool {
        self.center.distance(other.center) + other.radius <= self.radius
    }

    /// Creates the smallest sphere that contains both this sphere and another.
    ///
    /// When one input already contains the other, that input is returned
    /// unchanged (an exact short-circuit, not an approximation). Spheres with
    /// coincident centers never divide by the zero center distance; the
    /// larger-radius input is returned instead.
    pub fn merge(&self, other: &BoundingSphere) -> Self {
        let offset = other.center - self.center;
        let distance = offset.length();

        // Containment short-circuit: |rA - rB| >= d means one sphere already
        // encloses the other.
        if self.radius + other.radius >= distance {
            if self.radius - other.radius >= distance {
                return *self;
            }
            if other.radius - self.radius >= distance {
                return *other;
            }
        }

        // Near-coincident centers with near-equal radii survive the check
        // above; the inter-center direction is undefined there.
        if distance < EPSILON {
            return if self.radius >= other.radius {
                *self
            } else {
                *other
            };
        }

        // The merged sphere's surface passes through the two extreme points
        // along the center-to-center axis.
        let direction = offset * (1.0 / distance);
        let min_extent = (-self.radius).min(distance - other.radius);
        let max_extent = (self.radius.max(distance + other.radius) - min_extent) * 0.5;

        Self {
            center: self.center + direction * (max_extent + min_extent),
            radius: max_extent,
        }
    }
}

impl Default for BoundingSphere {
    /// Returns a degenerate sphere at the origin with zero radius.
    #[inline]
    fn default() -> Self {
        Self {
            center: Vec3f::ZERO,
            radius: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sphere_approx_eq(a: BoundingSphere, b: BoundingSphere) -> bool {
        crate::approx_eq(a.center.distance(b.center), 0.0) && crate::approx_eq(a.radius, b.radius)
    }

    // Six axis-aligned boundary points plus the two poles of an oblique axis.
    fn boundary_points(sphere: &BoundingSphere) -> Vec<Vec3f> {
        let oblique = Vec3f::new(1.0, 1.0, 1.0).normalize();
        [
            Vec3f::X,
            -Vec3f::X,
            Vec3f::Y,
            -Vec3f::Y,
            Vec3f::Z,
            -Vec3f::Z,
            oblique,
            -oblique,
        ]
        .iter()
        .map(|dir| sphere.center + *dir * sphere.radius)
        .collect()
    }

    #[test]
    fn test_default_is_degenerate_at_origin() {
        let sphere = BoundingSphere::default();
        assert_eq!(sphere.center, Vec3f::ZERO);
        assert_eq!(sphere.radius, 0.0);
        assert!(sphere.contains_point(Vec3f::ZERO));
    }

    #[test]
    fn test_contains_point() {
        let sphere = BoundingSphere::new(Vec3f::new(1.0, 0.0, 0.0), 2.0);
        assert!(sphere.contains_point(Vec3f::new(1.0, 0.0, 0.0)));
        assert!(sphere.contains_point(Vec3f::new(3.0, 0.0, 0.0))); // Boundary
        assert!(sphere.contains_point(Vec3f::new(2.0, 1.0, -1.0)));
        assert!(!sphere.contains_point(Vec3f::new(3.1, 0.0, 0.0)));
    }

    #[test]
    fn test_contains_sphere() {
        let outer = BoundingSphere::new(Vec3f::ZERO, 5.0);
        let inner = BoundingSphere::new(Vec3f::new(1.0, 1.0, 0.0), 1.0);
        let crossing = BoundingSphere::new(Vec3f::new(4.0, 0.0, 0.0), 3.0);

        assert!(outer.contains_sphere(&inner));
        assert!(outer.contains_sphere(&outer));
        assert!(!outer.contains_sphere(&crossing));
        assert!(!inner.contains_sphere(&outer));
    }

    #[test]
    fn test_from_points() {
        assert!(BoundingSphere::from_points(&[]).is_none());

        let points = [
            Vec3f::new(-1.0, 0.0, 0.0),
            Vec3f::new(1.0, 0.0, 0.0),
            Vec3f::new(0.0, 2.0, 0.0),
            Vec3f::new(0.0, -2.0, 0.0),
        ];
        let sphere = BoundingSphere::from_points(&points).unwrap();
        assert!(crate::approx_eq(sphere.center.distance(Vec3f::ZERO), 0.0));
        assert_relative_eq!(sphere.radius, 2.0, epsilon = crate::EPSILON);
        for point in &points {
            assert!(sphere.contains_point(*point));
        }
    }

    #[test]
    fn test_merge_identical_spheres() {
        let sphere = BoundingSphere::new(Vec3f::new(2.0, -1.0, 3.0), 1.5);
        let merged = sphere.merge(&sphere);
        assert!(sphere_approx_eq(merged, sphere));
    }

    #[test]
    fn test_merge_contained_returns_container_unchanged() {
        let outer = BoundingSphere::new(Vec3f::new(1.0, 2.0, 3.0), 10.0);
        let inner = BoundingSphere::new(Vec3f::new(2.0, 2.0, 3.0), 1.0);

        // Exact field equality: the containing input is returned as-is.
        let merged = outer.merge(&inner);
        assert_eq!(merged.center, outer.center);
        assert_eq!(merged.radius, outer.radius);

        // Symmetric case: merging from the small sphere yields the big one.
        let merged_rev = inner.merge(&outer);
        assert_eq!(merged_rev.center, outer.center);
        assert_eq!(merged_rev.radius, outer.radius);
    }

    #[test]
    fn test_merge_disjoint_spheres() {
        let a = BoundingSphere::new(Vec3f::ZERO, 1.0);
        let b = BoundingSphere::new(Vec3f::new(4.0, 0.0, 0.0), 1.0);
        let merged = a.merge(&b);

        // Surface passes through (-1,0,0) and (5,0,0).
        assert_relative_eq!(merged.center.x, 2.0, epsilon = crate::EPSILON);
        assert_relative_eq!(merged.center.y, 0.0, epsilon = crate::EPSILON);
        assert_relative_eq!(merged.center.z, 0.0, epsilon = crate::EPSILON);
        assert_relative_eq!(merged.radius, 3.0, epsilon = crate::EPSILON);
    }

    #[test]
    fn test_merge_result_contains_both_inputs() {
        let a = BoundingSphere::new(Vec3f::new(-1.0, 2.0, 0.5), 2.0);
        let b = BoundingSphere::new(Vec3f::new(3.0, -1.0, 1.0), 1.25);
        let merged = a.merge(&b);

        // Sampled boundary points of each input lie inside the result, up to
        // a small tolerance on the squared comparison.
        let tolerance = BoundingSphere::new(merged.center, merged.radius + 1e-4);
        for point in boundary_points(&a).into_iter().chain(boundary_points(&b)) {
            assert!(
                tolerance.contains_point(point),
                "merged sphere should contain {:?}",
                point
            );
        }

        // Merging is symmetric in the volume it covers.
        let merged_rev = b.merge(&a);
        assert!(sphere_approx_eq(merged, merged_rev));
    }

    #[test]
    fn test_merge_overlapping_spheres() {
        let a = BoundingSphere::new(Vec3f::ZERO, 2.0);
        let b = BoundingSphere::new(Vec3f::new(3.0, 0.0, 0.0), 2.0);
        let merged = a.merge(&b);

        // Extremes at (-2,0,0) and (5,0,0).
        assert_relative_eq!(merged.center.x, 1.5, epsilon = crate::EPSILON);
        assert_relative_eq!(merged.radius, 3.5, epsilon = crate::EPSILON);
    }

    #[test]
    fn test_merge_coincident_centers_differing_radii() {
        let small = BoundingSphere::new(Vec3f::new(1.0, 1.0, 1.0), 1.0);
        let big = BoundingSphere::new(Vec3f::new(1.0, 1.0, 1.0), 4.0);

        let merged = small.merge(&big);
        assert_eq!(merged.center, big.center);
        assert_eq!(merged.radius, big.radius);

        let merged_rev = big.merge(&small);
        assert_eq!(merged_rev.center, big.center);
        assert_eq!(merged_rev.radius, big.radius);
    }

    #[test]
    fn test_merge_coincident_centers_equal_radii() {
        // The degenerate case the naive center-axis construction divides by
        // zero on; must return a well-defined sphere, never NaN.
        let a = BoundingSphere::new(Vec3f::new(-2.0, 0.0, 7.0), 3.0);
        let b = BoundingSphere::new(Vec3f::new(-2.0, 0.0, 7.0), 3.0);

        let merged = a.merge(&b);
        assert!(merged.center.x.is_finite());
        assert!(merged.radius.is_finite());
        assert!(sphere_approx_eq(merged, a));
    }

    #[test]
    fn test_merge_near_coincident_centers() {
        // Tiny center offset with equal radii: skips the containment
        // short-circuit, exercises the near-zero-distance guard.
        let a = BoundingSphere::new(Vec3f::ZERO, 1.0);
        let b = BoundingSphere::new(Vec3f::new(1e-7, 0.0, 0.0), 1.0);

        let merged = a.merge(&b);
        assert!(merged.radius.is_finite());
        assert!(merged.center.x.is_finite());
        assert_relative_eq!(merged.radius, 1.0, epsilon = 1e-4);
    }
}
