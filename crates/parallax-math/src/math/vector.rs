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

//! Provides the 3D and 4D vector types and their associated operations.

use approx::{AbsDiffEq, RelativeEq};

use super::EPSILON;
use std::ops::{Add, Div, Mul, Neg, Sub};

// --- Vector3D ---

/// A 3-dimensional vector with `f32` components.
///
/// `PartialEq` is plain IEEE-754 comparison per component, so a vector
/// containing NaN never compares equal, not even to itself.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vec3 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
    /// The z component of the vector.
    pub z: f32,
}

impl Vec3 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Creates a new `Vec3` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Exact component-wise equality with IEEE-754 semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// use parallax_math::Vec3;
    /// assert!(Vec3::new(1.0, 2.0, 3.0).equals(Vec3::new(1.0, 2.0, 3.0)));
    /// assert!(!Vec3::new(f32::NAN, 0.0, 0.0).equals(Vec3::new(f32::NAN, 0.0, 0.0)));
    /// ```
    #[inline]
    pub fn equals(&self, other: Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    /// The negation of [`Vec3::equals`].
    #[inline]
    pub fn not_equals(&self, other: Self) -> bool {
        !self.equals(other)
    }

    /// Returns `true` if every component of `other` lies strictly within
    /// `epsilon` of the matching component of `self`.
    ///
    /// Each axis is checked on its own; this does not bound the Euclidean
    /// distance between the two points. The comparison is strict, so an
    /// exact match with an `epsilon` of zero is `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use parallax_math::Vec3;
    /// let a = Vec3::new(1.0, 1.0, 1.0);
    /// assert!(a.equals_eps(Vec3::new(1.05, 0.95, 1.0), 0.1));
    /// assert!(!a.equals_eps(a, 0.0));
    /// ```
    #[inline]
    pub fn equals_eps(&self, other: Self, epsilon: f32) -> bool {
        (other.x - self.x).abs() < epsilon
            && (other.y - self.y).abs() < epsilon
            && (other.z - self.z).abs() < epsilon
    }

    /// Calculates the squared length (magnitude) of the vector.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of the vector with a length of 1.
    /// If the vector's length is near zero, it returns `Vec3::ZERO`.
    #[inline]
    pub fn normalize(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > EPSILON * EPSILON {
            *self * (1.0 / len_sq.sqrt())
        } else {
            Self::ZERO
        }
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector and another.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Calculates the squared distance between this vector and another.
    /// Prefer this over [`Vec3::distance`] when only the ordering matters.
    #[inline]
    pub fn distance_squared(&self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Calculates the distance between this vector and another.
    #[inline]
    pub fn distance(&self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

// --- Distance Helpers ---

/// The Euclidean distance between `a` and `b`.
///
/// # Examples
///
/// ```
/// use parallax_math::math::{distance, Vec3};
/// assert_eq!(distance(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0)), 5.0);
/// ```
#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

/// The squared Euclidean distance between `a` and `b`.
#[inline]
pub fn distance_squared(a: Vec3, b: Vec3) -> f32 {
    a.distance_squared(b)
}

/// Returns the index of the candidate nearest to `point`, or `None` if
/// `candidates` is empty. Ties resolve to the first candidate.
///
/// Candidates are ranked by squared distance. NaN distances never win.
pub fn closest_index(point: Vec3, candidates: &[Vec3]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, candidate) in candidates.iter().enumerate() {
        let d = point.distance_squared(*candidate);
        match best {
            Some((_, best_d)) if d >= best_d || d.is_nan() => {}
            None if d.is_nan() => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

// --- Operator Overloads ---

impl Default for Vec3 {
    /// Returns `Vec3::ZERO`.
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Vec3 {
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

impl Sub for Vec3 {
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

impl Mul<f32> for Vec3 {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    /// Divides each component by the scalar.
    ///
    /// This is a true division per component rather than a multiplication
    /// by the reciprocal, so results are bit-exact with `x / rhs`.
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;
    /// Negates the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vec3 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

// --- Vector4D ---

/// A 4-dimensional vector with `f32` components, used for homogeneous coordinates
/// and as the column type of [`Mat4`](super::Mat4).
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vec4 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
    /// The z component of the vector.
    pub z: f32,
    /// The w component, used for homogeneous coordinates.
    pub w: f32,
}

impl Vec4 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// A vector with all components set to NaN.
    pub const NAN: Self = Self::new(f32::NAN, f32::NAN, f32::NAN, f32::NAN);
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// The unit vector pointing along the positive W-axis.
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new `Vec4` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Retrieves a component of the vector by its index.
    ///
    /// # Panics
    /// Panics if `index` is not between 0 and 3.
    #[inline]
    pub fn get(&self, index: usize) -> f32 {
        match index {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            3 => self.w,
            _ => panic!("Index out of bounds for Vec4"),
        }
    }
}

impl Add for Vec4 {
    type Output = Self;
    /// Adds two vectors component-wise.
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

impl Mul<f32> for Vec4 {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::default(), Vec3::ZERO);
    }

    #[test]
    fn test_equals() {
        let a = Vec3::new(1.0, -2.0, 3.5);
        assert!(a.equals(a));
        assert!(a.equals(Vec3::new(1.0, -2.0, 3.5)));
        assert!(a.not_equals(Vec3::new(1.0, -2.0, 3.6)));

        // Signed zeros compare equal under IEEE rules.
        assert!(Vec3::new(0.0, 0.0, 0.0).equals(Vec3::new(-0.0, -0.0, -0.0)));
    }

    #[test]
    fn test_equals_nan_is_false() {
        let v = Vec3::new(0.0, f32::NAN, 0.0);
        assert!(!v.equals(v));
        assert!(v.not_equals(v));
        assert_ne!(v, v);
    }

    #[test]
    fn test_equals_eps() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(1.05, 2.0, 2.96);
        assert!(a.equals_eps(b, 0.1));
        assert!(!a.equals_eps(b, 0.01));

        // Strict less-than: exact match with zero tolerance fails.
        assert!(!a.equals_eps(a, 0.0));
        assert!(a.equals_eps(a, f32::MIN_POSITIVE));
    }

    #[test]
    fn test_equals_eps_is_per_axis() {
        // Each axis is within 0.9 but the Euclidean distance is ~1.56.
        let a = Vec3::ZERO;
        let b = Vec3::new(0.9, 0.9, 0.9);
        assert!(a.equals_eps(b, 0.91));
        assert!(a.distance(b) > 0.91);
    }

    #[test]
    fn test_arithmetic() {
        let v1 = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(v1 + v2, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(v2 - v1, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(v1 * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(3.0 * v1, Vec3::new(3.0, 6.0, 9.0));
        assert_eq!(-v1, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(Vec3::new(2.0, 4.0, 6.0) / 2.0, v1);
    }

    #[test]
    fn test_div_is_true_division() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let w = 3.0_f32;
        let divided = v / w;
        assert_eq!(divided.x.to_bits(), (1.0_f32 / w).to_bits());
        assert_eq!(divided.y.to_bits(), (2.0_f32 / w).to_bits());
        assert_eq!(divided.z.to_bits(), (3.0_f32 / w).to_bits());
    }

    #[test]
    fn test_distance() {
        let v1 = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(4.0, 5.0, 6.0);
        // sqrt(9 + 9 + 9) = 3*sqrt(3)
        assert!(approx_eq(v1.distance(v2), 3.0 * (3.0_f32).sqrt()));
        assert!(approx_eq(distance_squared(v1, v2), 27.0));
        assert_eq!(distance(v1, v2), distance(v2, v1));
        assert_eq!(distance(v1, v1), 0.0);
    }

    #[test]
    fn test_closest_index() {
        let candidates = [
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-1.0, -1.0, 0.0),
        ];
        assert_eq!(closest_index(Vec3::ZERO, &candidates), Some(1));
        assert_eq!(closest_index(Vec3::new(9.0, 0.0, 0.0), &candidates), Some(0));
        assert_eq!(closest_index(Vec3::ZERO, &[]), None);
    }

    #[test]
    fn test_closest_index_skips_nan() {
        let candidates = [Vec3::new(f32::NAN, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0)];
        assert_eq!(closest_index(Vec3::ZERO, &candidates), Some(1));
        assert_eq!(closest_index(Vec3::ZERO, &candidates[..1]), None);
    }

    #[test]
    fn test_normalize() {
        let v = Vec3::new(3.0, 0.0, 0.0);
        assert_abs_diff_eq!(v.normalize(), Vec3::X);
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }

    #[test]
    fn test_vec4_ops() {
        let v4 = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert!(approx_eq(v4.dot(Vec4::W), 4.0));
        assert_eq!(v4.get(2), 3.0);
        assert_eq!(v4 * 2.0 + Vec4::X, Vec4::new(3.0, 4.0, 6.0, 8.0));
    }
}
