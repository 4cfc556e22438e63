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

//! Conversions between [`Vec3`] and other three-component float layouts.
//!
//! Every conversion here is a plain component copy: no arithmetic touches
//! the values, so NaN payloads, signed zeros and infinities survive a round
//! trip bit for bit. None of them allocate.

use super::Vec3;

/// A type made of exactly three `f32` components in `x, y, z` order.
///
/// Implement this for a foreign vector type to make it interchangeable with
/// [`Vec3`] through [`convert`].
pub trait Vector3Repr: Copy {
    /// Builds the value from its three components.
    fn from_array(xyz: [f32; 3]) -> Self;

    /// Returns the three components in `x, y, z` order.
    fn to_array(self) -> [f32; 3];
}

/// Converts between any two three-component representations.
///
/// # Examples
///
/// ```
/// use parallax_math::math::{convert, Vec3};
/// let v: glam::Vec3 = convert(Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(v, glam::Vec3::new(1.0, 2.0, 3.0));
/// let back: Vec3 = convert(v);
/// assert_eq!(back, Vec3::new(1.0, 2.0, 3.0));
/// ```
#[inline]
pub fn convert<A: Vector3Repr, B: Vector3Repr>(value: A) -> B {
    B::from_array(value.to_array())
}

impl Vector3Repr for Vec3 {
    #[inline]
    fn from_array([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }

    #[inline]
    fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Vector3Repr for glam::Vec3 {
    #[inline]
    fn from_array(xyz: [f32; 3]) -> Self {
        glam::Vec3::from_array(xyz)
    }

    #[inline]
    fn to_array(self) -> [f32; 3] {
        glam::Vec3::to_array(&self)
    }
}

impl Vector3Repr for glam::Vec3A {
    #[inline]
    fn from_array(xyz: [f32; 3]) -> Self {
        glam::Vec3A::from_array(xyz)
    }

    #[inline]
    fn to_array(self) -> [f32; 3] {
        glam::Vec3A::to_array(&self)
    }
}

impl Vector3Repr for [f32; 3] {
    #[inline]
    fn from_array(xyz: [f32; 3]) -> Self {
        xyz
    }

    #[inline]
    fn to_array(self) -> [f32; 3] {
        self
    }
}

impl Vector3Repr for (f32, f32, f32) {
    #[inline]
    fn from_array([x, y, z]: [f32; 3]) -> Self {
        (x, y, z)
    }

    #[inline]
    fn to_array(self) -> [f32; 3] {
        [self.0, self.1, self.2]
    }
}

impl Vec3 {
    /// Converts a `glam::Vec3` into a `Vec3`.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        bytemuck::cast(v)
    }

    /// Converts this vector into a `glam::Vec3`.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        bytemuck::cast(self)
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_glam()
    }
}

impl From<glam::Vec3A> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3A) -> Self {
        convert(v)
    }
}

impl From<Vec3> for glam::Vec3A {
    #[inline]
    fn from(v: Vec3) -> Self {
        convert(v)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(xyz: [f32; 3]) -> Self {
        Self::from_array(xyz)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}
