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

//! Provides the 3D math primitives and the viewport transform.
//!
//! The types here use the engine's column-major, column-vector convention.
//! A matrix written row-major with row vectors on the left (`M[row][col]`,
//! translation in the fourth row) has exactly the same memory layout, so
//! `M[r][c]` is `cols[r]` component `c` of a [`Mat4`].

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

/// Tolerance used to decide whether a homogeneous `w` is already `1.0`,
/// in which case the perspective divide is skipped.
pub const W_EPSILON: f32 = 1e-6;

// --- Declare Sub-Modules ---

pub mod convert;
pub mod format;
pub mod matrix;
pub mod rect;
pub mod vector;
pub mod viewport;

// --- Re-export Principal Types ---

pub use self::convert::{convert, Vector3Repr};
pub use self::format::{Locale, NumberStyle};
pub use self::matrix::Mat4;
pub use self::rect::{Rect, RectF};
pub use self::vector::{closest_index, distance, distance_squared, Vec3, Vec4};
pub use self::viewport::{Viewport, ViewportF};

// --- Utility Functions ---

/// Performs an approximate equality comparison between two floats with a custom tolerance.
///
/// # Examples
///
/// ```
/// use parallax_math::math::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the module's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use parallax_math::math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}

/// Returns `true` if `w` is close enough to `1.0` to skip the perspective divide.
#[inline]
pub(crate) fn is_one(w: f32) -> bool {
    (w - 1.0).abs() < W_EPSILON
}
