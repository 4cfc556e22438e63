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

//! Provides axis-aligned rectangles describing a region of a render target.
//!
//! [`Rect`] uses signed integer pixel units and [`RectF`] floating-point
//! units for sub-pixel placement. Neither type validates its extents:
//! zero or negative widths and heights are representable.

/// An integer rectangle given by its top-left corner and its extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x: i32,
    /// The y-coordinate of the top edge.
    pub y: i32,
    /// The horizontal extent.
    pub width: i32,
    /// The vertical extent.
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A floating-point rectangle given by its top-left corner and its extents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    /// The x-coordinate of the left edge.
    pub x: f32,
    /// The y-coordinate of the top edge.
    pub y: f32,
    /// The horizontal extent.
    pub width: f32,
    /// The vertical extent.
    pub height: f32,
}

impl RectF {
    /// Creates a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<Rect> for RectF {
    #[inline]
    fn from(r: Rect) -> Self {
        Self::new(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
    }
}
