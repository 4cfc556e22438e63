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

//! # Parallax Math
//!
//! Value types for 3D vectors, matrices and viewports, together with the
//! conversions needed to move them across the boundary with `glam`.
//!
//! Everything in this crate is a plain `Copy` value and every operation is a
//! pure function, so all of it can be shared freely between threads.

#![warn(missing_docs)]

pub mod error;
pub mod math;

pub use error::{Error, Result};
pub use math::{Mat4, Rect, RectF, Vec3, Vec4, Viewport, ViewportF};
