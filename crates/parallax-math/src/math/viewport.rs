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

//! Viewports and the transform between world space and render-target space.
//!
//! A viewport maps normalized device coordinates onto a rectangle of pixels
//! plus a depth range. NDC `x` and `y` span `[-1, 1]` with `+y` pointing up;
//! screen space has `+y` pointing down, so the vertical axis is flipped.
//!
//! No input is validated. Zero extents, an empty depth range or a singular
//! matrix produce infinities or NaNs in the affected coordinates. The single
//! exception is [`Viewport::aspect_ratio`], which reports `0.0` for a zero
//! height.

use std::fmt;

use super::format::NumberStyle;
use super::{approx_eq, is_one, Locale, Mat4, Rect, RectF, Vec3};

/// A viewport with integer pixel bounds.
///
/// Equality is exact on position and extent and approximate on depth.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// The x-coordinate of the left edge, in pixels.
    pub x: i32,
    /// The y-coordinate of the top edge, in pixels.
    pub y: i32,
    /// The width in pixels.
    pub width: i32,
    /// The height in pixels.
    pub height: i32,
    /// The depth that NDC `z = 0` maps to.
    pub min_depth: f32,
    /// The depth that NDC `z = 1` maps to. May be less than `min_depth`,
    /// which inverts the depth mapping.
    pub max_depth: f32,
}

impl Viewport {
    /// Creates a viewport with the default `0.0..1.0` depth range.
    ///
    /// # Examples
    ///
    /// ```
    /// use parallax_math::{Mat4, Vec3, Viewport};
    /// let viewport = Viewport::new(0, 0, 800, 600);
    /// let screen = viewport.project(Vec3::ZERO, &Mat4::IDENTITY);
    /// assert_eq!(screen, Vec3::new(400.0, 300.0, 0.0));
    /// ```
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::with_depth(x, y, width, height, 0.0, 1.0)
    }

    /// Creates a viewport with an explicit depth range.
    #[inline]
    pub const fn with_depth(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        min_depth: f32,
        max_depth: f32,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            min_depth,
            max_depth,
        }
    }

    /// Creates a viewport covering `bounds` with the default depth range.
    #[inline]
    pub const fn from_rect(bounds: Rect) -> Self {
        Self::new(bounds.x, bounds.y, bounds.width, bounds.height)
    }

    /// The pixel rectangle covered by the viewport.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Replaces position and extent together. The depth range is untouched.
    #[inline]
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.x = bounds.x;
        self.y = bounds.y;
        self.width = bounds.width;
        self.height = bounds.height;
    }

    /// `width / height`, or `0.0` when the height is zero.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height != 0 {
            self.width as f32 / self.height as f32
        } else {
            0.0
        }
    }

    /// Projects a world-space point into screen space.
    ///
    /// See [`ViewportF::project`].
    #[inline]
    pub fn project(&self, source: Vec3, world_view_projection: &Mat4) -> Vec3 {
        ViewportF::from(*self).project(source, world_view_projection)
    }

    /// Projects with separate matrices, composed as `projection * view * world`.
    #[inline]
    pub fn project_pvw(
        &self,
        source: Vec3,
        projection: &Mat4,
        view: &Mat4,
        world: &Mat4,
    ) -> Vec3 {
        ViewportF::from(*self).project_pvw(source, projection, view, world)
    }

    /// Maps a screen-space point back into world space.
    ///
    /// See [`ViewportF::unproject`].
    #[inline]
    pub fn unproject(&self, source: Vec3, inverse_world_view_projection: &Mat4) -> Vec3 {
        ViewportF::from(*self).unproject(source, inverse_world_view_projection)
    }

    /// Unprojects with separate matrices. The product `projection * view * world`
    /// is inverted internally.
    #[inline]
    pub fn unproject_pvw(
        &self,
        source: Vec3,
        projection: &Mat4,
        view: &Mat4,
        world: &Mat4,
    ) -> Vec3 {
        ViewportF::from(*self).unproject_pvw(source, projection, view, world)
    }
}

impl Default for Viewport {
    /// An empty viewport at the origin with the `0.0..1.0` depth range.
    fn default() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl From<Rect> for Viewport {
    #[inline]
    fn from(bounds: Rect) -> Self {
        Self::from_rect(bounds)
    }
}

impl PartialEq for Viewport {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.width == other.width
            && self.height == other.height
            && approx_eq(self.min_depth, other.min_depth)
            && approx_eq(self.max_depth, other.max_depth)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inv = Locale::INVARIANT;
        write!(
            f,
            "{{X:{} Y:{} Width:{} Height:{} MinDepth:{} MaxDepth:{}}}",
            self.x,
            self.y,
            self.width,
            self.height,
            NumberStyle::General.format(self.min_depth, &inv),
            NumberStyle::General.format(self.max_depth, &inv)
        )
    }
}

/// A viewport with floating-point bounds, for sub-pixel placement.
///
/// Equality is approximate on every field.
#[derive(Debug, Clone, Copy)]
pub struct ViewportF {
    /// The x-coordinate of the left edge.
    pub x: f32,
    /// The y-coordinate of the top edge.
    pub y: f32,
    /// The width.
    pub width: f32,
    /// The height.
    pub height: f32,
    /// The depth that NDC `z = 0` maps to.
    pub min_depth: f32,
    /// The depth that NDC `z = 1` maps to.
    pub max_depth: f32,
}

impl ViewportF {
    /// Creates a viewport with the default `0.0..1.0` depth range.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::with_depth(x, y, width, height, 0.0, 1.0)
    }

    /// Creates a viewport with an explicit depth range.
    #[inline]
    pub const fn with_depth(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        min_depth: f32,
        max_depth: f32,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            min_depth,
            max_depth,
        }
    }

    /// Creates a viewport covering `bounds` with the default depth range.
    #[inline]
    pub const fn from_rect(bounds: RectF) -> Self {
        Self::new(bounds.x, bounds.y, bounds.width, bounds.height)
    }

    /// The rectangle covered by the viewport.
    #[inline]
    pub fn bounds(&self) -> RectF {
        RectF::new(self.x, self.y, self.width, self.height)
    }

    /// Replaces position and extent together. The depth range is untouched.
    #[inline]
    pub fn set_bounds(&mut self, bounds: RectF) {
        self.x = bounds.x;
        self.y = bounds.y;
        self.width = bounds.width;
        self.height = bounds.height;
    }

    /// `width / height`, or `0.0` when the height is zero.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height != 0.0 {
            self.width / self.height
        } else {
            0.0
        }
    }

    /// Projects a world-space point into screen space.
    ///
    /// The point is transformed by `world_view_projection`, divided by its
    /// homogeneous `w` unless `w` is already within [`W_EPSILON`] of one,
    /// then remapped from NDC onto the viewport rectangle and depth range.
    ///
    /// [`W_EPSILON`]: super::W_EPSILON
    pub fn project(&self, source: Vec3, world_view_projection: &Mat4) -> Vec3 {
        let m = world_view_projection;
        let mut v = m.transform_point3(source);
        let w = m.point_w(source);
        if !is_one(w) {
            v = v / w;
        }

        Vec3::new(
            (v.x + 1.0) * 0.5 * self.width + self.x,
            (-v.y + 1.0) * 0.5 * self.height + self.y,
            v.z * (self.max_depth - self.min_depth) + self.min_depth,
        )
    }

    /// Projects with separate matrices, composed as `projection * view * world`.
    #[inline]
    pub fn project_pvw(
        &self,
        source: Vec3,
        projection: &Mat4,
        view: &Mat4,
        world: &Mat4,
    ) -> Vec3 {
        self.project(source, &(*projection * *view * *world))
    }

    /// Maps a screen-space point back into world space.
    ///
    /// `inverse_world_view_projection` must already be inverted. This is the
    /// exact inverse of [`ViewportF::project`], including the `w` shortcut.
    pub fn unproject(&self, source: Vec3, inverse_world_view_projection: &Mat4) -> Vec3 {
        let m = inverse_world_view_projection;
        let ndc = Vec3::new(
            ((source.x - self.x) / self.width) * 2.0 - 1.0,
            -(((source.y - self.y) / self.height) * 2.0 - 1.0),
            (source.z - self.min_depth) / (self.max_depth - self.min_depth),
        );

        let w = m.point_w(ndc);
        let v = m.transform_point3(ndc);
        if is_one(w) {
            v
        } else {
            v / w
        }
    }

    /// Unprojects with separate matrices. The product `projection * view * world`
    /// is inverted internally; a singular product yields NaN components.
    #[inline]
    pub fn unproject_pvw(
        &self,
        source: Vec3,
        projection: &Mat4,
        view: &Mat4,
        world: &Mat4,
    ) -> Vec3 {
        let inverse = (*projection * *view * *world).inverse_or_nan();
        self.unproject(source, &inverse)
    }
}

impl Default for ViewportF {
    /// An empty viewport at the origin with the `0.0..1.0` depth range.
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl From<Viewport> for ViewportF {
    #[inline]
    fn from(v: Viewport) -> Self {
        Self::with_depth(
            v.x as f32,
            v.y as f32,
            v.width as f32,
            v.height as f32,
            v.min_depth,
            v.max_depth,
        )
    }
}

impl From<RectF> for ViewportF {
    #[inline]
    fn from(bounds: RectF) -> Self {
        Self::from_rect(bounds)
    }
}

impl PartialEq for ViewportF {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x)
            && approx_eq(self.y, other.y)
            && approx_eq(self.width, other.width)
            && approx_eq(self.height, other.height)
            && approx_eq(self.min_depth, other.min_depth)
            && approx_eq(self.max_depth, other.max_depth)
    }
}

impl fmt::Display for ViewportF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inv = Locale::INVARIANT;
        let g = |v: f32| NumberStyle::General.format(v, &inv);
        write!(
            f,
            "{{X:{} Y:{} Width:{} Height:{} MinDepth:{} MaxDepth:{}}}",
            g(self.x),
            g(self.y),
            g(self.width),
            g(self.height),
            g(self.min_depth),
            g(self.max_depth)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq_eps;
    use approx::assert_abs_diff_eq;

    fn camera() -> (Mat4, Mat4, Mat4) {
        let projection =
            Mat4::perspective_rh_zo(std::f32::consts::FRAC_PI_3, 4.0 / 3.0, 0.5, 100.0);
        let view = Mat4::look_at_rh(Vec3::new(2.0, 3.0, 10.0), Vec3::ZERO, Vec3::Y)
            .expect("valid camera");
        let world = Mat4::from_rotation_y(0.4);
        (projection, view, world)
    }

    #[test]
    fn test_new_defaults_depth_range() {
        let v = Viewport::new(1, 2, 3, 4);
        assert_eq!(v.min_depth, 0.0);
        assert_eq!(v.max_depth, 1.0);
        assert_eq!(Viewport::default().max_depth, 1.0);
        assert_eq!(ViewportF::new(0.0, 0.0, 1.0, 1.0).max_depth, 1.0);
    }

    #[test]
    fn test_aspect_ratio() {
        assert!(approx_eq_eps(
            Viewport::new(0, 0, 1920, 1080).aspect_ratio(),
            1.7778,
            1e-4
        ));
        assert_eq!(Viewport::new(0, 0, 100, 0).aspect_ratio(), 0.0);
        assert_eq!(ViewportF::new(0.0, 0.0, 100.0, 0.0).aspect_ratio(), 0.0);
        assert_eq!(ViewportF::new(0.0, 0.0, 100.0, -0.0).aspect_ratio(), 0.0);
        assert_eq!(Viewport::new(0, 0, 100, -50).aspect_ratio(), -2.0);
    }

    #[test]
    fn test_set_bounds_keeps_depth() {
        let mut v = Viewport::with_depth(0, 0, 1, 1, 0.25, 0.75);
        v.set_bounds(Rect::new(10, 20, 300, 400));
        assert_eq!((v.x, v.y, v.width, v.height), (10, 20, 300, 400));
        assert_eq!((v.min_depth, v.max_depth), (0.25, 0.75));
        assert_eq!(v.bounds(), Rect::new(10, 20, 300, 400));

        let mut f = ViewportF::with_depth(0.0, 0.0, 1.0, 1.0, 0.1, 0.9);
        f.set_bounds(RectF::new(0.5, 1.5, 2.5, 3.5));
        assert_eq!(f.bounds(), RectF::new(0.5, 1.5, 2.5, 3.5));
        assert_eq!((f.min_depth, f.max_depth), (0.1, 0.9));
    }

    #[test]
    fn test_project_identity_hits_center() {
        let v = Viewport::new(0, 0, 800, 600);
        assert_eq!(
            v.project(Vec3::ZERO, &Mat4::IDENTITY),
            Vec3::new(400.0, 300.0, 0.0)
        );
        // NDC corners land on the viewport corners, with y flipped.
        assert_eq!(
            v.project(Vec3::new(-1.0, 1.0, 1.0), &Mat4::IDENTITY),
            Vec3::new(0.0, 0.0, 1.0)
        );
        assert_eq!(
            v.project(Vec3::new(1.0, -1.0, 0.5), &Mat4::IDENTITY),
            Vec3::new(800.0, 600.0, 0.5)
        );
    }

    #[test]
    fn test_project_offsets_by_viewport_origin() {
        let v = ViewportF::new(100.0, 50.0, 200.0, 100.0);
        assert_eq!(
            v.project(Vec3::ZERO, &Mat4::IDENTITY),
            Vec3::new(200.0, 100.0, 0.0)
        );
    }

    #[test]
    fn test_unproject_identity_center() {
        let v = Viewport::with_depth(0, 0, 800, 600, 0.0, 1.0);
        assert_eq!(
            v.unproject(Vec3::new(400.0, 300.0, 0.0), &Mat4::IDENTITY),
            Vec3::ZERO
        );
    }

    #[test]
    fn test_perspective_divide_applied_when_w_differs() {
        let mut m = Mat4::IDENTITY;
        m.cols[3].w = 2.0;
        let v = ViewportF::new(0.0, 0.0, 100.0, 100.0);
        // (1, 0, 0) / 2 -> NDC x 0.5 -> screen x 75.
        let screen = v.project(Vec3::new(1.0, 0.0, 0.0), &m);
        assert_eq!(screen, Vec3::new(75.0, 50.0, 0.0));
    }

    #[test]
    fn test_w_near_one_skips_divide() {
        let mut m = Mat4::IDENTITY;
        m.cols[3].w = 1.0 + 5e-7;
        let v = Viewport::new(0, 0, 800, 600);
        let screen = v.project(Vec3::new(0.5, 0.0, 0.0), &m);
        assert_eq!(screen.x, 600.0);

        let world = v.unproject(Vec3::new(600.0, 300.0, 0.0), &m);
        assert_eq!(world.x, 0.5);
    }

    #[test]
    fn test_pvw_overloads_match_composed_matrix() {
        let (projection, view, world) = camera();
        let wvp = projection * view * world;
        let v = Viewport::new(0, 0, 1024, 768);
        let p = Vec3::new(0.5, -0.25, 1.0);

        let screen = v.project_pvw(p, &projection, &view, &world);
        assert_eq!(screen, v.project(p, &wvp));

        let back = v.unproject_pvw(screen, &projection, &view, &world);
        assert_abs_diff_eq!(back, p, epsilon = 1e-3);
    }

    #[test]
    fn test_project_unproject_round_trip() {
        let (projection, view, world) = camera();
        let wvp = projection * view * world;
        let inv = wvp.inverse().expect("camera matrix should be invertible");
        let v = ViewportF::with_depth(10.5, 20.25, 640.0, 480.0, 0.0, 1.0);

        for p in [
            Vec3::ZERO,
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-2.0, 0.5, 3.0),
            Vec3::new(0.0, -1.5, -4.0),
        ] {
            let screen = v.project(p, &wvp);
            let back = v.unproject(screen, &inv);
            assert_abs_diff_eq!(back, p, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_orthographic_round_trip_uses_w_shortcut() {
        let wvp = Mat4::orthographic_rh_zo(-4.0, 4.0, -3.0, 3.0, 0.0, 20.0);
        let inv = wvp.inverse().expect("orthographic matrix should be invertible");
        let v = Viewport::new(0, 0, 800, 600);
        let p = Vec3::new(1.0, -2.0, -5.0);
        assert_eq!(wvp.point_w(p), 1.0);

        let screen = v.project(p, &wvp);
        assert_abs_diff_eq!(screen, Vec3::new(500.0, 500.0, 0.25), epsilon = 1e-3);
        assert_abs_diff_eq!(v.unproject(screen, &inv), p, epsilon = 1e-4);
    }

    #[test]
    fn test_inverted_depth_range_flips_mapping() {
        // min_depth > max_depth is accepted unvalidated; it reverses depth.
        let v = Viewport::with_depth(0, 0, 10, 10, 1.0, 0.0);
        assert_eq!(v.project(Vec3::ZERO, &Mat4::IDENTITY).z, 1.0);
        assert_eq!(v.project(Vec3::new(0.0, 0.0, 1.0), &Mat4::IDENTITY).z, 0.0);
        assert_eq!(v.unproject(Vec3::new(5.0, 5.0, 0.25), &Mat4::IDENTITY).z, 0.75);
    }

    #[test]
    fn test_degenerate_extents_propagate_non_finite() {
        let zero_width = ViewportF::new(0.0, 0.0, 0.0, 100.0);
        assert!(zero_width
            .unproject(Vec3::new(0.0, 50.0, 0.5), &Mat4::IDENTITY)
            .x
            .is_nan());
        assert!(!zero_width
            .unproject(Vec3::new(10.0, 50.0, 0.5), &Mat4::IDENTITY)
            .x
            .is_finite());

        // Projection never divides by the extents, only scales by them.
        let screen = zero_width.project(Vec3::new(0.5, 0.0, 0.0), &Mat4::IDENTITY);
        assert_eq!(screen.x, 0.0);

        let flat_depth = Viewport::with_depth(0, 0, 10, 10, 0.5, 0.5);
        assert!(flat_depth
            .unproject(Vec3::new(5.0, 5.0, 0.5), &Mat4::IDENTITY)
            .z
            .is_nan());
    }

    #[test]
    fn test_unproject_singular_matrix_is_nan() {
        let v = Viewport::new(0, 0, 800, 600);
        let singular = Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0));
        let p = v.unproject_pvw(
            Vec3::new(400.0, 300.0, 0.5),
            &singular,
            &Mat4::IDENTITY,
            &Mat4::IDENTITY,
        );
        assert!(p.x.is_nan() && p.y.is_nan() && p.z.is_nan());
    }

    #[test]
    fn test_unproject_small_world_scale() {
        let v = Viewport::new(0, 0, 800, 600);
        let world = Mat4::from_scale(Vec3::new(0.02, 0.02, 0.02));
        let p = v.unproject_pvw(
            Vec3::new(400.0, 300.0, 0.5),
            &Mat4::IDENTITY,
            &Mat4::IDENTITY,
            &world,
        );
        assert_abs_diff_eq!(p, Vec3::new(0.0, 0.0, 25.0), epsilon = 1e-3);
    }

    #[test]
    fn test_small_world_scale_round_trip() {
        let projection =
            Mat4::perspective_rh_zo(std::f32::consts::FRAC_PI_3, 4.0 / 3.0, 0.5, 100.0);
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
        let world = Mat4::from_scale(Vec3::new(0.02, 0.02, 0.02));
        let v = Viewport::new(0, 0, 800, 600);
        let p = Vec3::new(10.0, -5.0, 20.0);

        let screen = v.project_pvw(p, &projection, &view, &world);
        let back = v.unproject_pvw(screen, &projection, &view, &world);
        assert!(back.x.is_finite() && back.y.is_finite() && back.z.is_finite());
        assert_abs_diff_eq!(back, p, epsilon = 1e-2);
    }

    #[test]
    fn test_equality_rules() {
        let a = Viewport::with_depth(0, 0, 10, 10, 0.0, 1.0);
        assert_eq!(a, Viewport::with_depth(0, 0, 10, 10, 0.0, 1.0 + 1e-6));
        assert_ne!(a, Viewport::with_depth(0, 0, 11, 10, 0.0, 1.0));
        assert_ne!(a, Viewport::with_depth(0, 0, 10, 10, 0.0, 0.9));

        let f = ViewportF::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(f, ViewportF::new(1e-6, 0.0, 10.0 + 1e-6, 10.0));
        assert_ne!(f, ViewportF::new(0.01, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_conversions() {
        let v = Viewport::with_depth(1, 2, 3, 4, 0.1, 0.9);
        let f = ViewportF::from(v);
        assert_eq!(f, ViewportF::with_depth(1.0, 2.0, 3.0, 4.0, 0.1, 0.9));
        assert_eq!(Viewport::from(Rect::new(5, 6, 7, 8)).bounds(), Rect::new(5, 6, 7, 8));
        assert_eq!(
            ViewportF::from(RectF::new(0.5, 0.5, 1.0, 2.0)).aspect_ratio(),
            0.5
        );
    }

    #[test]
    fn test_display() {
        let v = Viewport::new(0, 0, 800, 600);
        assert_eq!(
            v.to_string(),
            "{X:0 Y:0 Width:800 Height:600 MinDepth:0 MaxDepth:1}"
        );
        let f = ViewportF::with_depth(0.5, 1.0, 2.0, 3.0, 0.0, 0.5);
        assert_eq!(
            f.to_string(),
            "{X:0.5 Y:1 Width:2 Height:3 MinDepth:0 MaxDepth:0.5}"
        );
    }

    #[test]
    fn test_integer_viewport_matches_float_viewport() {
        let (projection, view, world) = camera();
        let wvp = projection * view * world;
        let v = Viewport::with_depth(3, 7, 320, 200, 0.2, 0.8);
        let f = ViewportF::from(v);
        let p = Vec3::new(0.1, 0.2, 0.3);
        assert_eq!(v.project(p, &wvp), f.project(p, &wvp));
    }
}
