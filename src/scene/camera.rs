// SPDX-License-Identifier: MPL-2.0
//! Perspective camera and the placeholder cube drawn while the viewer runs.

use glam::{EulerRot, Mat4, Vec3};
use iced::Size;

/// Default vertical field of view in degrees.
pub const DEFAULT_FIELD_OF_VIEW_DEG: f32 = 75.0;
/// Near clipping plane.
pub const NEAR_PLANE: f32 = 0.1;
/// Far clipping plane.
pub const FAR_PLANE: f32 = 1000.0;
/// Distance of the camera from the origin along +Z.
pub const CAMERA_DISTANCE: f32 = 5.0;

/// Valid field-of-view range in degrees.
pub const MIN_FIELD_OF_VIEW_DEG: f32 = 10.0;
pub const MAX_FIELD_OF_VIEW_DEG: f32 = 120.0;

/// Perspective camera looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    field_of_view_deg: f32,
    aspect: f32,
    position: Vec3,
}

impl Camera {
    /// Creates a camera for a viewport of the given size.
    ///
    /// The field of view is clamped to a sane range.
    #[must_use]
    pub fn new(field_of_view_deg: f32, viewport: Size) -> Self {
        Self {
            field_of_view_deg: field_of_view_deg.clamp(MIN_FIELD_OF_VIEW_DEG, MAX_FIELD_OF_VIEW_DEG),
            aspect: aspect_ratio(viewport),
            position: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
        }
    }

    /// Updates the aspect ratio after the viewport changed size.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.aspect = aspect_ratio(viewport);
    }

    #[must_use]
    pub fn field_of_view_deg(&self) -> f32 {
        self.field_of_view_deg
    }

    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[must_use]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.field_of_view_deg.to_radians(),
            self.aspect,
            NEAR_PLANE,
            FAR_PLANE,
        )
    }

    #[must_use]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

/// Width over height, or 1.0 for a degenerate viewport.
fn aspect_ratio(viewport: Size) -> f32 {
    if viewport.width > 0.0 && viewport.height > 0.0 {
        viewport.width / viewport.height
    } else {
        1.0
    }
}

/// Radians added to each rotation axis per rendered frame.
pub const ROTATION_STEP: f32 = 0.01;

/// Placeholder cube color, 0x00ff00.
pub const CUBE_COLOR: [f32; 3] = [0.0, 1.0, 0.0];

/// Unit cube spinning around its X and Y axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaceholderCube {
    rotation_x: f32,
    rotation_y: f32,
}

impl PlaceholderCube {
    /// Advances the rotation by one frame.
    pub fn advance(&mut self) {
        self.rotation_x += ROTATION_STEP;
        self.rotation_y += ROTATION_STEP;
    }

    /// Returns `(x, y)` rotation in radians.
    #[must_use]
    pub fn rotation(&self) -> (f32, f32) {
        (self.rotation_x, self.rotation_y)
    }

    #[must_use]
    pub fn model(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation_x, self.rotation_y, 0.0)
    }

    #[must_use]
    pub fn color(&self) -> [f32; 3] {
        CUBE_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn aspect_follows_viewport() {
        let mut camera = Camera::new(75.0, Size::new(1600.0, 900.0));
        assert!((camera.aspect() - 16.0 / 9.0).abs() < f32::EPSILON);

        camera.set_viewport(Size::new(500.0, 500.0));
        assert!((camera.aspect() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_height_viewport_falls_back_to_square() {
        let camera = Camera::new(75.0, Size::new(800.0, 0.0));
        assert_eq!(camera.aspect(), 1.0);
    }

    #[test]
    fn field_of_view_is_clamped() {
        assert_eq!(Camera::new(500.0, Size::new(1.0, 1.0)).field_of_view_deg(), 120.0);
        assert_eq!(Camera::new(1.0, Size::new(1.0, 1.0)).field_of_view_deg(), 10.0);
    }

    #[test]
    fn camera_sits_on_positive_z() {
        let camera = Camera::new(DEFAULT_FIELD_OF_VIEW_DEG, Size::new(1.0, 1.0));
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let camera = Camera::new(DEFAULT_FIELD_OF_VIEW_DEG, Size::new(800.0, 600.0));
        let clip = camera.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn cube_rotates_by_fixed_step() {
        let mut cube = PlaceholderCube::default();
        for _ in 0..3 {
            cube.advance();
        }
        let (x, y) = cube.rotation();
        assert!((x - 0.03).abs() < 1e-6);
        assert!((y - 0.03).abs() < 1e-6);
    }

    #[test]
    fn cube_is_green() {
        assert_eq!(PlaceholderCube::default().color(), [0.0, 1.0, 0.0]);
    }
}
