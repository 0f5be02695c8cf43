//! Orbit camera with spherical coordinates and damped rotation.
//!
//! Y-up. Theta is the horizontal angle measured from +X toward +Z, phi the
//! polar angle from +Y (clamped away from the poles).

use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec3};

const FOV_DEGREES: f32 = 45.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 1000.0;
const UP_VECTOR: Vec3 = Vec3::Y;
const MIN_PHI: f32 = 0.05;
const MAX_PHI: f32 = PI - 0.05;
const MIN_RADIUS: f32 = 1.5;
const MAX_RADIUS: f32 = 30.0;
/// Share of the pending rotation applied per frame.
const DAMPING: f32 = 0.05;
/// Radius factor per wheel line.
const ZOOM_STEP: f32 = 0.95;
const INITIAL_EYE: Vec3 = Vec3::new(0.0, 0.5, 5.5);

/// Orbit camera around the origin.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    target: Vec3,
    radius: f32,
    theta: f32,
    phi: f32,
    aspect_ratio: f32,

    pending_theta: f32,
    pending_phi: f32,

    view: Mat4,
    projection: Mat4,
}

impl OrbitCamera {
    pub fn new(aspect_ratio: f32) -> Self {
        let radius = INITIAL_EYE.length();
        let mut camera = Self {
            target: Vec3::ZERO,
            radius,
            theta: INITIAL_EYE.z.atan2(INITIAL_EYE.x),
            phi: (INITIAL_EYE.y / radius).acos(),
            aspect_ratio: sanitize_aspect(aspect_ratio),
            pending_theta: 0.0,
            pending_phi: 0.0,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        };
        camera.update_matrices();
        camera
    }

    /// Queues a drag of `(dx, dy)` physical pixels over a viewport `height`
    /// pixels tall. A drag across the full height turns a full circle.
    pub fn drag(&mut self, dx: f32, dy: f32, height: f32) {
        let height = height.max(1.0);
        self.pending_theta += TAU * dx / height;
        self.pending_phi -= TAU * dy / height;
    }

    /// Zooms by wheel lines; positive moves closer.
    pub fn zoom(&mut self, lines: f32) {
        self.radius = (self.radius * ZOOM_STEP.powf(lines)).clamp(MIN_RADIUS, MAX_RADIUS);
        self.update_matrices();
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = sanitize_aspect(aspect_ratio);
        self.update_matrices();
    }

    /// Applies one frame of damped rotation.
    pub fn update(&mut self) {
        self.theta += self.pending_theta * DAMPING;
        self.phi = (self.phi + self.pending_phi * DAMPING).clamp(MIN_PHI, MAX_PHI);
        self.pending_theta *= 1.0 - DAMPING;
        self.pending_phi *= 1.0 - DAMPING;
        self.update_matrices();
    }

    pub fn position(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.target.x + self.radius * sin_phi * self.theta.cos(),
            self.target.y + self.radius * self.phi.cos(),
            self.target.z + self.radius * sin_phi * self.theta.sin(),
        )
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    fn update_matrices(&mut self) {
        self.view = Mat4::look_at_rh(self.position(), self.target, UP_VECTOR);
        self.projection = Mat4::perspective_rh(
            FOV_DEGREES.to_radians(),
            self.aspect_ratio,
            NEAR_PLANE,
            FAR_PLANE,
        );
    }
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_initial_eye() {
        let cam = OrbitCamera::new(16.0 / 9.0);
        assert!(cam.position().abs_diff_eq(INITIAL_EYE, 1e-4));
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let cam = OrbitCamera::new(1.5);
        let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn damped_drag_converges_to_full_delta() {
        let mut cam = OrbitCamera::new(1.0);
        let start = cam.theta;
        cam.drag(100.0, 0.0, 1000.0);
        for _ in 0..400 {
            cam.update();
        }
        let expected = start + TAU * 0.1;
        assert!((cam.theta - expected).abs() < 1e-3);
    }

    #[test]
    fn phi_is_clamped_and_radius_is_bounded() {
        let mut cam = OrbitCamera::new(1.0);
        cam.drag(0.0, -1.0e6, 1.0);
        for _ in 0..100 {
            cam.update();
        }
        assert!(cam.phi >= MIN_PHI && cam.phi <= MAX_PHI);

        cam.zoom(1000.0);
        assert_eq!(cam.radius, MIN_RADIUS);
        cam.zoom(-1000.0);
        assert_eq!(cam.radius, MAX_RADIUS);
    }

    #[test]
    fn degenerate_aspect_falls_back() {
        let mut cam = OrbitCamera::new(0.0);
        assert_eq!(cam.aspect_ratio, 1.0);
        cam.set_aspect_ratio(f32::NAN);
        assert_eq!(cam.aspect_ratio, 1.0);
        assert!(cam.view_projection().is_finite());
    }
}
