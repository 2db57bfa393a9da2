use cgmath::Vector3;

use crate::math::normalize_or_zero;

/// Minimal navigation camera.
///
/// Only the position and forward direction participate in the render
/// pipeline's view transform; fov/aspect/near/far are carried for callers
/// that drive interactive navigation but there is no projection matrix here.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vector3<f32>,
    target: Vector3<f32>,
    fov: f32,
    aspect_ratio: f32,
    near_plane: f32,
    far_plane: f32,
}

impl Camera {
    pub fn new(
        position: Vector3<f32>,
        target: Vector3<f32>,
        fov: f32,
        aspect_ratio: f32,
        near_plane: f32,
        far_plane: f32,
    ) -> Self {
        Self {
            position,
            target,
            fov,
            aspect_ratio,
            near_plane,
            far_plane,
        }
    }

    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
    }

    pub fn target(&self) -> Vector3<f32> {
        self.target
    }

    pub fn set_target(&mut self, target: Vector3<f32>) {
        self.target = target;
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    pub fn far_plane(&self) -> f32 {
        self.far_plane
    }

    /// Forward direction, zero if the camera is looking at its own position.
    pub fn direction(&self) -> Vector3<f32> {
        normalize_or_zero(self.target - self.position)
    }

    /// Translate the camera and its target together.
    pub fn move_by(&mut self, delta: Vector3<f32>) {
        self.position += delta;
        self.target += delta;
    }

    /// Dolly along the forward direction.
    pub fn move_forward(&mut self, distance: f32) {
        let step = self.direction() * distance;
        self.position += step;
        self.target += step;
    }

    /// Truck along the horizontal axis perpendicular to the view direction.
    pub fn move_right(&mut self, distance: f32) {
        let dir = self.direction();
        let right = normalize_or_zero(Vector3::new(dir.z, 0.0, -dir.x));
        self.position += right * distance;
        self.target += right * distance;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Vector3::new(0.0, 0.0, 100.0),
            Vector3::new(0.0, 0.0, 0.0),
            1.0,
            1.0,
            0.01,
            100.0,
        )
    }
}
