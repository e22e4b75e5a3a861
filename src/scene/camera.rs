//! The scene camera.
//!
//! The camera rides a [`Pivot`] like any model, so document-style motion
//! (orbiting, dollying along its own axes) is expressed with the same
//! primitives. Matrices are computed on demand; there is no cached GPU
//! state at this layer.

use glam::{Mat4, Vec3};

use crate::scene::Pivot;

#[derive(Debug, Clone)]
pub struct Camera {
    pub pivot: Pivot,
    /// Point the view matrix looks at.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// `fov` is in degrees, matching how documents and hosts specify it.
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            pivot: Pivot::at(Vec3::new(0.0, 0.0, 5.0)),
            target: Vec3::ZERO,
            fov: fov.to_radians(),
            aspect,
            near,
            far,
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Rotates the camera position about the line through the target along
    /// `axis`, keeping the distance to the target fixed.
    pub fn orbit(&mut self, angle: f32, axis: Vec3) {
        self.pivot.rotate(angle, self.target, self.target + axis);
    }

    /// Moves the camera and its target by the same world-space delta.
    pub fn pan(&mut self, delta: Vec3) {
        self.pivot.global_move(delta);
        self.target += delta;
    }

    /// Moves the camera toward (positive `amount`) or away from the
    /// target. The camera stops short of crossing the target.
    pub fn dolly(&mut self, amount: f32) {
        let offset = self.pivot.position - self.target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }
        let remaining = (distance - amount).max(self.near.max(1e-3));
        self.pivot.position = self.target + offset * (remaining / distance);
    }

    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.pivot.position, self.target, Vec3::Y)
    }

    /// Right-handed perspective projection with a 0..1 depth range.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new_perspective(45.0, 16.0 / 9.0, 0.1, 1000.0)
    }
}
