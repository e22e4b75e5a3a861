//! A live model: decoded geometry plus the mutable pose the player drives.

use glam::{Affine3A, Mat3, Vec3, Vec4};

use crate::assets::Geometry;
use crate::document::{ResetFlags, Transformation};
use crate::scene::Pivot;

pub struct Model {
    name: String,
    pub geometry: Geometry,
    pub pivot: Pivot,
    pub scale: Vec3,
    pub visible: bool,
    pub color: Vec4,
}

impl Model {
    pub fn new(name: &str, geometry: Geometry) -> Self {
        Self {
            name: name.to_owned(),
            geometry,
            pivot: Pivot::new(),
            scale: Vec3::ONE,
            visible: true,
            color: Vec4::ONE,
        }
    }

    /// The registry key this model was added under. Immutable because the
    /// scene's name index relies on it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies one composite pose delta.
    ///
    /// The order is load-bearing: each step observes the pose produced by
    /// the steps before it, so a reset inside the same delta takes effect
    /// before the corresponding relative change.
    pub fn apply_transformation(&mut self, transformation: &Transformation) {
        if transformation.reset.contains(ResetFlags::SCALE) {
            self.scale = Vec3::ONE;
        }
        if transformation.scale != Vec3::ONE {
            self.scale *= transformation.scale;
        }

        if transformation.reset.contains(ResetFlags::LOCAL_ROTATION) {
            self.pivot.reset_local_rotation();
        }
        let local = transformation.local_rotate;
        if local.angle != 0.0 {
            self.pivot.local_rotate(local.angle, local.axis);
        }

        if transformation.reset.contains(ResetFlags::POSITION) {
            self.pivot.position = Vec3::ZERO;
        }
        self.pivot.global_move(transformation.global_move);
        self.pivot.local_move(transformation.local_move);
        let rotate = transformation.rotate;
        if rotate.angle != 0.0 {
            self.pivot.rotate(rotate.angle, rotate.start, rotate.end);
        }
    }

    /// Model-to-world transform: orientation and scale around the pivot,
    /// then translation to the pivot's position.
    #[must_use]
    pub fn matrix(&self) -> Affine3A {
        let linear = self.pivot.basis() * Mat3::from_diagonal(self.scale);
        Affine3A::from_mat3_translation(linear, self.pivot.position)
    }
}
