use glam::{Mat3, Quat, Vec3};

/// A model's placement: world position plus a local orthonormal basis.
///
/// The basis is stored as three explicit axis vectors rather than an
/// accumulated quaternion. Incremental animation applies thousands of tiny
/// rotations to the same pivot; after every local rotation the Z axis is
/// re-derived as the cross product of X and Y, which keeps the frame
/// orthonormal instead of letting compounded quaternion error drift.
///
/// All rotation primitives treat a degenerate axis (length ~ 0) as a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct Pivot {
    /// World-space position of the pivot point.
    pub position: Vec3,

    x_axis: Vec3,
    y_axis: Vec3,
    z_axis: Vec3,
}

impl Pivot {
    /// Creates a pivot at the world origin with the identity basis.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            x_axis: Vec3::X,
            y_axis: Vec3::Y,
            z_axis: Vec3::Z,
        }
    }

    /// Creates a pivot at `position` with the identity basis.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }

    // ========================================================================
    // Basis access
    // ========================================================================

    /// Local X axis in world space.
    #[inline]
    #[must_use]
    pub fn x_axis(&self) -> Vec3 {
        self.x_axis
    }

    /// Local Y axis in world space.
    #[inline]
    #[must_use]
    pub fn y_axis(&self) -> Vec3 {
        self.y_axis
    }

    /// Local Z axis in world space.
    #[inline]
    #[must_use]
    pub fn z_axis(&self) -> Vec3 {
        self.z_axis
    }

    /// The local basis as a column matrix (X, Y, Z).
    #[inline]
    #[must_use]
    pub fn basis(&self) -> Mat3 {
        Mat3::from_cols(self.x_axis, self.y_axis, self.z_axis)
    }

    // ========================================================================
    // Movement
    // ========================================================================

    /// Translates the position along the world axes.
    #[inline]
    pub fn global_move(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Translates the position along the pivot's own basis vectors,
    /// combining all three components weighted by the current axes.
    #[inline]
    pub fn local_move(&mut self, delta: Vec3) {
        self.position += delta.x * self.x_axis + delta.y * self.y_axis + delta.z * self.z_axis;
    }

    // ========================================================================
    // Rotation
    // ========================================================================

    /// Rotates the position around the world origin by `angle` radians
    /// about `axis`. The basis is untouched; this is the orbit primitive.
    pub fn global_rotate(&mut self, angle: f32, axis: Vec3) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        self.position = Quat::from_axis_angle(axis, angle) * self.position;
    }

    /// Rotates the local basis by `angle` radians about `axis`, where the
    /// axis is expressed in the pivot's local frame (so `Vec3::Y` always
    /// means "this model's up", however the model is currently oriented).
    ///
    /// After the rotation the basis is re-orthonormalized: X and Y are
    /// normalized and Z is recomputed as their cross product.
    pub fn local_rotate(&mut self, angle: f32, axis: Vec3) {
        let world_axis = axis.x * self.x_axis + axis.y * self.y_axis + axis.z * self.z_axis;
        let Some(world_axis) = world_axis.try_normalize() else {
            return;
        };
        let rotation = Quat::from_axis_angle(world_axis, angle);
        self.x_axis = (rotation * self.x_axis).normalize();
        self.y_axis = (rotation * self.y_axis).normalize();
        self.z_axis = self.x_axis.cross(self.y_axis).normalize();
    }

    /// Rotates the position by `angle` radians about the line through
    /// `start` and `end`. The axis direction is `end - start`.
    pub fn rotate(&mut self, angle: f32, start: Vec3, end: Vec3) {
        let Some(axis) = (end - start).try_normalize() else {
            return;
        };
        let rotation = Quat::from_axis_angle(axis, angle);
        self.position = start + rotation * (self.position - start);
    }

    /// Restores the identity basis. Position is untouched.
    pub fn reset_local_rotation(&mut self) {
        self.x_axis = Vec3::X;
        self.y_axis = Vec3::Y;
        self.z_axis = Vec3::Z;
    }
}

impl Default for Pivot {
    fn default() -> Self {
        Self::new()
    }
}
