//! CPU-side triangle geometry.
//!
//! Non-indexed: every three consecutive positions form one triangle. That
//! matches the mesh formats the engine decodes and keeps flat-normal
//! generation trivial.

use glam::{Vec3, Vec4};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub positions: Vec<Vec3>,
    /// One normal per vertex; empty until decoded or computed.
    pub normals: Vec<Vec3>,
    /// One color per vertex; empty until filled.
    pub colors: Vec<Vec4>,
}

impl Geometry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Replaces the normals with per-face flat normals, one copy per
    /// vertex. Degenerate triangles get a zero normal.
    pub fn compute_flat_normals(&mut self) {
        self.normals.clear();
        self.normals.reserve(self.positions.len());
        for triangle in self.positions.chunks_exact(3) {
            let normal = flat_normal(triangle[0], triangle[1], triangle[2]);
            self.normals.extend([normal; 3]);
        }
        // A trailing partial triangle still gets (zero) normals so the
        // per-vertex invariant holds.
        let remainder = self.positions.len() - self.normals.len();
        self.normals.extend(std::iter::repeat_n(Vec3::ZERO, remainder));
    }

    /// Sets every vertex color to `color`.
    pub fn fill_color(&mut self, color: Vec4) {
        self.colors.clear();
        self.colors.resize(self.positions.len(), color);
    }

    /// Axis-aligned bounds of all positions, or `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        let mut min = first;
        let mut max = first;
        for p in &self.positions[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        Some((min, max))
    }
}

pub(crate) fn flat_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}
