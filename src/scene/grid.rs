use glam::{Vec3, Vec4};

/// The reference grid on the ground plane (y = 0).
///
/// Purely procedural; hosts that render it ask for the line list each time
/// the parameters change.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Half extent along x and z.
    pub size: f32,
    /// Distance between neighboring lines.
    pub step: f32,
    pub color: Vec4,
    pub visible: bool,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            size: 10.0,
            step: 1.0,
            color: Vec4::new(0.4, 0.4, 0.4, 1.0),
            visible: true,
        }
    }
}

impl Grid {
    /// Endpoint pairs for every grid line, ordered line by line. Returns
    /// nothing when the grid is hidden or the step is degenerate.
    #[must_use]
    pub fn line_vertices(&self) -> Vec<Vec3> {
        if !self.visible || self.step <= 0.0 || self.size <= 0.0 {
            return Vec::new();
        }
        let count = (self.size / self.step).floor() as i32;
        let mut vertices = Vec::with_capacity(((count * 2 + 1) * 4) as usize);
        for index in -count..=count {
            let offset = index as f32 * self.step;
            // One line parallel to x, one parallel to z.
            vertices.push(Vec3::new(-self.size, 0.0, offset));
            vertices.push(Vec3::new(self.size, 0.0, offset));
            vertices.push(Vec3::new(offset, 0.0, -self.size));
            vertices.push(Vec3::new(offset, 0.0, self.size));
        }
        vertices
    }

    /// Number of line segments `line_vertices` will produce.
    #[must_use]
    pub fn line_count(&self) -> usize {
        if !self.visible || self.step <= 0.0 || self.size <= 0.0 {
            return 0;
        }
        let count = (self.size / self.step).floor() as usize;
        (count * 2 + 1) * 2
    }
}
