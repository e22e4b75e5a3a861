use glam::Vec3;

#[derive(Debug, Clone)]
pub struct DirectionalLight {
    /// Direction the light travels, normalized on construction.
    pub direction: Vec3,
}

#[derive(Debug, Clone)]
pub struct PointLight {
    pub position: Vec3,
    pub range: f32,
}

#[derive(Debug, Clone)]
pub enum LightKind {
    Directional(DirectionalLight),
    Point(PointLight),
}

/// A scene light. Lighting is host-rendered; the engine only carries the
/// parameters through from setup to whatever consumes the scene.
#[derive(Debug, Clone)]
pub struct Light {
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,
}

impl Light {
    #[must_use]
    pub fn directional(direction: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Directional(DirectionalLight {
                direction: direction.normalize_or(Vec3::NEG_Y),
            }),
        }
    }

    #[must_use]
    pub fn point(position: Vec3, range: f32, color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Point(PointLight { position, range }),
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::directional(Vec3::new(-0.5, -1.0, -0.3), Vec3::ONE, 1.0)
    }
}
