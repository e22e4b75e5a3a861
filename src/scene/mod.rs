//! Live scene state: models with their pivots, the camera, lights and the
//! reference grid.

pub mod camera;
pub mod grid;
pub mod light;
pub mod model;
pub mod pivot;
#[allow(clippy::module_inception)]
pub mod scene;

pub use camera::Camera;
pub use grid::Grid;
pub use light::{DirectionalLight, Light, LightKind, PointLight};
pub use model::Model;
pub use pivot::Pivot;
pub use scene::Scene;

use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to a model in a [`Scene`].
    pub struct ModelKey;
    /// Stable handle to a light in a [`Scene`].
    pub struct LightKey;
}
