//! Mesh decoding and the geometry it produces.

pub mod geometry;
pub mod mesh;
pub mod stl;

pub use geometry::Geometry;
pub use mesh::{MeshFormat, MeshFormatRegistry, MeshOptions};
pub use stl::StlFormat;
