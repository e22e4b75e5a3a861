#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod assets;
pub mod document;
pub mod errors;
pub mod scene;

pub use animation::{AnimationPlayer, Binder};
pub use assets::{Geometry, MeshFormat, MeshFormatRegistry, MeshOptions, StlFormat};
pub use document::{
    Action, ActionBinding, ActionState, AnimationInfo, Document, DocumentFormat,
    DocumentFormatRegistry, DocumentLoader, MafFormat, ModelInfo, Transformation,
};
pub use errors::EngineError;
pub use scene::{Camera, Grid, Light, LightKey, Model, ModelKey, Pivot, Scene};
