//! The animation document: its wire shape, typed model, defaulting rules
//! and the include-aware loader.

pub mod defaults;
pub mod format;
pub mod loader;
pub mod raw;
pub mod types;

pub use format::{DocumentFormat, DocumentFormatRegistry, MafFormat};
pub use loader::DocumentLoader;
pub use types::{
    Action, ActionBinding, ActionState, AnimationInfo, Document, LocalRotation, ModelInfo,
    ResetFlags, Rotation, Transformation,
};
