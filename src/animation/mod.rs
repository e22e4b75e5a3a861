//! Binding resolution and frame stepping.

pub mod binder;
pub mod player;

pub use binder::Binder;
pub use player::AnimationPlayer;
