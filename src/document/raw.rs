//! The permissive wire shape of an animation document.
//!
//! Every field is optional and unknown keys are ignored, so documents from
//! older or hand-edited sources still parse. Turning this into the typed
//! model (and filling in all defaults) is the job of
//! [`crate::document::defaults`].

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDocument {
    pub animation_info: Option<RawAnimationInfo>,
    pub models: Option<Vec<RawModelInfo>>,
    pub actions: Option<Vec<RawAction>>,
    pub bindings: Option<Vec<RawActionBinding>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAnimationInfo {
    pub fps: Option<f64>,
    /// Milliseconds.
    pub time_length: Option<f64>,
    pub frame_width: Option<i64>,
    pub frame_height: Option<i64>,
    pub background: Option<RawColor>,
    pub use_multisampling: Option<bool>,
    /// `"degrees"` (default) or `"radians"`; covers every angle in the
    /// document it appears in.
    pub angle_unit: Option<String>,
    pub include: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawModelInfo {
    pub name: Option<String>,
    pub path: Option<String>,
    pub color: Option<RawColor>,
    pub use_calculated_normals: Option<bool>,
    pub base_transformation: Option<RawTransformation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAction {
    pub name: Option<String>,
    pub states: Option<Vec<RawActionState>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawActionState {
    /// Milliseconds; negative values clamp to zero.
    pub time: Option<i64>,
    pub is_model_visible: Option<bool>,
    pub color: Option<RawColor>,
    pub transformation: Option<RawTransformation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawActionBinding {
    pub model_name: Option<String>,
    pub action_name: Option<String>,
    pub start_time: Option<f64>,
    pub time_length: Option<f64>,
    pub use_interpolation: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTransformation {
    pub reset_scale: Option<bool>,
    pub reset_local_rotation: Option<bool>,
    pub reset_position: Option<bool>,
    pub scale: Option<RawVec3>,
    pub global_move: Option<RawVec3>,
    pub local_move: Option<RawVec3>,
    pub rotate: Option<RawRotation>,
    pub local_rotate: Option<RawLocalRotation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRotation {
    pub angle: Option<f32>,
    pub start: Option<RawVec3>,
    pub end: Option<RawVec3>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLocalRotation {
    pub angle: Option<f32>,
    pub axis: Option<RawVec3>,
}

/// Per-component-optional vector; the defaulting pass decides what an
/// absent component means (0 for moves and axes, 1 for scale).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct RawVec3 {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct RawColor {
    pub r: Option<f32>,
    pub g: Option<f32>,
    pub b: Option<f32>,
    pub a: Option<f32>,
}
