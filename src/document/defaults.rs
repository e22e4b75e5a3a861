//! Resolution of raw documents into the typed model.
//!
//! This is the single place where "absent or invalid" turns into a concrete
//! value, so every fallback the format defines is a constant or a branch in
//! this file. None of it is an error: short of the fatal load failures in
//! [`crate::document::loader`], a document always resolves.

use std::path::PathBuf;

use glam::{Vec3, Vec4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::document::raw::{
    RawAction, RawActionBinding, RawActionState, RawAnimationInfo, RawColor, RawDocument,
    RawLocalRotation, RawModelInfo, RawRotation, RawTransformation, RawVec3,
};
use crate::document::types::{
    Action, ActionBinding, ActionState, AnimationInfo, Document, LocalRotation, ModelInfo,
    ResetFlags, Rotation, Transformation,
};

/// Frame rate used when the document omits one or gives a non-positive
/// value.
pub const FPS: f64 = 60.0;
/// Output width in pixels when unspecified.
pub const FRAME_WIDTH: u32 = 1280;
/// Output height in pixels when unspecified.
pub const FRAME_HEIGHT: u32 = 720;
/// Opaque black, the background when unspecified.
pub const BACKGROUND: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);
/// Multisampling is on unless the document turns it off.
pub const MULTISAMPLING: bool = true;
/// Gray assigned to a model whose declared color has out-of-range or
/// missing channels. An entirely absent model color gets a random one
/// instead.
pub const MODEL_COLOR_FALLBACK: Vec4 = Vec4::new(0.7, 0.7, 0.7, 1.0);

/// Angle unit of a whole document, declared in its `animationInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("radians") || s.eq_ignore_ascii_case("rad") => {
                Self::Radians
            }
            _ => Self::Degrees,
        }
    }

    fn to_radians(self, angle: f32) -> f32 {
        match self {
            Self::Degrees => angle.to_radians(),
            Self::Radians => angle,
        }
    }
}

/// The defaulting pass. Owned by the loader so that generated action names
/// stay unique across a root document and all of its includes, and so that
/// random color assignment can be made reproducible with a seed.
pub(crate) struct DocumentDefaults {
    rng: StdRng,
    action_counter: u64,
}

impl DocumentDefaults {
    pub(crate) fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            action_counter: 0,
        }
    }

    pub(crate) fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            action_counter: 0,
        }
    }

    pub(crate) fn resolve(&mut self, raw: RawDocument) -> Document {
        let raw_info = raw.animation_info.unwrap_or_default();
        let unit = AngleUnit::parse(raw_info.angle_unit.as_deref());
        let info = Self::resolve_info(raw_info);

        let models = raw
            .models
            .unwrap_or_default()
            .into_iter()
            .map(|m| self.resolve_model(m, unit))
            .collect();
        let actions = raw
            .actions
            .unwrap_or_default()
            .into_iter()
            .map(|a| self.resolve_action(a, unit))
            .collect();
        let bindings = raw
            .bindings
            .unwrap_or_default()
            .into_iter()
            .map(Self::resolve_binding)
            .collect();

        Document {
            info,
            models,
            actions,
            bindings,
        }
    }

    fn resolve_info(raw: RawAnimationInfo) -> AnimationInfo {
        AnimationInfo {
            fps: raw.fps.filter(|f| f.is_finite() && *f > 0.0).unwrap_or(FPS),
            time_length: raw.time_length.filter(|t| t.is_finite() && *t > 0.0),
            frame_width: resolve_dimension(raw.frame_width, FRAME_WIDTH),
            frame_height: resolve_dimension(raw.frame_height, FRAME_HEIGHT),
            background: raw
                .background
                .and_then(valid_color)
                .unwrap_or(BACKGROUND),
            multisampling: raw.use_multisampling.unwrap_or(MULTISAMPLING),
            includes: raw
                .include
                .unwrap_or_default()
                .into_iter()
                .map(PathBuf::from)
                .collect(),
        }
    }

    fn resolve_model(&mut self, raw: RawModelInfo, unit: AngleUnit) -> ModelInfo {
        let color = match raw.color {
            None => self.random_color(),
            Some(c) => valid_color(c).unwrap_or(MODEL_COLOR_FALLBACK),
        };
        ModelInfo {
            name: raw.name.unwrap_or_default(),
            path: PathBuf::from(raw.path.unwrap_or_default()),
            color,
            use_calculated_normals: raw.use_calculated_normals.unwrap_or(false),
            base_transformation: resolve_transformation(raw.base_transformation, unit),
            bindings: SmallVec::new(),
        }
    }

    fn resolve_action(&mut self, raw: RawAction, unit: AngleUnit) -> Action {
        let name = match raw.name {
            Some(n) if !n.trim().is_empty() => n,
            _ => self.next_action_name(),
        };
        let states = raw
            .states
            .unwrap_or_default()
            .into_iter()
            .map(|s| self.resolve_state(s, unit))
            .collect();
        Action { name, states }
    }

    fn resolve_state(&mut self, raw: RawActionState, unit: AngleUnit) -> ActionState {
        ActionState {
            time: raw.time.unwrap_or(0).max(0) as u64,
            visible: raw.is_model_visible.unwrap_or(true),
            color: raw
                .color
                .and_then(valid_color)
                .unwrap_or_else(|| self.random_color()),
            transformation: resolve_transformation(raw.transformation, unit),
        }
    }

    fn resolve_binding(raw: RawActionBinding) -> ActionBinding {
        ActionBinding {
            model_name: raw.model_name.unwrap_or_default(),
            action_name: raw.action_name.unwrap_or_default(),
            start_time: raw.start_time.filter(|t| t.is_finite()).unwrap_or(0.0),
            time_length: raw.time_length.filter(|t| t.is_finite()).unwrap_or(0.0),
            use_interpolation: raw.use_interpolation.unwrap_or(false),
        }
    }

    fn next_action_name(&mut self) -> String {
        self.action_counter += 1;
        format!("action_{}", self.action_counter)
    }

    fn random_color(&mut self) -> Vec4 {
        Vec4::new(
            self.rng.random_range(0.0..=1.0),
            self.rng.random_range(0.0..=1.0),
            self.rng.random_range(0.0..=1.0),
            1.0,
        )
    }
}

fn resolve_dimension(raw: Option<i64>, fallback: u32) -> u32 {
    raw.filter(|d| (1..=i64::from(u32::MAX)).contains(d))
        .map_or(fallback, |d| d as u32)
}

fn resolve_transformation(raw: Option<RawTransformation>, unit: AngleUnit) -> Transformation {
    let Some(raw) = raw else {
        return Transformation::IDENTITY;
    };
    let mut reset = ResetFlags::empty();
    reset.set(ResetFlags::SCALE, raw.reset_scale.unwrap_or(false));
    reset.set(
        ResetFlags::LOCAL_ROTATION,
        raw.reset_local_rotation.unwrap_or(false),
    );
    reset.set(ResetFlags::POSITION, raw.reset_position.unwrap_or(false));
    Transformation {
        reset,
        scale: resolve_scale(raw.scale),
        global_move: resolve_vec3(raw.global_move),
        local_move: resolve_vec3(raw.local_move),
        rotate: resolve_rotation(raw.rotate, unit),
        local_rotate: resolve_local_rotation(raw.local_rotate, unit),
    }
}

fn resolve_rotation(raw: Option<RawRotation>, unit: AngleUnit) -> Rotation {
    let raw = raw.unwrap_or_default();
    Rotation {
        angle: unit.to_radians(finite_or_zero(raw.angle)),
        start: resolve_vec3(raw.start),
        end: resolve_vec3(raw.end),
    }
}

fn resolve_local_rotation(raw: Option<RawLocalRotation>, unit: AngleUnit) -> LocalRotation {
    let raw = raw.unwrap_or_default();
    LocalRotation {
        angle: unit.to_radians(finite_or_zero(raw.angle)),
        axis: resolve_vec3(raw.axis),
    }
}

/// Absent or non-finite components become 0.
fn resolve_vec3(raw: Option<RawVec3>) -> Vec3 {
    let raw = raw.unwrap_or_default();
    Vec3::new(
        finite_or_zero(raw.x),
        finite_or_zero(raw.y),
        finite_or_zero(raw.z),
    )
}

/// Scale components must be strictly positive; anything else (absent,
/// non-finite, zero, negative) is ignored, i.e. stays 1.
fn resolve_scale(raw: Option<RawVec3>) -> Vec3 {
    let raw = raw.unwrap_or_default();
    let component = |c: Option<f32>| c.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(1.0);
    Vec3::new(component(raw.x), component(raw.y), component(raw.z))
}

fn finite_or_zero(value: Option<f32>) -> f32 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// A declared color is usable only if r, g and b are all present and every
/// given channel is inside `[0, 1]`. Alpha defaults to 1.
fn valid_color(raw: RawColor) -> Option<Vec4> {
    let (Some(r), Some(g), Some(b)) = (raw.r, raw.g, raw.b) else {
        return None;
    };
    let a = raw.a.unwrap_or(1.0);
    let in_range = |c: f32| (0.0..=1.0).contains(&c);
    (in_range(r) && in_range(g) && in_range(b) && in_range(a)).then(|| Vec4::new(r, g, b, a))
}
