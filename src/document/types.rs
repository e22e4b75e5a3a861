//! The strongly-typed animation document model.
//!
//! Everything here is the *resolved* form: the defaulting pass
//! ([`crate::document::defaults`]) has already replaced every absent or
//! out-of-range field of the raw document with its documented default, so
//! consumers never see an `Option`. The one exception is the animation's
//! `time_length`, where "unspecified" is a real state (a static scene with
//! zero output frames).

use std::path::PathBuf;

use bitflags::bitflags;
use glam::{Vec3, Vec4};
use smallvec::SmallVec;

use crate::document::defaults;

/// Global animation parameters shared by every document.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationInfo {
    /// Output frame rate in frames per second. Always `> 0`.
    pub fps: f64,
    /// Timeline length in milliseconds; `None` means the document never
    /// specified one and the animation produces zero frames.
    pub time_length: Option<f64>,
    /// Output frame width in pixels.
    pub frame_width: u32,
    /// Output frame height in pixels.
    pub frame_height: u32,
    /// Clear color for rendered frames.
    pub background: Vec4,
    /// Whether renderers should multisample.
    pub multisampling: bool,
    /// Documents whose actions are merged into this one at load time.
    pub includes: Vec<PathBuf>,
}

impl AnimationInfo {
    /// The pre-scaled frame rate used by all keyframe arithmetic:
    /// frames per *millisecond*, since document times are in milliseconds.
    #[inline]
    #[must_use]
    pub fn frames_per_ms(&self) -> f64 {
        self.fps / 1000.0
    }

    /// Total number of output frames:
    /// `floor(time_length_ms * fps / 1000)`, or 0 when the timeline length
    /// is unspecified.
    #[must_use]
    pub fn total_frames(&self) -> u64 {
        match self.time_length {
            Some(ms) => (self.frames_per_ms() * ms).floor() as u64,
            None => 0,
        }
    }
}

impl Default for AnimationInfo {
    fn default() -> Self {
        Self {
            fps: defaults::FPS,
            time_length: None,
            frame_width: defaults::FRAME_WIDTH,
            frame_height: defaults::FRAME_HEIGHT,
            background: defaults::BACKGROUND,
            multisampling: defaults::MULTISAMPLING,
            includes: Vec::new(),
        }
    }
}

/// A named model reference from the document.
///
/// Created once by the loader and immutable afterwards, except for
/// `bindings`, which the binding resolver fills in post-parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
    /// Unique key into the scene's model registry.
    pub name: String,
    /// Geometry source file, relative to the document.
    pub path: PathBuf,
    /// Requested mesh color.
    pub color: Vec4,
    /// Recompute flat normals instead of trusting the mesh file.
    pub use_calculated_normals: bool,
    /// Applied to the live model exactly once during scene assembly.
    pub base_transformation: Transformation,
    /// Bindings targeting this model, in document order. Populated by
    /// [`crate::animation::Binder`].
    pub bindings: SmallVec<[ActionBinding; 2]>,
}

/// A named, ordered sequence of keyframes.
///
/// Names are not unique: the player replays *every* action whose name
/// matches a binding, so collisions fan out to all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub name: String,
    /// Keyframes in declaration order. The player consumes them as stored
    /// and assumes, but does not enforce, ascending `time`.
    pub states: Vec<ActionState>,
}

/// One keyframe: a timestamped target transform, visibility and color.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionState {
    /// Keyframe time in milliseconds.
    pub time: u64,
    /// Model visibility once this state applies.
    pub visible: bool,
    /// Model color once this state applies.
    pub color: Vec4,
    /// Pose delta applied when this state fires.
    pub transformation: Transformation,
}

impl ActionState {
    /// Value-semantics copy whose movement vectors and rotation angles are
    /// divided by `steps`; everything else (scale, resets, visibility,
    /// color) is carried over verbatim. This is the per-frame delta used by
    /// interpolated stepping.
    #[must_use]
    pub fn scaled_down(&self, steps: u64) -> Self {
        Self {
            time: self.time,
            visible: self.visible,
            color: self.color,
            transformation: self.transformation.scaled_down(steps),
        }
    }
}

/// Links one model name to one action name.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionBinding {
    pub model_name: String,
    pub action_name: String,
    /// Informational only; stepping derives all timing from
    /// [`ActionState::time`], never from the binding.
    pub start_time: f64,
    /// Informational only, like `start_time`.
    pub time_length: f64,
    /// Selects incremental accumulation toward each keyframe instead of
    /// exact-frame application.
    pub use_interpolation: bool,
}

bitflags! {
    /// Which parts of the pose a [`Transformation`] restores before its own
    /// deltas apply.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ResetFlags: u8 {
        const SCALE = 1 << 0;
        const LOCAL_ROTATION = 1 << 1;
        const POSITION = 1 << 2;
    }
}

/// A composite pose delta.
///
/// The application order (resets interleaved with scale, local rotation,
/// moves and the line rotation) is fixed by
/// [`crate::scene::Model::apply_transformation`]; later steps observe the
/// state changes made by earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformation {
    pub reset: ResetFlags,
    /// Multiplied into the model's scale. Components are always `> 0`
    /// after defaulting.
    pub scale: Vec3,
    /// Translation along the world axes.
    pub global_move: Vec3,
    /// Translation along the model's own basis.
    pub local_move: Vec3,
    /// Rotation of the position about an arbitrary line.
    pub rotate: Rotation,
    /// Rotation of the model's local basis.
    pub local_rotate: LocalRotation,
}

impl Transformation {
    /// The delta that changes nothing.
    pub const IDENTITY: Self = Self {
        reset: ResetFlags::empty(),
        scale: Vec3::ONE,
        global_move: Vec3::ZERO,
        local_move: Vec3::ZERO,
        rotate: Rotation {
            angle: 0.0,
            start: Vec3::ZERO,
            end: Vec3::ZERO,
        },
        local_rotate: LocalRotation {
            angle: 0.0,
            axis: Vec3::ZERO,
        },
    };

    /// Copy with `global_move`, `local_move` and both rotation angles
    /// divided by `steps`. Scale and reset flags are not scaled.
    #[must_use]
    pub fn scaled_down(&self, steps: u64) -> Self {
        let steps = steps as f32;
        Self {
            reset: self.reset,
            scale: self.scale,
            global_move: self.global_move / steps,
            local_move: self.local_move / steps,
            rotate: Rotation {
                angle: self.rotate.angle / steps,
                ..self.rotate
            },
            local_rotate: LocalRotation {
                angle: self.local_rotate.angle / steps,
                ..self.local_rotate
            },
        }
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotation about the line through `start` and `end`; the axis direction is
/// `end - start`. The angle is in radians (the source unit is resolved at
/// parse time).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub angle: f32,
    pub start: Vec3,
    pub end: Vec3,
}

/// Rotation of the local basis about `axis`, expressed in the pivot's own
/// frame. The angle is in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalRotation {
    pub angle: f32,
    pub axis: Vec3,
}

/// A fully loaded and resolved animation document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub info: AnimationInfo,
    pub models: Vec<ModelInfo>,
    /// Root actions followed by every included document's actions, in
    /// include traversal order.
    pub actions: Vec<Action>,
    /// The flat binding list as declared. The resolver copies each entry
    /// onto its target model; this master list stays untouched.
    pub bindings: Vec<ActionBinding>,
}
