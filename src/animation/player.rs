//! The frame-stepping player.
//!
//! One [`AnimationPlayer::advance`] call computes exactly one output
//! frame: it applies every keyframe that fires on the current frame index
//! to its live model, then increments the index. There is no continuous
//! time anywhere; keyframe times convert to discrete frame indices once
//! and everything else is integer comparisons.

use std::sync::Arc;

use crate::document::{ActionState, Document};
use crate::scene::{Model, ModelKey, Scene};

/// A bound model: the document entry and its live counterpart.
struct Target {
    model_index: usize,
    key: ModelKey,
}

pub struct AnimationPlayer {
    document: Arc<Document>,
    /// Built once at construction, only ever shrinks (when a live model
    /// disappears mid-animation).
    targets: Vec<Target>,
    frames_per_ms: f64,
    total_frames: u64,
    current_frame: u64,
}

impl AnimationPlayer {
    /// Associates every model that has bindings with its live model in
    /// `scene`. A bound model with no live counterpart is logged and left
    /// out; it does not fail construction.
    ///
    /// Expects a document whose bindings have been attached by
    /// [`crate::animation::Binder::resolve`].
    #[must_use]
    pub fn new(document: Arc<Document>, scene: &Scene) -> Self {
        let mut targets = Vec::new();
        for (model_index, info) in document.models.iter().enumerate() {
            if info.bindings.is_empty() {
                continue;
            }
            match scene.model_key(&info.name) {
                Some(key) => targets.push(Target { model_index, key }),
                None => {
                    log::warn!("no live model named '{}'; its bindings are ignored", info.name);
                }
            }
        }
        let frames_per_ms = document.info.frames_per_ms();
        let total_frames = document.info.total_frames();
        Self {
            document,
            targets,
            frames_per_ms,
            total_frames,
            current_frame: 0,
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Index of the next frame `advance` will compute.
    #[must_use]
    pub fn current_frame(&self) -> u64 {
        self.current_frame
    }

    #[must_use]
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current_frame >= self.total_frames
    }

    /// Computes one frame.
    ///
    /// For every bound model, every binding, every action whose name
    /// matches, the action's keyframes are scanned in stored order:
    ///
    /// - without interpolation, a keyframe applies in full on the exact
    ///   frame its time maps to;
    /// - with interpolation, the first keyframe still ahead of the current
    ///   frame applies a scaled-down copy (movement and rotation angles
    ///   divided by the frame distance from the previous keyframe), at
    ///   most one such application per model per call. The result is a
    ///   linear accumulation toward the keyframe, deliberately built from
    ///   repeated small increments rather than an interpolation curve.
    ///
    /// The frame index advances exactly once per call no matter how many
    /// keyframes fired. Advancing past the last frame is harmless; callers
    /// normally stop when [`Self::is_finished`] turns true.
    pub fn advance(&mut self, scene: &mut Scene) {
        let document = Arc::clone(&self.document);
        let frames_per_ms = self.frames_per_ms;
        let current = self.current_frame as i64;

        self.targets.retain(|target| {
            let info = &document.models[target.model_index];
            let Some(model) = scene.model_by_key_mut(target.key) else {
                log::warn!("live model '{}' disappeared; it is no longer animated", info.name);
                return false;
            };

            // At most one interpolated application per model per call,
            // across all of its bindings.
            let mut applied = false;
            for binding in &info.bindings {
                for action in document
                    .actions
                    .iter()
                    .filter(|a| a.name == binding.action_name)
                {
                    for (position, state) in action.states.iter().enumerate() {
                        let frame = frame_index(frames_per_ms, state.time);
                        if binding.use_interpolation {
                            if frame > current && !applied {
                                let previous = if position == 0 {
                                    state
                                } else {
                                    &action.states[position - 1]
                                };
                                let steps = frame - frame_index(frames_per_ms, previous.time);
                                if steps > 0 {
                                    apply_state(model, &state.scaled_down(steps as u64));
                                    applied = true;
                                }
                            }
                        } else if frame == current {
                            apply_state(model, state);
                            applied = true;
                        }
                    }
                }
            }
            true
        });

        self.current_frame += 1;
    }

    /// Steps until `frame` is the next frame to compute. Jumping is just
    /// repeated single stepping; there is no shortcut that skips the
    /// intermediate applications.
    pub fn advance_to(&mut self, scene: &mut Scene, frame: u64) {
        while self.current_frame < frame {
            self.advance(scene);
        }
    }
}

fn frame_index(frames_per_ms: f64, time_ms: u64) -> i64 {
    (frames_per_ms * time_ms as f64).floor() as i64
}

/// A keyframe carries visibility and color along with its transform; all
/// three land on the model together.
fn apply_state(model: &mut Model, state: &ActionState) {
    model.visible = state.visible;
    model.color = state.color;
    model.apply_transformation(&state.transformation);
}
