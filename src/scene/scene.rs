//! The live scene: every decoded model under its document name, plus the
//! camera, lights, grid and output parameters.

use std::path::Path;

use glam::Vec4;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::assets::{MeshFormatRegistry, MeshOptions};
use crate::document::{defaults, Document};
use crate::scene::{Camera, Grid, Light, LightKey, Model, ModelKey};

pub struct Scene {
    models: SlotMap<ModelKey, Model>,
    // Name index into `models`; model names are immutable so the two can
    // only drift if insertion and removal skip the methods below.
    names: FxHashMap<String, ModelKey>,
    pub camera: Camera,
    pub lights: SlotMap<LightKey, Light>,
    pub grid: Grid,
    pub background: Vec4,
    pub frame_width: u32,
    pub frame_height: u32,
    pub multisampling: bool,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            models: SlotMap::with_key(),
            names: FxHashMap::default(),
            camera: Camera::default(),
            lights: SlotMap::with_key(),
            grid: Grid::default(),
            background: defaults::BACKGROUND,
            frame_width: defaults::FRAME_WIDTH,
            frame_height: defaults::FRAME_HEIGHT,
            multisampling: defaults::MULTISAMPLING,
        }
    }

    /// Builds a scene from a loaded document: output parameters are copied
    /// over and every model reference is decoded and added. Mesh paths
    /// resolve against `base_dir`, normally the document's directory.
    #[must_use]
    pub fn from_document(
        document: &Document,
        meshes: &MeshFormatRegistry,
        base_dir: &Path,
    ) -> Self {
        let mut scene = Self::new();
        scene.populate(document, meshes, base_dir);
        scene
    }

    /// Decodes and adds the document's models.
    ///
    /// A model whose mesh is missing or undecodable is logged and skipped;
    /// the rest of the scene still assembles. Each model's base
    /// transformation is applied exactly once, here.
    pub fn populate(&mut self, document: &Document, meshes: &MeshFormatRegistry, base_dir: &Path) {
        self.background = document.info.background;
        self.frame_width = document.info.frame_width;
        self.frame_height = document.info.frame_height;
        self.multisampling = document.info.multisampling;
        self.camera
            .set_aspect(document.info.frame_width, document.info.frame_height);

        for info in &document.models {
            let path = base_dir.join(&info.path);
            let options = MeshOptions {
                color: info.color,
                recompute_normals: info.use_calculated_normals,
            };
            match meshes.decode_file(&path, &options) {
                Ok(geometry) => {
                    let mut model = Model::new(&info.name, geometry);
                    model.color = info.color;
                    model.apply_transformation(&info.base_transformation);
                    self.add_model(model);
                }
                Err(err) => {
                    log::warn!("skipping model '{}': {err}", info.name);
                }
            }
        }
    }

    /// Adds a model under its name. A model already registered under the
    /// same name is replaced, since names are the scene's unique keys.
    pub fn add_model(&mut self, model: Model) -> ModelKey {
        if let Some(previous) = self.names.get(model.name()).copied() {
            log::warn!("replacing model '{}'", model.name());
            self.models.remove(previous);
        }
        let name = model.name().to_owned();
        let key = self.models.insert(model);
        self.names.insert(name, key);
        key
    }

    pub fn remove_model(&mut self, key: ModelKey) -> Option<Model> {
        let model = self.models.remove(key)?;
        self.names.remove(model.name());
        Some(model)
    }

    #[must_use]
    pub fn model_key(&self, name: &str) -> Option<ModelKey> {
        self.names.get(name).copied()
    }

    #[must_use]
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.get(self.model_key(name)?)
    }

    pub fn model_mut(&mut self, name: &str) -> Option<&mut Model> {
        let key = self.model_key(name)?;
        self.models.get_mut(key)
    }

    #[must_use]
    pub fn model_by_key(&self, key: ModelKey) -> Option<&Model> {
        self.models.get(key)
    }

    pub fn model_by_key_mut(&mut self, key: ModelKey) -> Option<&mut Model> {
        self.models.get_mut(key)
    }

    pub fn models(&self) -> impl Iterator<Item = (ModelKey, &Model)> {
        self.models.iter()
    }

    #[must_use]
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn add_light(&mut self, light: Light) -> LightKey {
        self.lights.insert(light)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
