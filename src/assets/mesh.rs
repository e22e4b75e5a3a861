//! Pluggable mesh formats, mirroring the document format registry.

use std::fs;
use std::path::Path;

use glam::Vec4;

use crate::assets::{Geometry, StlFormat};
use crate::errors::{EngineError, Result};

/// Decode-time choices that come from the model reference, not the file.
#[derive(Debug, Clone, Copy)]
pub struct MeshOptions {
    /// Uniform color applied to every vertex.
    pub color: Vec4,
    /// Ignore any normals in the file and compute flat ones.
    pub recompute_normals: bool,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            color: Vec4::ONE,
            recompute_normals: false,
        }
    }
}

pub trait MeshFormat {
    /// Short lowercase identifier, used in diagnostics.
    fn name(&self) -> &str;

    /// Cheap content check, same contract as document sniffing.
    fn sniff(&self, bytes: &[u8]) -> bool;

    fn decode(&self, bytes: &[u8], options: &MeshOptions) -> Result<Geometry>;
}

pub struct MeshFormatRegistry {
    formats: Vec<Box<dyn MeshFormat>>,
}

impl MeshFormatRegistry {
    /// Registry with the stock formats (STL) installed.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(StlFormat));
        registry
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            formats: Vec::new(),
        }
    }

    /// Later registrations are tried first.
    pub fn register(&mut self, format: Box<dyn MeshFormat>) {
        self.formats.push(format);
    }

    #[must_use]
    pub fn select(&self, bytes: &[u8]) -> Option<&dyn MeshFormat> {
        self.formats
            .iter()
            .rev()
            .find(|f| f.sniff(bytes))
            .map(Box::as_ref)
    }

    /// Reads `path` and decodes it with the first format that recognizes
    /// the content.
    pub fn decode_file(&self, path: &Path, options: &MeshOptions) -> Result<Geometry> {
        let bytes = fs::read(path)?;
        let format = self
            .select(&bytes)
            .ok_or_else(|| EngineError::UnrecognizedMesh(path.to_path_buf()))?;
        format.decode(&bytes, options)
    }
}

impl Default for MeshFormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
