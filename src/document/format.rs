//! Pluggable document formats.
//!
//! The loader never assumes a file extension; each registered format gets a
//! chance to recognize the raw bytes, and the first match parses them. The
//! stock registry knows the native JSON format ([`MafFormat`]); hosts can
//! register additional formats ahead of it.

use crate::document::raw::RawDocument;
use crate::errors::Result;

pub trait DocumentFormat {
    /// Short lowercase identifier, used in diagnostics.
    fn name(&self) -> &str;

    /// Cheap content check. Must not allocate proportionally to the input.
    fn sniff(&self, bytes: &[u8]) -> bool;

    fn parse(&self, bytes: &[u8]) -> Result<RawDocument>;
}

/// The native document format: a single JSON object.
#[derive(Debug, Default, Clone, Copy)]
pub struct MafFormat;

impl DocumentFormat for MafFormat {
    fn name(&self) -> &str {
        "maf"
    }

    fn sniff(&self, bytes: &[u8]) -> bool {
        bytes
            .iter()
            .find(|b| !b.is_ascii_whitespace())
            .is_some_and(|b| *b == b'{')
    }

    fn parse(&self, bytes: &[u8]) -> Result<RawDocument> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

pub struct DocumentFormatRegistry {
    formats: Vec<Box<dyn DocumentFormat>>,
}

impl DocumentFormatRegistry {
    /// Registry with the native format installed.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(MafFormat));
        registry
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            formats: Vec::new(),
        }
    }

    /// Later registrations are tried first, so a host format can shadow the
    /// stock one.
    pub fn register(&mut self, format: Box<dyn DocumentFormat>) {
        self.formats.push(format);
    }

    #[must_use]
    pub fn select(&self, bytes: &[u8]) -> Option<&dyn DocumentFormat> {
        self.formats
            .iter()
            .rev()
            .find(|f| f.sniff(bytes))
            .map(Box::as_ref)
    }
}

impl Default for DocumentFormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
