//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`EngineError`] covers the fatal failure modes:
//! - Animation-document loading errors (missing, empty, unrecognized)
//! - Mesh decoding errors
//!
//! Everything recoverable (a broken include, a binding without a model, a
//! mesh that fails to decode during scene assembly) is logged through the
//! `log` facade and skipped instead of being raised; see the loader and
//! player for the per-item containment rules.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, EngineError>`.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for the engine.
#[derive(Error, Debug)]
pub enum EngineError {
    // ========================================================================
    // Document Loading Errors
    // ========================================================================
    /// The root animation document does not exist or could not be read.
    #[error("animation document not found: {0}")]
    DocumentNotFound(PathBuf),

    /// The root animation document exists but holds no content.
    #[error("animation document is empty: {0}")]
    DocumentEmpty(PathBuf),

    /// No registered document format recognized the file content.
    #[error("no registered format recognizes: {0}")]
    UnrecognizedDocument(PathBuf),

    // ========================================================================
    // Mesh Decoding Errors
    // ========================================================================
    /// No registered mesh format recognized the file content.
    #[error("no registered format recognizes mesh: {0}")]
    UnrecognizedMesh(PathBuf),

    /// A mesh format matched but the payload was malformed.
    #[error("mesh decode error: {0}")]
    MeshDecode(String),

    // ========================================================================
    // I/O & Parsing Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, EngineError>`.
pub type Result<T> = std::result::Result<T, EngineError>;
