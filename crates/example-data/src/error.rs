//! Error types for the example-data crate.
//!
//! This module defines semantic error enums for registry parsing and dataset
//! generation, following the project's error handling conventions with
//! `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing or querying a seed registry.
///
/// These errors cover file I/O, JSON parsing, schema validation, and seed
/// lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The reference date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid reference date '{value}'")]
    InvalidReferenceDate {
        /// The rejected value.
        value: String,
    },

    /// A practice creation date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid creation date at practice index {index}: '{value}'")]
    InvalidPracticeDate {
        /// Zero-based index in the practices array.
        index: usize,
        /// The rejected value.
        value: String,
    },

    /// The registry lists no practices for records to belong to.
    #[error("registry contains no practices")]
    EmptyPractices,

    /// Two practices share an identifier.
    #[error("duplicate practice id '{id}' in registry")]
    DuplicatePracticeId {
        /// The repeated identifier.
        id: String,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// Errors that can occur during dataset generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a usable person name after maximum retries.
    #[error("failed to generate a usable person name after {max_attempts} attempts")]
    NameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// The registry has no practices to assign patients and users to.
    #[error("registry contains no practices for record assignment")]
    NoPractices,

    /// A generated date fell outside the representable calendar range.
    #[error("generated date is out of range: {offset_days} days from {anchor}")]
    DateOutOfRange {
        /// Anchor date the offset was applied to.
        anchor: String,
        /// Signed day offset that overflowed.
        offset_days: i64,
    },
}
