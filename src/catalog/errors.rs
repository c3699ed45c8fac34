//! Dataset errors
//!
//! All catalog errors are fatal: a dataset that fails validation is rejected
//! as a whole at load time, before any player is mounted.

use std::path::PathBuf;

/// Errors raised while loading or validating an algorithm dataset
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("algorithm '{slug}' has no steps")]
    EmptySteps { slug: String },

    #[error("duplicate algorithm slug '{slug}'")]
    DuplicateSlug { slug: String },

    #[error(
        "algorithm '{slug}' step {step}: pseudocode line {line} is outside 1..={lines}"
    )]
    PseudocodeLineOutOfRange {
        slug: String,
        step: usize,
        line: usize,
        lines: usize,
    },

    #[error("algorithm '{slug}' step {step}: highlight index {index} is outside 0..{len}")]
    HighlightOutOfRange {
        slug: String,
        step: usize,
        index: usize,
        len: usize,
    },

    #[error("algorithm '{slug}' step {step}: search bounds fall outside 0..{len}")]
    BoundsOutOfRange {
        slug: String,
        step: usize,
        len: usize,
    },

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
