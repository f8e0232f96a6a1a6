//! Errors for loading catalogs and configuration.
//!
//! The showcase itself never fails; these only cover reading input files.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Tutorial '{id}' has an empty video_url")]
    InvalidTutorial { id: String },
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
