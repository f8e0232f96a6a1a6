//! Showcase configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::scroll::DEFAULT_SCROLL_STEP;

/// Number of tutorials requested from the data source.
pub const DEFAULT_LIMIT: usize = 12;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Item cap passed to the tutorial source.
    pub limit: usize,
    /// Pixels the strip moves per display refresh.
    pub scroll_step: f64,
    /// Route for the "view all" link.
    pub view_all_route: String,
    /// Route for the guest sign-in call to action.
    pub sign_in_route: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            scroll_step: DEFAULT_SCROLL_STEP,
            view_all_route: "/tutorials".to_string(),
            sign_in_route: "/auth".to_string(),
        }
    }
}

impl ShowcaseConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
