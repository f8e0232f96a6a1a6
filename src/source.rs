//! External collaborators: where tutorials and the signed-in user come from.
//!
//! The showcase only reads through these traits. [`StaticCatalog`] and
//! [`FixedAuth`] are the in-memory implementations used by the CLI, the web
//! demo page and tests.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::DEFAULT_LIMIT;
use crate::error::{Result, ShowcaseError};
use crate::gate::AuthState;
use crate::tutorial::{Tutorial, TutorialFeed};

/// Query sent to the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialQuery {
    pub limit: usize,
}

impl Default for TutorialQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Supplies tutorials.
pub trait TutorialSource {
    fn fetch(&self, query: &TutorialQuery) -> TutorialFeed;
}

/// Read-only "is a user signed in" signal.
pub trait AuthProvider {
    fn current_user_present(&self) -> bool;

    fn auth_state(&self) -> AuthState {
        AuthState::from_user_present(self.current_user_present())
    }
}

/// Fixed answer to [`AuthProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedAuth(pub bool);

impl AuthProvider for FixedAuth {
    fn current_user_present(&self) -> bool {
        self.0
    }
}

/// In-memory tutorial list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaticCatalog {
    tutorials: Vec<Tutorial>,
    loading: bool,
}

impl StaticCatalog {
    pub fn new(tutorials: Vec<Tutorial>) -> Self {
        Self {
            tutorials,
            loading: false,
        }
    }

    /// A catalog that always reports it is still loading.
    pub fn pending() -> Self {
        Self {
            tutorials: Vec::new(),
            loading: true,
        }
    }

    /// Parse a JSON array of tutorials, rejecting empty `video_url`s.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let tutorials: Vec<Tutorial> = serde_json::from_str(text)?;
        if let Some(bad) = tutorials.iter().find(|t| t.video_url.trim().is_empty()) {
            return Err(ShowcaseError::InvalidTutorial { id: bad.id.clone() });
        }
        debug!(count = tutorials.len(), "catalog loaded");
        Ok(Self::new(tutorials))
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl TutorialSource for StaticCatalog {
    fn fetch(&self, query: &TutorialQuery) -> TutorialFeed {
        if self.loading {
            return TutorialFeed::loading();
        }
        TutorialFeed::ready(self.tutorials.iter().take(query.limit).cloned().collect())
    }
}
