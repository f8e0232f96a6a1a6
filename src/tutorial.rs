//! Tutorial records as supplied by the data collaborator.

use serde::{Deserialize, Deserializer, Serialize};

/// Playback strategy for a tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
    /// Third-party page played through a restricted embedded frame.
    Embed,
    /// Direct media file played through a native video element.
    #[default]
    Native,
}

impl VideoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoType::Embed => "embed",
            VideoType::Native => "native",
        }
    }
}

// Anything other than "embed" is played natively, so unknown strings are
// accepted rather than rejected.
impl<'de> Deserialize<'de> for VideoType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw.eq_ignore_ascii_case("embed") {
            VideoType::Embed
        } else {
            VideoType::Native
        })
    }
}

/// A video-lesson record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub video_type: VideoType,
    pub video_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Tutorial {
    /// Minimal record; optional display metadata left absent.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        video_type: VideoType,
        video_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            thumbnail_url: None,
            category: None,
            duration: None,
            view_count: 0,
            is_free: false,
            video_type,
            video_url: video_url.into(),
            description: None,
        }
    }

    pub fn free(mut self, is_free: bool) -> Self {
        self.is_free = is_free;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// What the data collaborator hands back for one query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TutorialFeed {
    pub tutorials: Vec<Tutorial>,
    pub loading: bool,
}

impl TutorialFeed {
    pub fn ready(tutorials: Vec<Tutorial>) -> Self {
        Self {
            tutorials,
            loading: false,
        }
    }

    pub fn loading() -> Self {
        Self {
            tutorials: Vec::new(),
            loading: true,
        }
    }
}
