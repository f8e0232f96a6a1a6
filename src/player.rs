//! Modal player controller.
//!
//! Two states: `Closed` (nothing selected) and `Open` (one tutorial
//! selected, player surface shown). Only a [`ClickAction::Select`] opens
//! it, so the guest policy cannot be bypassed from here. Closing drops the
//! selection; the renderer then tears the surface down and playback stops.

use tracing::debug;

use crate::gate::ClickAction;
use crate::resolver::{detect_provider, resolve};
use crate::tutorial::{Tutorial, VideoType};

/// Permissions granted to the embedded provider frame.
pub const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Whether a keyboard `key` value dismisses the player dialog.
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// How the selected tutorial is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackSurface {
    /// Restricted third-party frame.
    EmbedFrame {
        src: String,
        allow: &'static str,
        allow_fullscreen: bool,
    },
    /// Direct media element.
    NativeVideo {
        src: String,
        autoplay: bool,
        controls: bool,
    },
}

impl PlaybackSurface {
    pub fn for_tutorial(tutorial: &Tutorial) -> Self {
        match tutorial.video_type {
            VideoType::Embed => PlaybackSurface::EmbedFrame {
                src: resolve(&tutorial.video_url).into_owned(),
                allow: EMBED_ALLOW,
                allow_fullscreen: true,
            },
            VideoType::Native => PlaybackSurface::NativeVideo {
                src: tutorial.video_url.clone(),
                autoplay: true,
                controls: true,
            },
        }
    }

    pub fn src(&self) -> &str {
        match self {
            PlaybackSurface::EmbedFrame { src, .. }
            | PlaybackSurface::NativeVideo { src, .. } => src,
        }
    }
}

/// Title and optional description shown beneath the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caption<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlayerState {
    #[default]
    Closed,
    Open(Tutorial),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalPlayerController {
    state: PlayerState,
}

impl ModalPlayerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PlayerState::Open(_))
    }

    pub fn selected(&self) -> Option<&Tutorial> {
        match &self.state {
            PlayerState::Open(tutorial) => Some(tutorial),
            PlayerState::Closed => None,
        }
    }

    /// Apply the outcome of a card click. Returns true when the player
    /// opened (or switched to a different tutorial).
    pub fn select(&mut self, action: ClickAction) -> bool {
        match action {
            ClickAction::Ignore => false,
            ClickAction::Select(tutorial) => {
                debug!(
                    id = %tutorial.id,
                    video_type = tutorial.video_type.as_str(),
                    provider = detect_provider(&tutorial.video_url).name(),
                    "player opened"
                );
                self.state = PlayerState::Open(tutorial);
                true
            }
        }
    }

    /// Dismiss the player. Returns true when a surface was released.
    pub fn close(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            PlayerState::Open(tutorial) => {
                debug!(id = %tutorial.id, "player closed");
                true
            }
            PlayerState::Closed => false,
        }
    }

    /// Dialog open-state change request (overlay click, Escape, close
    /// button). Any request while open closes the player; opening only
    /// happens through [`Self::select`]. Returns true when a surface was
    /// released.
    pub fn on_open_change(&mut self, _open: bool) -> bool {
        self.close()
    }

    pub fn surface(&self) -> Option<PlaybackSurface> {
        self.selected().map(PlaybackSurface::for_tutorial)
    }

    pub fn caption(&self) -> Option<Caption<'_>> {
        self.selected().map(|t| Caption {
            title: &t.title,
            description: t.description.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yt() -> Tutorial {
        Tutorial::new(
            "y",
            "YouTube lesson",
            VideoType::Embed,
            "https://www.youtube.com/watch?v=abc123XY",
        )
        .with_description("Intro")
    }

    fn mp4() -> Tutorial {
        Tutorial::new("n", "Native lesson", VideoType::Native, "https://cdn.example.com/n.mp4")
    }

    #[test]
    fn test_starts_closed() {
        let player = ModalPlayerController::new();
        assert_eq!(player.state(), &PlayerState::Closed);
        assert!(player.surface().is_none());
        assert!(player.caption().is_none());
    }

    #[test]
    fn test_ignore_keeps_closed() {
        let mut player = ModalPlayerController::new();
        assert!(!player.select(ClickAction::Ignore));
        assert!(!player.is_open());
    }

    #[test]
    fn test_select_then_close() {
        let mut player = ModalPlayerController::new();
        assert!(player.select(ClickAction::Select(mp4())));
        assert_eq!(player.selected().map(|t| t.id.as_str()), Some("n"));
        assert!(player.close());
        assert_eq!(player.state(), &PlayerState::Closed);
        assert!(player.surface().is_none());
        assert!(!player.close());
    }

    #[test]
    fn test_embed_surface_resolves_url() {
        let mut player = ModalPlayerController::new();
        player.select(ClickAction::Select(yt()));
        assert_eq!(
            player.surface(),
            Some(PlaybackSurface::EmbedFrame {
                src: "https://www.youtube.com/embed/abc123XY".to_string(),
                allow: EMBED_ALLOW,
                allow_fullscreen: true,
            })
        );
        let caption = player.caption().unwrap();
        assert_eq!(caption.title, "YouTube lesson");
        assert_eq!(caption.description, Some("Intro"));
    }

    #[test]
    fn test_native_surface_uses_raw_url() {
        let mut player = ModalPlayerController::new();
        player.select(ClickAction::Select(mp4()));
        let surface = player.surface().unwrap();
        assert_eq!(
            surface,
            PlaybackSurface::NativeVideo {
                src: "https://cdn.example.com/n.mp4".to_string(),
                autoplay: true,
                controls: true,
            }
        );
        assert!(player.caption().unwrap().description.is_none());
    }

    #[test]
    fn test_embed_type_with_unknown_host_passes_through() {
        let t = Tutorial::new("e", "E", VideoType::Embed, "https://vimeo.com/1");
        assert_eq!(PlaybackSurface::for_tutorial(&t).src(), "https://vimeo.com/1");
    }

    #[test]
    fn test_open_change_closes() {
        let mut player = ModalPlayerController::new();
        player.select(ClickAction::Select(yt()));
        assert!(player.on_open_change(false));
        assert!(!player.is_open());
        assert!(!player.on_open_change(true));
        assert!(!player.is_open());
    }

    #[test]
    fn test_reselect_replaces() {
        let mut player = ModalPlayerController::new();
        player.select(ClickAction::Select(yt()));
        player.select(ClickAction::Select(mp4()));
        assert_eq!(player.selected().unwrap().id, "n");
    }

    #[test]
    fn test_dismiss_keys() {
        assert!(is_dismiss_key("Escape"));
        assert!(is_dismiss_key("Esc"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key(" "));
    }
}
