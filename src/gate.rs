//! Authentication-gated visibility and interaction policy.
//!
//! Guests see only free tutorials and cannot open them; a sign-in prompt
//! is shown instead. Authenticated users see everything and a click opens
//! the player. When there is nothing to show (still loading, empty feed,
//! or no free tutorials for a guest) the whole section is suppressed.

use tracing::debug;

use crate::tutorial::{Tutorial, TutorialFeed};

/// The two authentication states the showcase distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Guest,
    Authenticated,
}

impl AuthState {
    pub fn from_user_present(present: bool) -> Self {
        if present {
            AuthState::Authenticated
        } else {
            AuthState::Guest
        }
    }

    /// Which click behaviour this state grants.
    pub fn interaction(&self) -> Interaction {
        match self {
            AuthState::Guest => Interaction::Disabled,
            AuthState::Authenticated => Interaction::SelectOpensPlayer,
        }
    }
}

/// Click policy for visible cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Clicks do nothing.
    Disabled,
    /// Clicking a card selects it and opens the player.
    SelectOpensPlayer,
}

/// What a click on a card should do.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickAction {
    Ignore,
    Select(Tutorial),
}

/// Why the section renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppressed {
    Loading,
    EmptyFeed,
    NothingVisible,
}

/// Section title and auth-dependent subtitle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headline {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const SECTION_TITLE: &str = "Video tutorials";
pub const MEMBER_SUBTITLE: &str = "The latest tutorial videos, picked for you";
pub const GUEST_SUBTITLE: &str = "Sign in for full access";
pub const SIGN_IN_PROMPT: &str = "Sign in to your account to watch the videos";

/// Visible subset plus the policy that applies to it.
#[derive(Debug, Clone, PartialEq)]
pub struct GateView {
    auth: AuthState,
    visible: Vec<Tutorial>,
}

impl GateView {
    pub fn auth(&self) -> AuthState {
        self.auth
    }

    pub fn visible(&self) -> &[Tutorial] {
        &self.visible
    }

    pub fn interaction(&self) -> Interaction {
        self.auth.interaction()
    }

    pub fn show_sign_in_cta(&self) -> bool {
        self.auth == AuthState::Guest
    }

    pub fn headline(&self) -> Headline {
        let subtitle = match self.auth {
            AuthState::Guest => GUEST_SUBTITLE,
            AuthState::Authenticated => MEMBER_SUBTITLE,
        };
        Headline {
            title: SECTION_TITLE,
            subtitle,
        }
    }

    /// Decide what a click on visible item `index` does.
    pub fn click(&self, index: usize) -> ClickAction {
        match (self.interaction(), self.visible.get(index)) {
            (Interaction::SelectOpensPlayer, Some(tutorial)) => {
                ClickAction::Select(tutorial.clone())
            }
            _ => ClickAction::Ignore,
        }
    }
}

/// Filter `feed` for `auth`, or say why nothing should render.
pub fn gate(feed: &TutorialFeed, auth: AuthState) -> Result<GateView, Suppressed> {
    if feed.loading {
        return Err(Suppressed::Loading);
    }
    if feed.tutorials.is_empty() {
        return Err(Suppressed::EmptyFeed);
    }
    let visible: Vec<Tutorial> = match auth {
        AuthState::Authenticated => feed.tutorials.clone(),
        AuthState::Guest => feed.tutorials.iter().filter(|t| t.is_free).cloned().collect(),
    };
    if visible.is_empty() {
        return Err(Suppressed::NothingVisible);
    }
    Ok(GateView { auth, visible })
}

/// [`gate`] with the suppression reason logged and discarded.
pub fn evaluate(feed: &TutorialFeed, auth: AuthState) -> Option<GateView> {
    gate(feed, auth)
        .map_err(|reason| debug!(?reason, ?auth, "showcase suppressed"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutorial::VideoType;

    fn mixed() -> Vec<Tutorial> {
        vec![
            Tutorial::new("a", "A", VideoType::Embed, "https://youtu.be/a").free(true),
            Tutorial::new("b", "B", VideoType::Native, "b.mp4").free(false),
            Tutorial::new("c", "C", VideoType::Native, "c.mp4").free(true),
            Tutorial::new("d", "D", VideoType::Embed, "https://aparat.com/v/d").free(false),
        ]
    }

    #[test]
    fn test_guest_sees_only_free() {
        let view = evaluate(&TutorialFeed::ready(mixed()), AuthState::Guest).unwrap();
        let ids: Vec<&str> = view.visible().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(view.show_sign_in_cta());
        assert_eq!(view.interaction(), Interaction::Disabled);
    }

    #[test]
    fn test_guest_click_ignored() {
        let view = evaluate(&TutorialFeed::ready(mixed()), AuthState::Guest).unwrap();
        for i in 0..view.visible().len() {
            assert_eq!(view.click(i), ClickAction::Ignore);
        }
    }

    #[test]
    fn test_authenticated_sees_all() {
        let view = evaluate(&TutorialFeed::ready(mixed()), AuthState::Authenticated).unwrap();
        assert_eq!(view.visible().len(), 4);
        assert!(!view.show_sign_in_cta());
        assert_eq!(view.headline().subtitle, MEMBER_SUBTITLE);
        match view.click(1) {
            ClickAction::Select(t) => assert_eq!(t.id, "b"),
            other => panic!("expected selection, got {other:?}"),
        }
    }

    #[test]
    fn test_click_out_of_range_ignored() {
        let view = evaluate(&TutorialFeed::ready(mixed()), AuthState::Authenticated).unwrap();
        assert_eq!(view.click(99), ClickAction::Ignore);
    }

    #[test]
    fn test_suppressed_while_loading() {
        let mut feed = TutorialFeed::ready(mixed());
        feed.loading = true;
        assert_eq!(gate(&feed, AuthState::Authenticated), Err(Suppressed::Loading));
        assert!(evaluate(&TutorialFeed::loading(), AuthState::Guest).is_none());
    }

    #[test]
    fn test_suppressed_when_empty() {
        let feed = TutorialFeed::ready(vec![]);
        assert_eq!(gate(&feed, AuthState::Authenticated), Err(Suppressed::EmptyFeed));
    }

    #[test]
    fn test_suppressed_for_guest_without_free_items() {
        let paid = mixed().into_iter().map(|t| t.free(false)).collect();
        let feed = TutorialFeed::ready(paid);
        assert_eq!(gate(&feed, AuthState::Guest), Err(Suppressed::NothingVisible));
        assert!(gate(&feed, AuthState::Authenticated).is_ok());
    }

    #[test]
    fn test_auth_from_user_present() {
        assert_eq!(AuthState::from_user_present(true), AuthState::Authenticated);
        assert_eq!(AuthState::from_user_present(false), AuthState::Guest);
    }
}
