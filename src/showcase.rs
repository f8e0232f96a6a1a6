//! The tutorials showcase section: gate, scroll loop and player composed
//! into one per-instance state object.
//!
//! A host (the web front end or the CLI simulator) owns one [`Showcase`],
//! calls [`Showcase::refresh`] whenever the feed or the signed-in user may
//! have changed, forwards pointer/touch and click events, and calls
//! [`Showcase::tick`] once per display refresh while mounted.

use tracing::debug;

use crate::config::ShowcaseConfig;
use crate::gate::{self, GateView, Headline, Interaction, SIGN_IN_PROMPT};
use crate::player::ModalPlayerController;
use crate::scroll::{PauseSignal, ScrollLoopEngine, StripItem, TickOutcome, build_strip};
use crate::source::{AuthProvider, TutorialQuery, TutorialSource};
use crate::tutorial::TutorialFeed;

/// Guest call to action under the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignInCta<'a> {
    pub prompt: &'static str,
    pub route: &'a str,
}

/// Everything a renderer needs for one frame of the section.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseRender<'a> {
    pub headline: Headline,
    pub strip: Vec<StripItem<'a>>,
    pub interaction: Interaction,
    pub view_all_route: &'a str,
    pub sign_in: Option<SignInCta<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Showcase {
    config: ShowcaseConfig,
    view: Option<GateView>,
    engine: ScrollLoopEngine,
    player: ModalPlayerController,
}

impl Default for Showcase {
    fn default() -> Self {
        Self::new(ShowcaseConfig::default())
    }
}

impl Showcase {
    pub fn new(config: ShowcaseConfig) -> Self {
        let engine = ScrollLoopEngine::new(config.scroll_step);
        Self {
            config,
            view: None,
            engine,
            player: ModalPlayerController::new(),
        }
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    pub fn query(&self) -> TutorialQuery {
        TutorialQuery {
            limit: self.config.limit,
        }
    }

    pub fn view(&self) -> Option<&GateView> {
        self.view.as_ref()
    }

    pub fn engine(&self) -> &ScrollLoopEngine {
        &self.engine
    }

    pub fn player(&self) -> &ModalPlayerController {
        &self.player
    }

    /// Pull the feed and the auth signal from the collaborators.
    pub fn refresh(&mut self, source: &dyn TutorialSource, auth: &dyn AuthProvider) -> bool {
        let feed = source.fetch(&self.query());
        self.apply_feed(&feed, auth.auth_state())
    }

    /// Re-evaluate the gate against `feed`.
    ///
    /// Returns true when the visible item count changed, in which case the
    /// host must restart its tick loop. The player is closed when the
    /// section disappears or interaction is no longer allowed.
    pub fn apply_feed(&mut self, feed: &TutorialFeed, auth: gate::AuthState) -> bool {
        self.view = gate::evaluate(feed, auth);
        let count = self.view.as_ref().map_or(0, |v| v.visible().len());
        let interactive = self
            .view
            .as_ref()
            .is_some_and(|v| v.interaction() == Interaction::SelectOpensPlayer);
        if !interactive && self.player.close() {
            debug!("player closed after access change");
        }
        self.engine.set_item_count(count)
    }

    /// Section output, or `None` when nothing should render.
    pub fn render(&self) -> Option<ShowcaseRender<'_>> {
        let view = self.view.as_ref()?;
        let sign_in = view.show_sign_in_cta().then(|| SignInCta {
            prompt: SIGN_IN_PROMPT,
            route: &self.config.sign_in_route,
        });
        Some(ShowcaseRender {
            headline: view.headline(),
            strip: build_strip(view.visible()),
            interaction: view.interaction(),
            view_all_route: &self.config.view_all_route,
            sign_in,
        })
    }

    /// Click on the card at `strip_index` (either copy). Returns true when
    /// the player opened.
    pub fn click(&mut self, strip_index: usize) -> bool {
        let Some(view) = self.view.as_ref() else {
            return false;
        };
        let len = view.visible().len();
        if len == 0 || strip_index >= 2 * len {
            return false;
        }
        let action = view.click(strip_index % len);
        self.player.select(action)
    }

    /// Pointer/touch pause signal. Returns true when the pause flag changed
    /// (the host restarts its tick loop on that).
    pub fn pointer(&mut self, signal: PauseSignal) -> bool {
        self.engine.apply(signal)
    }

    pub fn tick(&mut self, scroll_width: f64) -> TickOutcome {
        self.engine.tick(scroll_width)
    }

    /// Any dismissal of the player dialog: overlay click, close button or
    /// Escape. Returns true when the playback surface was released.
    pub fn close_player(&mut self) -> bool {
        self.player.on_open_change(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::AuthState;
    use crate::player::PlaybackSurface;
    use crate::scroll::{ManualScheduler, TickLoop};
    use crate::source::{FixedAuth, StaticCatalog};
    use crate::tutorial::{Tutorial, VideoType};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new(vec![
            Tutorial::new("a", "A", VideoType::Embed, "https://www.youtube.com/watch?v=abc123XY")
                .free(true),
            Tutorial::new("b", "B", VideoType::Native, "https://cdn.example.com/b.mp4"),
            Tutorial::new("c", "C", VideoType::Embed, "https://www.aparat.com/v/xyz789").free(true),
        ])
    }

    fn showcase(auth: bool) -> Showcase {
        let mut showcase = Showcase::default();
        showcase.refresh(&catalog(), &FixedAuth(auth));
        showcase
    }

    #[test]
    fn test_guest_render() {
        let showcase = showcase(false);
        let render = showcase.render().unwrap();
        assert_eq!(render.strip.len(), 4);
        assert_eq!(render.interaction, Interaction::Disabled);
        assert_eq!(render.sign_in.unwrap().route, "/auth");
        assert_eq!(render.view_all_route, "/tutorials");
        assert!(render.strip.iter().all(|s| s.tutorial.is_free));
    }

    #[test]
    fn test_guest_clicks_do_nothing() {
        let mut showcase = showcase(false);
        for i in 0..4 {
            assert!(!showcase.click(i));
        }
        assert!(!showcase.player().is_open());
    }

    #[test]
    fn test_member_click_opens_and_close_releases() {
        let mut showcase = showcase(true);
        let render = showcase.render().unwrap();
        assert_eq!(render.strip.len(), 6);
        assert!(render.sign_in.is_none());

        // Index 5 is the second copy of "c".
        assert!(showcase.click(5));
        assert_eq!(showcase.player().selected().unwrap().id, "c");
        match showcase.player().surface().unwrap() {
            PlaybackSurface::EmbedFrame { src, .. } => assert!(src.contains("xyz789")),
            other => panic!("expected embed frame, got {other:?}"),
        }
        assert!(showcase.close_player());
        assert!(showcase.player().surface().is_none());
    }

    #[test]
    fn test_repeated_dismissal_is_harmless() {
        let mut showcase = showcase(true);
        assert!(!showcase.close_player());
        showcase.click(1);
        assert!(showcase.close_player());
        assert!(!showcase.close_player());
        assert!(!showcase.player().is_open());
        assert!(showcase.player().caption().is_none());
    }

    #[test]
    fn test_click_outside_strip_ignored() {
        let mut showcase = showcase(true);
        assert!(!showcase.click(6));
        assert!(!showcase.player().is_open());
    }

    #[test]
    fn test_nothing_rendered_while_loading() {
        let mut showcase = Showcase::default();
        showcase.refresh(&StaticCatalog::pending(), &FixedAuth(true));
        assert!(showcase.render().is_none());
        assert!(!showcase.click(0));
    }

    #[test]
    fn test_nothing_rendered_for_empty_feed() {
        let mut showcase = Showcase::default();
        showcase.refresh(&StaticCatalog::new(vec![]), &FixedAuth(true));
        assert!(showcase.render().is_none());
    }

    #[test]
    fn test_nothing_rendered_for_guest_without_free() {
        let mut showcase = Showcase::default();
        let paid = StaticCatalog::new(vec![Tutorial::new("p", "P", VideoType::Native, "p.mp4")]);
        showcase.refresh(&paid, &FixedAuth(false));
        assert!(showcase.render().is_none());
    }

    #[test]
    fn test_sign_out_closes_player() {
        let mut showcase = showcase(true);
        showcase.click(0);
        assert!(showcase.player().is_open());
        showcase.refresh(&catalog(), &FixedAuth(false));
        assert!(!showcase.player().is_open());
    }

    #[test]
    fn test_item_count_change_requests_restart() {
        let mut showcase = Showcase::default();
        let feed = catalog().fetch(&TutorialQuery::default());
        assert!(showcase.apply_feed(&feed, AuthState::Authenticated));
        assert!(!showcase.apply_feed(&feed, AuthState::Authenticated));
        assert!(showcase.apply_feed(&feed, AuthState::Guest));
    }

    #[test]
    fn test_single_visible_item_is_static() {
        let mut showcase = Showcase::default();
        let one = StaticCatalog::new(vec![
            Tutorial::new("a", "A", VideoType::Native, "a.mp4").free(true),
            Tutorial::new("b", "B", VideoType::Native, "b.mp4"),
        ]);
        showcase.refresh(&one, &FixedAuth(false));
        assert_eq!(showcase.render().unwrap().strip.len(), 2);
        for _ in 0..100 {
            assert_eq!(showcase.tick(560.0), TickOutcome::Disabled);
        }
        assert_eq!(showcase.engine().offset(), 0.0);
    }

    #[test]
    fn test_hover_pauses_driven_loop() {
        let scheduler = ManualScheduler::new();
        let shared = Rc::new(RefCell::new(showcase(true)));
        let mut tick_loop = TickLoop::new(scheduler.clone());
        let s = shared.clone();
        tick_loop.start(move || {
            s.borrow_mut().tick(1200.0);
        });

        scheduler.fire_n(10);
        let moved = shared.borrow().engine().offset();
        assert!(moved > 7.9 && moved < 8.1);

        assert!(shared.borrow_mut().pointer(PauseSignal::PointerEnter));
        scheduler.fire_n(10);
        assert_eq!(shared.borrow().engine().offset(), moved);

        shared.borrow_mut().pointer(PauseSignal::PointerLeave);
        scheduler.fire();
        assert!(shared.borrow().engine().offset() > moved);

        drop(tick_loop);
        assert_eq!(scheduler.active(), 0);
    }
}
