//! # tutorials-showcase
//!
//! A self-scrolling tutorial video carousel for a storefront home page.
//!
//! The strip of tutorial cards scrolls on its own and loops forever; what a
//! visitor can see and click depends on whether they are signed in, and
//! clicking opens a modal player that knows how to embed YouTube and Aparat
//! links.
//!
//! ## Overview
//!
//! - **Resolver**: raw video link to embeddable link (YouTube, Aparat, passthrough)
//! - **Scroll loop**: doubled strip, fixed step per refresh, snap back at half width
//! - **Gate**: guests get free tutorials and no interaction, members get everything
//! - **Player**: closed/open state machine choosing an embed frame or a native video
//!
//! ## Example
//!
//! ```
//! use tutorials_showcase::{FixedAuth, Showcase, StaticCatalog, Tutorial, VideoType};
//!
//! let catalog = StaticCatalog::new(vec![
//!     Tutorial::new("1", "Intro", VideoType::Embed, "https://youtu.be/abc123XY").free(true),
//!     Tutorial::new("2", "Advanced", VideoType::Native, "https://cdn.example.com/2.mp4"),
//! ]);
//!
//! let mut showcase = Showcase::default();
//! showcase.refresh(&catalog, &FixedAuth(true));
//!
//! let render = showcase.render().unwrap();
//! assert_eq!(render.strip.len(), 4);
//!
//! assert!(showcase.click(0));
//! let surface = showcase.player().surface().unwrap();
//! assert_eq!(surface.src(), "https://www.youtube.com/embed/abc123XY");
//! ```

pub mod config;
pub mod error;
pub mod gate;
pub mod player;
pub mod resolver;
pub mod scroll;
pub mod showcase;
pub mod source;
pub mod tutorial;

pub use config::{DEFAULT_LIMIT, ShowcaseConfig};
pub use error::{Result, ShowcaseError};
pub use gate::{AuthState, ClickAction, GateView, Headline, Interaction, Suppressed, evaluate, gate};
pub use player::{
    Caption, EMBED_ALLOW, ModalPlayerController, PlaybackSurface, PlayerState, is_dismiss_key,
};
pub use resolver::{Provider, detect_provider, resolve, resolve_embed_url};
pub use scroll::{
    DEFAULT_SCROLL_STEP, FrameScheduler, MIN_LOOP_ITEMS, ManualScheduler, PauseSignal,
    ScrollLoopEngine, StripItem, TickLoop, TickOutcome, build_strip,
};
pub use showcase::{Showcase, ShowcaseRender, SignInCta};
pub use source::{AuthProvider, FixedAuth, StaticCatalog, TutorialQuery, TutorialSource};
pub use tutorial::{Tutorial, TutorialFeed, VideoType};
