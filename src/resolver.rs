//! Video URL resolution.
//!
//! Maps a raw video link to the form a provider allows inside an embedded
//! frame. Rules are tried in order and the first match wins:
//!
//! 1. YouTube watch links (`youtube.com/watch?v=<id>`) and short links
//!    (`youtu.be/<id>`) become `https://www.youtube.com/embed/<id>`.
//! 2. Aparat links (`aparat.com/v/<hash>`) become Aparat's frame embed URL.
//! 3. Anything else is returned unchanged.
//!
//! Resolution never fails: an unmatched URL is the passthrough case.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Video host recognised by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    YouTube,
    Aparat,
    /// No provider pattern matched; the URL is used as-is.
    Direct,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::YouTube => "youtube",
            Provider::Aparat => "aparat",
            Provider::Direct => "direct",
        }
    }
}

/// One (pattern, transform) pair in the rule table.
struct Rule {
    provider: Provider,
    pattern: Regex,
    transform: fn(&Captures<'_>) -> String,
}

fn youtube_embed(caps: &Captures<'_>) -> String {
    format!("https://www.youtube.com/embed/{}", &caps[1])
}

fn aparat_embed(caps: &Captures<'_>) -> String {
    format!(
        "https://www.aparat.com/video/video/embed/videohash/{}/vt/frame",
        &caps[1]
    )
}

// The patterns are literals; a failure to compile them is a programming
// error caught by the tests below.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule {
            provider: Provider::YouTube,
            pattern: Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([A-Za-z0-9_-]+)")
                .expect("youtube pattern"),
            transform: youtube_embed,
        },
        Rule {
            provider: Provider::Aparat,
            pattern: Regex::new(r"aparat\.com/v/([A-Za-z0-9]+)").expect("aparat pattern"),
            transform: aparat_embed,
        },
    ]
});

/// Resolve `url` to an embeddable URL, borrowing the input when no rule
/// applies.
pub fn resolve(url: &str) -> Cow<'_, str> {
    for rule in RULES.iter() {
        if let Some(caps) = rule.pattern.captures(url) {
            return Cow::Owned((rule.transform)(&caps));
        }
    }
    Cow::Borrowed(url)
}

/// Owned convenience form of [`resolve`].
pub fn resolve_embed_url(url: &str) -> String {
    resolve(url).into_owned()
}

/// Which rule `url` would be resolved by.
pub fn detect_provider(url: &str) -> Provider {
    RULES
        .iter()
        .find(|rule| rule.pattern.is_match(url))
        .map(|rule| rule.provider)
        .unwrap_or(Provider::Direct)
}
