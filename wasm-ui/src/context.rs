//! Collaborator contexts provided by the page: who is signed in and where
//! tutorials come from.

use std::rc::Rc;

use tutorials_showcase::{AuthProvider, TutorialFeed, TutorialQuery, TutorialSource};
use yew::prelude::*;

/// Current-user signal. The showcase only reads it.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct AuthContext {
    pub user_present: bool,
}

impl AuthProvider for AuthContext {
    fn current_user_present(&self) -> bool {
        self.user_present
    }
}

/// Tutorial source shared with the section. `None` while still loading.
#[derive(Clone)]
pub struct CatalogContext {
    pub source: Option<Rc<dyn TutorialSource>>,
}

impl PartialEq for CatalogContext {
    fn eq(&self, other: &Self) -> bool {
        match (&self.source, &other.source) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Fetch tutorials from the nearest [`CatalogContext`].
#[hook]
pub fn use_tutorials(query: TutorialQuery) -> TutorialFeed {
    let catalog = use_context::<CatalogContext>();
    match catalog.and_then(|c| c.source) {
        Some(source) => source.fetch(&query),
        None => TutorialFeed::loading(),
    }
}
