//! Main application component: a storefront home page hosting the
//! tutorials showcase.

use std::rc::Rc;

use gloo::timers::callback::Timeout;
use tutorials_showcase::{StaticCatalog, TutorialSource};
use yew::prelude::*;

use crate::context::{AuthContext, CatalogContext};
use crate::showcase::TutorialsShowcase;

const DEMO_CATALOG: &str = include_str!("../../demos/catalog.json");

/// Simulated network latency before the catalog arrives.
const FETCH_DELAY_MS: u32 = 600;

/// Main application state.
#[derive(Clone, PartialEq, Default)]
pub struct AppState {
    /// Whether the demo visitor is signed in.
    pub signed_in: bool,
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(AppState::default);
    let catalog = use_state(|| CatalogContext { source: None });

    // Catalog "fetch": parse the embedded demo catalog after a short delay
    // so the section's loading state is visible.
    {
        let catalog = catalog.clone();
        use_effect_with((), move |_| {
            let handle = Timeout::new(FETCH_DELAY_MS, move || {
                match StaticCatalog::from_json_str(DEMO_CATALOG) {
                    Ok(loaded) => {
                        let source: Rc<dyn TutorialSource> = Rc::new(loaded);
                        catalog.set(CatalogContext {
                            source: Some(source),
                        });
                    }
                    Err(e) => gloo::console::error!(format!("catalog load failed: {e}")),
                }
            });
            move || {
                handle.cancel();
            }
        });
    }

    let on_toggle_sign_in = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.signed_in = !new_state.signed_in;
            state.set(new_state);
        })
    };

    let auth = AuthContext {
        user_present: state.signed_in,
    };

    html! {
        <ContextProvider<AuthContext> context={auth}>
            <ContextProvider<CatalogContext> context={(*catalog).clone()}>
                <div class="app">
                    <header class="header">
                        <div class="header-left">
                            <h1>{ "Storefront" }</h1>
                        </div>
                        <div class="header-right">
                            <span class="auth-status">
                                { if state.signed_in { "Signed in" } else { "Guest" } }
                            </span>
                            <button class="auth-button" onclick={on_toggle_sign_in}>
                                { if state.signed_in { "Sign out" } else { "Sign in" } }
                            </button>
                        </div>
                    </header>

                    <main class="main">
                        <section class="hero">
                            <h2>{ "Everything you need, delivered" }</h2>
                        </section>
                        <TutorialsShowcase />
                    </main>

                    <footer class="footer">
                        <span>{ "tutorials-showcase demo" }</span>
                    </footer>
                </div>
            </ContextProvider<CatalogContext>>
        </ContextProvider<AuthContext>>
    }
}
