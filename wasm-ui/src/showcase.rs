//! The tutorials showcase section.
//!
//! Needs no props: the feed comes from [`use_tutorials`] and the signed-in
//! user from [`AuthContext`]. All transient state (scroll offset, pause
//! flag, selected tutorial) lives in one [`Showcase`] per mounted section.

use tutorials_showcase::{
    AuthProvider, Interaction, PauseSignal, Showcase, TickLoop, TickOutcome,
};
use web_sys::Element;
use yew::prelude::*;

use crate::components::{PlayerDialog, VideoCard};
use crate::context::{AuthContext, use_tutorials};
use crate::frame::RafScheduler;

#[function_component(TutorialsShowcase)]
pub fn tutorials_showcase() -> Html {
    let showcase = use_mut_ref(Showcase::default);
    let strip_ref = use_node_ref();
    let paused = use_state(|| false);
    let redraw = use_force_update();

    let auth = use_context::<AuthContext>().unwrap_or_default();
    let query = showcase.borrow().query();
    let feed = use_tutorials(query);
    showcase.borrow_mut().apply_feed(&feed, auth.auth_state());
    let item_count = showcase.borrow().engine().item_count();

    // Tick loop: restarted whenever the pause flag or item count changes,
    // released on unmount.
    {
        let showcase = showcase.clone();
        let strip_ref = strip_ref.clone();
        use_effect_with((*paused, item_count), move |_| {
            let mut tick_loop = TickLoop::new(RafScheduler);
            if showcase.borrow().engine().is_enabled() {
                tick_loop.start(move || {
                    let Some(strip) = strip_ref.cast::<Element>() else {
                        return;
                    };
                    let mut showcase = showcase.borrow_mut();
                    match showcase.tick(f64::from(strip.scroll_width())) {
                        TickOutcome::Advanced(offset) => strip.set_scroll_left(offset as i32),
                        TickOutcome::Wrapped => strip.set_scroll_left(0),
                        TickOutcome::Paused | TickOutcome::Disabled => {}
                    }
                });
            }
            move || drop(tick_loop)
        });
    }

    let pause_handler = |signal: PauseSignal| {
        let showcase = showcase.clone();
        let paused = paused.clone();
        move || {
            if showcase.borrow_mut().pointer(signal) {
                paused.set(signal.pauses());
            }
        }
    };
    let onmouseenter = {
        let handle = pause_handler(PauseSignal::PointerEnter);
        Callback::from(move |_: MouseEvent| handle())
    };
    let onmouseleave = {
        let handle = pause_handler(PauseSignal::PointerLeave);
        Callback::from(move |_: MouseEvent| handle())
    };
    let ontouchstart = {
        let handle = pause_handler(PauseSignal::TouchStart);
        Callback::from(move |_: TouchEvent| handle())
    };
    let ontouchend = {
        let handle = pause_handler(PauseSignal::TouchEnd);
        Callback::from(move |_: TouchEvent| handle())
    };

    let on_card_click = {
        let showcase = showcase.clone();
        let redraw = redraw.clone();
        Callback::from(move |strip_index: usize| {
            if showcase.borrow_mut().click(strip_index) {
                redraw.force_update();
            }
        })
    };

    let on_close = {
        let showcase = showcase.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            if showcase.borrow_mut().close_player() {
                redraw.force_update();
            }
        })
    };

    let section = showcase.borrow();
    let Some(render) = section.render() else {
        return html! {};
    };
    let interactive = render.interaction == Interaction::SelectOpensPlayer;
    let player = section.player();

    html! {
        <section class="tutorials-showcase">
            <div class="container">
                <div class="showcase-header">
                    <div>
                        <h2>{ render.headline.title }</h2>
                        <p class="subtitle">{ render.headline.subtitle }</p>
                    </div>
                    <a class="view-all" href={render.view_all_route.to_string()}>
                        { "View all \u{2039}" }
                    </a>
                </div>

                <div
                    class="carousel"
                    {onmouseenter}
                    {onmouseleave}
                    {ontouchstart}
                    {ontouchend}
                >
                    <div class="fade-edge right" />
                    <div class="fade-edge left" />
                    <div class="strip" ref={strip_ref}>
                        { for render.strip.iter().map(|item| {
                            let index = item.strip_index;
                            html! {
                                <VideoCard
                                    key={item.key.clone()}
                                    tutorial={item.tutorial.clone()}
                                    on_click={on_card_click.reform(move |_| index)}
                                    {interactive}
                                />
                            }
                        })}
                    </div>
                </div>

                if let Some(cta) = render.sign_in {
                    <div class="sign-in-cta">
                        <p>{ cta.prompt }</p>
                        <a class="button" href={cta.route.to_string()}>{ "Sign in / Register" }</a>
                    </div>
                }
            </div>

            if let (Some(surface), Some(caption)) = (player.surface(), player.caption()) {
                <PlayerDialog
                    {surface}
                    title={caption.title.to_string()}
                    description={caption.description.map(|d| AttrValue::from(d.to_string()))}
                    {on_close}
                />
            }
        </section>
    }
}
