//! UI Components for the tutorials showcase.

use tutorials_showcase::{PlaybackSurface, Tutorial, is_dismiss_key};
use web_sys::HtmlElement;
use yew::prelude::*;

/// One card in the scrolling strip.
#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub tutorial: Tutorial,
    pub on_click: Callback<()>,
    /// Guests get a card that looks inert.
    #[prop_or(true)]
    pub interactive: bool,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };
    let t = &props.tutorial;

    html! {
        <div class={classes!["video-card", props.interactive.then_some("interactive")]} {onclick}>
            <div class="video-thumb">
                if let Some(url) = &t.thumbnail_url {
                    <img src={url.clone()} alt={t.title.clone()} loading="lazy" />
                } else {
                    <div class="thumb-placeholder">{ "\u{25B6}" }</div>
                }
                <div class="thumb-overlay">
                    <span class="play-button">{ "\u{25B6}" }</span>
                </div>
                if let Some(category) = &t.category {
                    <span class="badge">{ category }</span>
                }
            </div>
            <div class="video-meta">
                <p class="video-title">{ &t.title }</p>
                <div class="video-stats">
                    if let Some(duration) = &t.duration {
                        <span class="duration">{ format!("\u{23F1} {}", duration) }</span>
                    }
                    <span class="views">{ format!("\u{1F441} {}", t.view_count) }</span>
                </div>
            </div>
        </div>
    }
}

/// Player surface for the selected tutorial.
#[derive(Properties, PartialEq)]
pub struct PlayerSurfaceProps {
    pub surface: PlaybackSurface,
}

#[function_component(PlayerSurface)]
pub fn player_surface(props: &PlayerSurfaceProps) -> Html {
    match &props.surface {
        PlaybackSurface::EmbedFrame {
            src,
            allow,
            allow_fullscreen,
        } => html! {
            <iframe
                class="player-frame"
                src={src.clone()}
                allow={*allow}
                allowfullscreen={*allow_fullscreen}
            />
        },
        PlaybackSurface::NativeVideo {
            src,
            autoplay,
            controls,
        } => html! {
            <video
                class="player-video"
                src={src.clone()}
                autoplay={*autoplay}
                controls={*controls}
            />
        },
    }
}

/// Modal dialog around the player.
#[derive(Properties, PartialEq)]
pub struct PlayerDialogProps {
    pub surface: PlaybackSurface,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    pub on_close: Callback<()>,
}

#[function_component(PlayerDialog)]
pub fn player_dialog(props: &PlayerDialogProps) -> Html {
    let overlay_ref = use_node_ref();

    // Focus the overlay on open so Escape reaches its keydown handler.
    {
        let overlay_ref = overlay_ref.clone();
        use_effect_with((), move |_| {
            if let Some(overlay) = overlay_ref.cast::<HtmlElement>() {
                let _ = overlay.focus();
            }
        });
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_key_down = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_dismiss_key(&e.key()) {
                e.prevent_default();
                on_close.emit(());
            }
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class="modal-overlay"
            ref={overlay_ref}
            tabindex="-1"
            onclick={on_overlay_click}
            onkeydown={on_key_down}
        >
            <div class="modal-dialog player-dialog" onclick={keep_open}>
                <button class="modal-close" onclick={on_close_click}>{ "\u{2715}" }</button>
                <div class="player-box">
                    <PlayerSurface surface={props.surface.clone()} />
                </div>
                <div class="player-caption">
                    <h2>{ props.title.clone() }</h2>
                    if let Some(description) = &props.description {
                        <p class="description">{ description.clone() }</p>
                    }
                </div>
            </div>
        </div>
    }
}
