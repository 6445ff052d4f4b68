//! Dioxus renderers for the memorial wall.
//!
//! [`Wall`] loads the collection once, then owns the single `Session` signal.
//! Every child reports interactions as [`WallEvent`]s through one callback,
//! which folds them into the next session with `Session::apply`.

mod controls;
pub use controls::WallControls;

mod grid;
pub use grid::GridView;

mod keys;

mod modal;
pub use modal::DetailModal;

mod particles;
pub use particles::Particles;

mod stats;
pub use stats::StatsBar;

mod timeline;
pub use timeline::TimelineView;

use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::{
    dispatch, source::load_memorial, timing, Memorial, Session, Surface, WallConfig, WallEvent,
};
use crate::t;

/// The bundled record collection as a served asset (used by the web shell).
pub const RECORDS_ASSET: Asset = asset!("/assets/data/records.json");

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[component]
pub fn Wall() -> Element {
    let config = try_use_context::<WallConfig>().unwrap_or_default();
    let source = config.source.clone();

    let memorial = use_resource(move || {
        let source = source.clone();
        async move {
            let loaded = load_memorial(&source).await;
            if let Err(err) = &loaded {
                tracing::error!("failed to load the memorial: {err}");
            }
            loaded
        }
    });

    let snapshot = match &*memorial.read() {
        None => None,
        Some(Ok(memorial)) => Some(Ok(memorial.clone())),
        Some(Err(err)) => Some(Err(err.to_string())),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        match snapshot {
            None => rsx! {
                p { class: "wall__notice", {t!("wall-loading")} }
            },
            Some(Err(error)) => rsx! {
                div { class: "wall__notice wall__notice--error", role: "alert",
                    {t!("wall-load-failed", error = error)}
                }
            },
            Some(Ok(memorial)) => rsx! {
                WallBody { memorial, config }
            },
        }
    }
}

#[component]
fn WallBody(memorial: Memorial, config: WallConfig) -> Element {
    let session = use_signal(Session::default);
    keys::use_window_cancel(session, memorial.clone());

    let events_memorial = memorial.clone();
    let reveal_delay_ms = config.reveal_delay_ms;
    let on_event = use_callback(move |event: WallEvent| {
        let reveal = match &event {
            WallEvent::RecordSelected(record) => Some(Rc::clone(record)),
            _ => None,
        };
        fold(session, event, &events_memorial);

        // Mount the modal at 0%, then reveal the bar on the next frame.
        if let Some(record) = reveal {
            let memorial = events_memorial.clone();
            spawn(async move {
                timing::sleep_ms(reveal_delay_ms).await;
                fold(session, WallEvent::RevealFrame(record), &memorial);
            });
        }
    });

    let current = session();
    let (grid, timeline) = match dispatch(&current.view, &memorial) {
        Surface::Grid(records) => (Some(records), None),
        Surface::Timeline(groups) => (None, Some(groups)),
    };
    let grid_class = if grid.is_some() { "wall__grid" } else { "wall__grid hidden" };
    let timeline_class = if timeline.is_some() {
        "wall__timeline"
    } else {
        "wall__timeline hidden"
    };

    rsx! {
        div {
            class: "wall",
            onkeydown: move |evt| {
                if keys::is_cancel_key(&evt.key().to_string()) {
                    on_event.call(WallEvent::ModalDismissed);
                }
            },

            Particles { count: config.particle_count }
            StatsBar { stats: memorial.stats.clone() }
            WallControls {
                view: current.view.clone(),
                categories: memorial.categories(),
                on_event,
            }

            section { id: "graveyard", class: grid_class,
                if let Some(records) = grid {
                    GridView { records, config: config.clone(), on_event }
                }
            }
            section { id: "timeline-view", class: timeline_class,
                if let Some(groups) = timeline {
                    TimelineView { groups, on_event }
                }
            }

            DetailModal { modal: current.modal.clone(), on_event }
        }
    }
}

fn fold(mut session: Signal<Session>, event: WallEvent, memorial: &Memorial) {
    let next = session.peek().clone().apply(event, memorial);
    session.set(next);
}
