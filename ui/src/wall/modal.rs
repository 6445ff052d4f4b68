use dioxus::prelude::*;

use crate::core::{
    format::{accent_class, format_long_date, format_month_year, format_percent},
    ModalState, WallEvent,
};
use crate::t;

/// Detail overlay for the selected record. Close button, backdrop click and
/// Escape (handled by the wall) all dismiss it the same way.
#[component]
pub fn DetailModal(modal: ModalState, on_event: EventHandler<WallEvent>) -> Element {
    let Some(record) = modal.record().cloned() else {
        return rsx! {
            div { id: "modal", class: "modal hidden", aria_hidden: "true" }
        };
    };

    let accent = accent_class(&record.category);
    let fill = format_percent(modal.fill_pct());
    let short_born = format_month_year(record.born_date);
    let short_died = format_month_year(record.died_date);
    let lived = t!(
        "modal-lived",
        lifespan = record.lifespan_text.clone(),
        days = record.lifespan_days
    );
    let born_died = t!(
        "modal-born-died",
        born = format_long_date(record.born_date),
        died = format_long_date(record.died_date)
    );

    rsx! {
        div { id: "modal", class: "modal", role: "dialog", aria_modal: "true",
            div {
                class: "modal-backdrop",
                onclick: move |_| on_event.call(WallEvent::ModalDismissed),
            }
            div {
                class: "modal-content {accent}",
                tabindex: "-1",
                onmounted: move |evt: MountedEvent| async move {
                    let _ = evt.set_focus(true).await;
                },

                button {
                    r#type: "button",
                    class: "modal-close",
                    aria_label: t!("modal-close"),
                    onclick: move |_| on_event.call(WallEvent::ModalDismissed),
                    "×"
                }

                div { class: "modal-body",
                    span { class: "tombstone-type {accent}", "{record.category}" }
                    h2 { class: "tombstone-name modal-title", "{record.name}" }
                    div { class: "tombstone-company", "{record.company}" }
                    div { class: "tombstone-dates",
                        "{short_born} "
                        span { class: "cross", "✝" }
                        " {short_died}"
                    }
                    div { class: "tombstone-lifespan", "{lived}" }
                    div { class: "modal-lifespan-bar",
                        div { class: "modal-lifespan-fill", style: "width: {fill}" }
                    }
                    p { class: "modal-dates", "{born_died}" }
                    p { class: "tombstone-description", "{record.description}" }
                    div { class: "tombstone-cause", "💀 {record.cause}" }
                    if let Some(link) = record.link.as_ref() {
                        a {
                            class: "modal-link",
                            href: "{link}",
                            target: "_blank",
                            rel: "noopener",
                            {t!("modal-learn-more")}
                        }
                    }
                }
            }
        }
    }
}
