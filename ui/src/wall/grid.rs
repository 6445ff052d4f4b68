use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::{
    format::{accent_class, format_month_year},
    EnrichedRecord, WallConfig, WallEvent,
};
use crate::t;

/// Tombstone cards, one per record, in the order given.
#[component]
pub fn GridView(
    records: Vec<Rc<EnrichedRecord>>,
    config: WallConfig,
    on_event: EventHandler<WallEvent>,
) -> Element {
    if records.is_empty() {
        return rsx! {
            p { class: "wall__placeholder", {t!("wall-empty")} }
        };
    }

    rsx! {
        for (index, record) in records.into_iter().enumerate() {
            {render_card(record, config.card_delay(index), on_event)}
        }
    }
}

fn render_card(
    record: Rc<EnrichedRecord>,
    delay: String,
    on_event: EventHandler<WallEvent>,
) -> Element {
    let born = format_month_year(record.born_date);
    let died = format_month_year(record.died_date);
    let accent = accent_class(&record.category);
    let selected = Rc::clone(&record);

    rsx! {
        article {
            key: "{record.name}",
            class: "tombstone {accent}",
            "data-type": "{record.category}",
            style: "animation-delay: {delay}",
            onclick: move |_| on_event.call(WallEvent::RecordSelected(Rc::clone(&selected))),

            div { class: "tombstone-rip", aria_hidden: "true", "✝" }
            div { class: "tombstone-header",
                span { class: "tombstone-name", "{record.name}" }
                span { class: "tombstone-type {accent}", "{record.category}" }
            }
            div { class: "tombstone-company", "{record.company}" }
            div { class: "tombstone-dates",
                "{born} "
                span { class: "cross", "✝" }
                " {died}"
            }
            div { class: "tombstone-lifespan", "{record.lifespan_text}" }
            p { class: "tombstone-description", "{record.description}" }
            div { class: "tombstone-cause", "💀 {record.cause}" }
        }
    }
}
