use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::{
    format::{accent_class, format_month_day},
    EnrichedRecord, WallEvent, YearGroup,
};
use crate::t;

/// Year-grouped list, newest deaths first.
#[component]
pub fn TimelineView(groups: Vec<YearGroup>, on_event: EventHandler<WallEvent>) -> Element {
    if groups.is_empty() {
        return rsx! {
            p { class: "wall__placeholder", {t!("wall-empty")} }
        };
    }

    rsx! {
        for group in groups.into_iter() {
            div { key: "{group.year}", class: "timeline-year",
                div { class: "timeline-year-label", "{group.year}" }
                for record in group.records.into_iter() {
                    {render_item(record, on_event)}
                }
            }
        }
    }
}

fn render_item(record: Rc<EnrichedRecord>, on_event: EventHandler<WallEvent>) -> Element {
    let date = format_month_day(record.died_date);
    let accent = accent_class(&record.category);
    let selected = Rc::clone(&record);

    rsx! {
        div {
            key: "{record.name}",
            class: "timeline-item",
            onclick: move |_| on_event.call(WallEvent::RecordSelected(Rc::clone(&selected))),

            div { class: "timeline-date", "{date}" }
            div { class: "timeline-content",
                h3 {
                    "{record.name} "
                    span { class: "tombstone-type tombstone-type--small {accent}", "{record.category}" }
                }
                p { "{record.company} · {record.lifespan_text}" }
            }
        }
    }
}
