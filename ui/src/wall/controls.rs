use dioxus::prelude::*;

use crate::core::{Filter, SortKey, ViewMode, ViewState, WallEvent};
use crate::t;

/// Category filter buttons, sort selector and grid/timeline toggle.
#[component]
pub fn WallControls(
    view: ViewState,
    categories: Vec<String>,
    on_event: EventHandler<WallEvent>,
) -> Element {
    let filters: Vec<Filter> = std::iter::once(Filter::All)
        .chain(categories.into_iter().map(Filter::Category))
        .collect();

    rsx! {
        div { class: "controls",
            div { class: "controls__group controls__filters", role: "group",
                span { class: "controls__label", {t!("filter-label")} }
                for filter in filters.into_iter() {
                    {render_filter_button(filter.clone(), filter == view.filter, on_event)}
                }
            }

            div { class: "controls__group controls__sort",
                label { class: "controls__label", r#for: "sort-select", {t!("sort-label")} }
                select {
                    id: "sort-select",
                    value: view.sort.as_value(),
                    onchange: move |evt: FormEvent| {
                        on_event.call(WallEvent::SortChanged(SortKey::from_value(&evt.value())));
                    },
                    for sort in SortKey::SELECTABLE {
                        option { key: "{sort.as_value()}", value: sort.as_value(), {sort_label(sort)} }
                    }
                }
            }

            div { class: "controls__group controls__views", role: "group",
                span { class: "controls__label", {t!("view-label")} }
                for mode in [ViewMode::Grid, ViewMode::Timeline] {
                    button {
                        key: "{mode.as_value()}",
                        r#type: "button",
                        class: if mode == view.view { "view-btn view-btn--active" } else { "view-btn" },
                        "data-view": mode.as_value(),
                        onclick: move |_| on_event.call(WallEvent::ViewChanged(mode)),
                        {view_label(mode)}
                    }
                }
            }
        }
    }
}

fn render_filter_button(filter: Filter, active: bool, on_event: EventHandler<WallEvent>) -> Element {
    let value = filter.as_value().to_string();
    let label = filter_label(&filter);

    rsx! {
        button {
            key: "{value}",
            r#type: "button",
            class: if active { "filter-btn filter-btn--active" } else { "filter-btn" },
            "data-filter": "{value}",
            onclick: move |_| on_event.call(WallEvent::FilterChanged(filter.clone())),
            "{label}"
        }
    }
}

fn filter_label(filter: &Filter) -> String {
    match filter {
        Filter::All => t!("filter-all"),
        Filter::Category(category) => match category.as_str() {
            "model" => t!("filter-model"),
            "product" => t!("filter-product"),
            other => other.to_string(),
        },
    }
}

fn sort_label(key: SortKey) -> String {
    match key {
        SortKey::DiedDesc => t!("sort-died-desc"),
        SortKey::DiedAsc => t!("sort-died-asc"),
        SortKey::LifespanAsc => t!("sort-lifespan-asc"),
        SortKey::LifespanDesc => t!("sort-lifespan-desc"),
        SortKey::Name => t!("sort-name"),
        SortKey::AsLoaded => key.as_value().to_string(),
    }
}

fn view_label(mode: ViewMode) -> String {
    match mode {
        ViewMode::Grid => t!("view-grid"),
        ViewMode::Timeline => t!("view-timeline"),
    }
}
