use dioxus::prelude::*;

use crate::core::{AggregateStats, EmptyInputError};
use crate::t;

#[component]
pub fn StatsBar(stats: Result<AggregateStats, EmptyInputError>) -> Element {
    let stats = match stats {
        Ok(stats) => stats,
        Err(_) => {
            return rsx! {
                div { id: "stats", class: "stats stats--unavailable",
                    p { class: "stats__placeholder", {t!("stats-unavailable")} }
                }
            }
        }
    };

    let models = stats.count_of("model");
    let products = stats.count_of("product");
    let shortest = stats.shortest_lived.lifespan_days;
    let shortest_name = stats.shortest_lived.name.clone();

    rsx! {
        div { id: "stats", class: "stats",
            div { class: "stat",
                span { class: "stat-number", "{stats.total}" }
                span { class: "stat-label", {t!("stat-total")} }
            }
            div { class: "stat",
                span { class: "stat-number", "{models}" }
                span { class: "stat-label", {t!("stat-models")} }
            }
            div { class: "stat",
                span { class: "stat-number", "{products}" }
                span { class: "stat-label", {t!("stat-products")} }
            }
            div { class: "stat", title: "{shortest_name}",
                span { class: "stat-number", "{shortest}d" }
                span { class: "stat-label", {t!("stat-shortest")} }
            }
        }
    }
}
