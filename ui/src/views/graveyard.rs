use dioxus::prelude::*;

use crate::wall::Wall;

#[component]
pub fn Graveyard() -> Element {
    // Subscribe to the global language code (if provided) so this page
    // re-renders when the locale changes in the header.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-graveyard",
            h1 { {crate::t!("page-title")} }
            p { class: "page-graveyard__intro", {crate::t!("page-intro")} }
            Wall {}
        }
    }
}
