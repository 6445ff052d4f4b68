use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::core::{source::RecordSource, WallConfig};
use ui::views::Graveyard;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppHeader updates it on selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Fetch the collection once from the served asset rather than the copy
    // compiled into the wasm bundle.
    use_context_provider(|| {
        WallConfig::default().with_source(RecordSource::Remote(ui::RECORDS_ASSET.to_string()))
    });

    rsx! {
        // Keyed wrapper forces a full remount (fresh strings) on language change.
        div {
            key: "{lang_code()}",
            AppHeader {}
            Graveyard {}
        }
    }
}
