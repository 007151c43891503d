use dioxus::prelude::*;

use ui::views::SignatureGenerator;

const MAIN_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Starts at whatever locale `init` negotiated; AppHeader updates it.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { "Signet" }
        document::Style { "{MAIN_CSS}" }

        div {
            key: "{lang_code()}",
            SignatureGenerator {}
        }
    }
}
