use crate::components::icons::BrandMark;
use crate::i18n;
use crate::t;
use dioxus::prelude::*;

/// Brand block at the top of the form panel, with the locale picker.
///
/// The language picker only shows when more than one locale is embedded. Its
/// value comes from the global language-code signal (if the platform crate
/// provided one) or the loader, so it always names the language on screen.
/// Selecting a language updates that signal and keyed subtrees remount with
/// fresh strings.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let selected = lang_code_ctx
        .as_ref()
        .map(|c| c())
        .unwrap_or_else(i18n::current_language);

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!("Could not switch language to {val}: {err}"),
        }
    };

    rsx! {
        header { class: "app-header",
            div { class: "app-header__brand",
                span { class: "app-header__mark", BrandMark { size: 32 } }
                span { class: "app-header__name", {t!("app-title")} }
            }
            p { class: "app-header__subtitle", {t!("app-subtitle")} }

            if show_switcher {
                div { class: "app-header__locale",
                    label {
                        class: "visually-hidden",
                        r#for: "locale-select",
                        {t!("nav-language-label")}
                    }
                    select {
                        id: "locale-select",
                        value: "{selected}",
                        oninput: on_change,
                        for code in langs() {
                            option {
                                key: "{code}",
                                value: "{code}",
                                selected: code == selected,
                                "{code}"
                            }
                        }
                    }
                }
            }
        }
    }
}
