use dioxus::prelude::*;

use crate::components::{
    AppHeader, EmailMockup, ExportDialog, SignatureForm, ThemeSwitcher,
};
use crate::signature::{render, SignatureFields};
use crate::theme::ThemePreference;

/// The whole app: form panel on the left, mock email with live preview on the
/// right, export dialog on top.
///
/// This view owns the field record. Children get the signal and mutate it only
/// through `SignatureFields::set` / `clear`.
#[component]
pub fn SignatureGenerator() -> Element {
    // Subscribe to the global language code (if provided) so copy refreshes.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let fields = use_signal(SignatureFields::default);
    let theme = use_signal(ThemePreference::load);
    let mut export_open = use_signal(|| false);
    let signature_html = use_memo(move || render(&fields.read()));

    let snapshot = fields();
    let theme_class = theme().css_class();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        div { class: "generator {theme_class}",
            aside { class: "generator__panel",
                AppHeader {}
                SignatureForm {
                    fields,
                    on_export: move |_| export_open.set(true),
                }
            }

            main { class: "generator__stage",
                EmailMockup { fields: snapshot }
                div { class: "generator__theme",
                    ThemeSwitcher { theme }
                }
            }

            ExportDialog { open: export_open, html: signature_html() }
        }
    }
}
