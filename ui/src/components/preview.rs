//! Live signature preview inside a mock email.
//!
//! The preview mirrors the exported fragment slot for slot. Presence is
//! decided by [`SignatureFields::filled`], the same predicate the renderer
//! uses; an unfilled slot shows a dimmed placeholder that never reaches the
//! exported HTML.

use dioxus::prelude::*;

use crate::components::icons::{BrandMark, InstagramIcon};
use crate::signature::{Field, SignatureFields};
use crate::t;

const PLACEHOLDER_OPACITY: &str = "0.4";
const MUTED_OPACITY: &str = "0.6";

/// Filled value per slot, in row order.
pub(crate) fn preview_slots(fields: &SignatureFields) -> [(Field, Option<String>); 7] {
    Field::ALL.map(|field| (field, fields.filled(field).map(str::to_string)))
}

fn placeholder(field: Field) -> String {
    match field {
        Field::FullName => t!("preview-full-name"),
        Field::Title => t!("preview-title"),
        Field::Phone => t!("preview-phone"),
        Field::Email => t!("preview-email"),
        Field::Website => t!("preview-website"),
        Field::Instagram => t!("preview-instagram"),
        Field::Tagline => t!("preview-tagline"),
    }
}

/// Dimmed text rows keep their prefix and fade the whole line when empty.
fn muted_opacity(filled: bool) -> &'static str {
    if filled {
        MUTED_OPACITY
    } else {
        PLACEHOLDER_OPACITY
    }
}

fn render_slot(field: Field, value: Option<String>) -> Element {
    let filled = value.is_some();
    let opacity = muted_opacity(filled);
    let slot_class = if filled {
        "signature-preview__slot"
    } else {
        "signature-preview__slot signature-preview__slot--empty"
    };

    match field {
        Field::FullName => rsx! {
            div {
                class: slot_class,
                style: "font-weight: bold; margin: 0; padding: 0 0 1px 0; font-size: 16px;",
                if let Some(name) = value {
                    "{name}"
                } else {
                    span { style: "color: currentColor; opacity: {PLACEHOLDER_OPACITY};", {placeholder(field)} }
                }
            }
        },
        Field::Title => rsx! {
            div {
                class: slot_class,
                style: "margin: 0; padding: 0 0 1px 0; font-size: 14px; font-weight: bold; color: currentColor; opacity: {opacity};",
                {value.unwrap_or_else(|| placeholder(field))}
            }
        },
        Field::Phone => rsx! {
            div {
                class: slot_class,
                style: "margin: 0; padding: 0 0 1px 0; font-size: 14px; font-weight: bold; color: currentColor; opacity: {opacity};",
                "tel.: "
                {value.unwrap_or_else(|| placeholder(field))}
            }
        },
        Field::Email => rsx! {
            div {
                class: slot_class,
                style: "margin: 0; padding: 0 0 18px 0; font-size: 14px; font-weight: bold; color: currentColor; opacity: {opacity};",
                "mail: "
                if let Some(email) = value {
                    a {
                        href: "mailto:{email}",
                        style: "color: currentColor; text-decoration: none; font-weight: bold;",
                        "{email}"
                    }
                } else {
                    {placeholder(field)}
                }
            }
        },
        Field::Website => rsx! {
            div {
                class: slot_class,
                style: "margin: 0; padding: 0 0 6px 0; font-size: 15px; font-weight: bold;",
                if let Some(site) = value {
                    a {
                        href: "https://{site}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        style: "color: currentColor; text-decoration: none; font-weight: bold;",
                        "{site}"
                    }
                } else {
                    span { style: "color: currentColor; opacity: {PLACEHOLDER_OPACITY};", {placeholder(field)} }
                }
            }
        },
        Field::Instagram => rsx! {
            div {
                class: slot_class,
                style: "margin: 0; padding: 0 0 40px 0; font-size: 15px; font-weight: bold;",
                if let Some(handle) = value {
                    a {
                        href: "https://instagram.com/{handle}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        style: "color: currentColor; text-decoration: none; font-weight: bold;",
                        InstagramIcon {}
                    }
                } else {
                    span {
                        style: "color: currentColor; opacity: {PLACEHOLDER_OPACITY};",
                        title: placeholder(field),
                        InstagramIcon {}
                    }
                }
            }
        },
        Field::Tagline => rsx! {
            div {
                class: slot_class,
                style: "margin: 0; padding: 16px 0 0 0; font-size: 14px; font-weight: bold; color: currentColor; opacity: {opacity};",
                "// "
                {value.unwrap_or_else(|| placeholder(field))}
            }
        },
    }
}

#[component]
pub fn SignaturePreview(fields: SignatureFields) -> Element {
    let slots = preview_slots(&fields);

    rsx! {
        div {
            class: "signature-preview",
            style: "font-family: 'Courier New', monospace; font-size: 14px; line-height: 1.4; color: currentColor;",
            table {
                "cellpadding": "0",
                "cellspacing": "0",
                style: "border-collapse: collapse;",
                tbody {
                    tr {
                        td { style: "vertical-align: top; padding-right: 0px;",
                            BrandMark { size: 48 }
                        }
                        td { style: "vertical-align: top; padding-top: 20px; padding-left: 20px;",
                            for (field, value) in slots {
                                {render_slot(field, value)}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Sample email wrapped around the live preview.
#[component]
pub fn EmailMockup(fields: SignatureFields) -> Element {
    let from = fields
        .filled(Field::Email)
        .map(str::to_string)
        .unwrap_or_else(|| t!("mock-from-default"));

    rsx! {
        article { class: "mockup",
            header { class: "mockup__header",
                div { class: "mockup__meta",
                    span { class: "mockup__meta-label", {t!("mock-from-label")} }
                    " {from}"
                }
                div { class: "mockup__meta",
                    span { class: "mockup__meta-label", {t!("mock-to-label")} }
                    " "
                    {t!("mock-to")}
                }
                div { class: "mockup__meta",
                    span { class: "mockup__meta-label", {t!("mock-subject-label")} }
                    " "
                    {t!("mock-subject")}
                }
            }

            div { class: "mockup__body",
                p { {t!("mock-greeting")} }
                p { {t!("mock-body")} }
                p { {t!("mock-list-intro")} }
                ul { class: "mockup__list",
                    li { {t!("mock-list-analysis")} }
                    li { {t!("mock-list-design")} }
                    li { {t!("mock-list-permits")} }
                    li { {t!("mock-list-supervision")} }
                }
                p { {t!("mock-closing")} }
                p { {t!("mock-thanks")} }

                div { class: "mockup__signature",
                    SignaturePreview { fields }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::render;

    #[test]
    fn slots_follow_row_order() {
        let slots = preview_slots(&SignatureFields::default());
        let order: Vec<Field> = slots.iter().map(|(field, _)| *field).collect();
        assert_eq!(order, Field::ALL.to_vec());
    }

    #[test]
    fn filled_slots_match_exported_rows() {
        let fields = SignatureFields::new()
            .with(Field::FullName, "Ana Ruiz")
            .with(Field::Phone, "   ")
            .with(Field::Website, "example.com");
        let html = render(&fields);

        for (field, value) in preview_slots(&fields) {
            let raw = fields.get(field);
            let exported = !raw.trim().is_empty() && html.contains(raw);
            assert_eq!(value.is_some(), exported, "slot {field:?}");
        }
    }

    #[test]
    fn muted_rows_dim_further_when_empty() {
        assert_eq!(muted_opacity(true), "0.6");
        assert_eq!(muted_opacity(false), "0.4");
    }
}
