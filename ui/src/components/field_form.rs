use dioxus::prelude::*;

use crate::signature::{Field, SignatureFields};
use crate::t;

fn label(field: Field) -> String {
    match field {
        Field::FullName => t!("field-full-name-label"),
        Field::Title => t!("field-title-label"),
        Field::Phone => t!("field-phone-label"),
        Field::Email => t!("field-email-label"),
        Field::Website => t!("field-website-label"),
        Field::Instagram => t!("field-instagram-label"),
        Field::Tagline => t!("field-tagline-label"),
    }
}

fn placeholder(field: Field) -> String {
    match field {
        Field::FullName => t!("field-full-name-placeholder"),
        Field::Title => t!("field-title-placeholder"),
        Field::Phone => t!("field-phone-placeholder"),
        Field::Email => t!("field-email-placeholder"),
        Field::Website => t!("field-website-placeholder"),
        Field::Instagram => t!("field-instagram-placeholder"),
        Field::Tagline => t!("field-tagline-placeholder"),
    }
}

/// Seven free-text inputs. No format validation on purpose: whatever is typed
/// goes straight into the record.
#[component]
pub fn SignatureForm(fields: Signal<SignatureFields>, on_export: EventHandler<()>) -> Element {
    let snapshot = fields();
    let has_content = !snapshot.is_empty();
    let rows: Vec<(Field, &'static str, String)> = Field::ALL
        .iter()
        .map(|field| (*field, field.id(), snapshot.get(*field).to_string()))
        .collect();

    rsx! {
        form {
            class: "signature-form",
            onsubmit: move |evt| evt.prevent_default(),
            div { class: "signature-form__fields",
                for (field, id, value) in rows {
                    div { key: "{id}", class: "signature-form__field",
                        label {
                            class: "signature-form__label",
                            r#for: "field-{id}",
                            {label(field)}
                        }
                        input {
                            id: "field-{id}",
                            class: "signature-form__input",
                            r#type: "text",
                            autocomplete: "off",
                            value: "{value}",
                            placeholder: placeholder(field),
                            oninput: move |evt: FormEvent| {
                                let mut fields = fields;
                                fields.with_mut(|record| record.set(field, evt.value()));
                            },
                        }
                    }
                }
            }

            div { class: "signature-form__actions",
                button {
                    r#type: "button",
                    class: "button button--primary signature-form__export",
                    onclick: move |_| on_export.call(()),
                    {t!("form-export")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: !has_content,
                    onclick: move |_| {
                        let mut fields = fields;
                        fields.with_mut(SignatureFields::clear);
                    },
                    {t!("form-clear")}
                }
            }
        }
    }
}
