use dioxus::prelude::*;

use crate::components::icons::{CheckIcon, CopyIcon};
use crate::core::clipboard::copy_to_clipboard;
use crate::core::{platform, timing};
use crate::t;

const SOURCE_TEXTAREA_ID: &str = "signature-html-source";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied {
        generation: u64,
    },
}

/// Copy indicator state. Each copy attempt gets a generation; completions and
/// expiries for an older generation are ignored, so a newer copy always wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CopyTracker {
    status: CopyStatus,
    generation: u64,
}

impl CopyTracker {
    pub fn status(&self) -> CopyStatus {
        self.status
    }

    pub fn is_copied(&self) -> bool {
        matches!(self.status, CopyStatus::Copied { .. })
    }

    /// Start a new copy attempt and return its generation.
    pub fn begin(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn succeeded(&mut self, generation: u64) {
        if generation == self.generation {
            self.status = CopyStatus::Copied { generation };
        }
    }

    pub fn failed(&mut self, generation: u64) {
        if generation == self.generation {
            self.status = CopyStatus::Idle;
        }
    }

    /// Revert the indicator once its display window is over.
    pub fn expire(&mut self, generation: u64) {
        if self.status == (CopyStatus::Copied { generation }) {
            self.status = CopyStatus::Idle;
        }
    }
}

/// Keys that dismiss the dialog.
fn is_dismiss_key(key: &Key) -> bool {
    *key == Key::Escape
}

/// Modal with the generated source. Closes on Escape, a backdrop click or the
/// close button. The backdrop takes focus when it mounts so Escape works right
/// after the dialog opens.
#[component]
pub fn ExportDialog(open: Signal<bool>, html: String) -> Element {
    let tracker = use_signal(CopyTracker::default);

    if !open() {
        return rsx! {};
    }

    let copy_handler = {
        let html = html.clone();
        let mut tracker_signal = tracker;
        move |_| {
            let payload = html.clone();
            let generation = tracker_signal.with_mut(|t| t.begin());
            platform::spawn_future(async move {
                match copy_to_clipboard(payload).await {
                    Ok(()) => {
                        tracing::debug!("Signature HTML copied (generation {generation})");
                        tracker_signal.with_mut(|t| t.succeeded(generation));
                        timing::sleep_ms(timing::COPY_FEEDBACK_MS).await;
                        tracker_signal.with_mut(|t| t.expire(generation));
                    }
                    Err(err) => {
                        tracing::warn!("Failed to copy signature HTML: {err}");
                        tracker_signal.with_mut(|t| t.failed(generation));
                    }
                }
            });
        }
    };

    let mut open_signal = open;
    let mut close = move || open_signal.set(false);

    let select_source = move |_| {
        let script = format!("document.getElementById('{SOURCE_TEXTAREA_ID}')?.select();");
        let _ = document::eval(&script);
    };

    let copied = tracker().is_copied();

    rsx! {
        div {
            class: "dialog__backdrop",
            tabindex: 0,
            onmounted: move |evt: MountedEvent| async move {
                if let Err(err) = evt.set_focus(true).await {
                    tracing::debug!("Could not focus export dialog: {err:?}");
                }
            },
            onclick: move |_| close(),
            onkeydown: move |evt| {
                if is_dismiss_key(&evt.key()) {
                    evt.prevent_default();
                    close();
                }
            },
            div {
                class: "dialog",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "export-dialog-title",
                onclick: move |evt| evt.stop_propagation(),

                header { class: "dialog__header",
                    h2 { id: "export-dialog-title", class: "dialog__title", {t!("export-title")} }
                    div { class: "dialog__actions",
                        button {
                            r#type: "button",
                            class: "button button--outline",
                            onclick: copy_handler,
                            if copied {
                                CheckIcon {}
                                span { {t!("export-copied")} }
                            } else {
                                CopyIcon {}
                                span { {t!("export-copy")} }
                            }
                        }
                        button {
                            r#type: "button",
                            class: "button button--ghost dialog__close",
                            aria_label: t!("export-close"),
                            onclick: move |_| close(),
                            "×"
                        }
                    }
                }

                p { class: "dialog__hint", {t!("export-instructions")} }

                div { class: "dialog__code",
                    pre { class: "dialog__code-block", "{html}" }
                }

                textarea {
                    id: SOURCE_TEXTAREA_ID,
                    class: "visually-hidden",
                    readonly: true,
                    placeholder: t!("export-textarea-placeholder"),
                    value: "{html}",
                    onclick: select_source,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_escape_dismisses() {
        assert!(is_dismiss_key(&Key::Escape));
        assert!(!is_dismiss_key(&Key::Enter));
        assert!(!is_dismiss_key(&Key::Tab));
        assert!(!is_dismiss_key(&Key::Character("q".into())));
    }

    #[test]
    fn success_shows_then_expires() {
        let mut tracker = CopyTracker::default();
        let generation = tracker.begin();
        tracker.succeeded(generation);
        assert!(tracker.is_copied());
        tracker.expire(generation);
        assert_eq!(tracker.status(), CopyStatus::Idle);
    }

    #[test]
    fn failure_leaves_indicator_off() {
        let mut tracker = CopyTracker::default();
        let generation = tracker.begin();
        tracker.failed(generation);
        assert!(!tracker.is_copied());
    }

    #[test]
    fn newer_copy_supersedes_pending_revert() {
        let mut tracker = CopyTracker::default();
        let first = tracker.begin();
        tracker.succeeded(first);

        let second = tracker.begin();
        tracker.succeeded(second);

        // The first copy's timer fires while the second is still showing.
        tracker.expire(first);
        assert_eq!(tracker.status(), CopyStatus::Copied { generation: second });

        tracker.expire(second);
        assert_eq!(tracker.status(), CopyStatus::Idle);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut tracker = CopyTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();
        tracker.succeeded(first);
        assert!(!tracker.is_copied());
        tracker.succeeded(second);
        assert!(tracker.is_copied());
    }
}
