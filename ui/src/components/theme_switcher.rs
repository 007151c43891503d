use dioxus::prelude::*;

use crate::components::icons::{MonitorIcon, MoonIcon, SunIcon};
use crate::t;
use crate::theme::ThemePreference;

fn theme_title(theme: ThemePreference) -> String {
    match theme {
        ThemePreference::Light => t!("theme-light"),
        ThemePreference::Dark => t!("theme-dark"),
        ThemePreference::System => t!("theme-system"),
    }
}

/// Three-way light / dark / system toggle. Selecting an option persists it.
#[component]
pub fn ThemeSwitcher(theme: Signal<ThemePreference>) -> Element {
    let current = theme();

    rsx! {
        div {
            class: "theme-switcher",
            role: "radiogroup",
            aria_label: t!("theme-switcher-label"),
            for option in ThemePreference::ALL {
                button {
                    key: "{option}",
                    r#type: "button",
                    role: "radio",
                    aria_checked: if option == current { "true" } else { "false" },
                    class: if option == current {
                        "theme-switcher__option theme-switcher__option--active"
                    } else {
                        "theme-switcher__option"
                    },
                    title: theme_title(option),
                    onclick: move |_| {
                        let mut theme = theme;
                        theme.set(option);
                        option.save();
                    },
                    match option {
                        ThemePreference::Light => rsx! { SunIcon {} },
                        ThemePreference::Dark => rsx! { MoonIcon {} },
                        ThemePreference::System => rsx! { MonitorIcon {} },
                    }
                }
            }
        }
    }
}
