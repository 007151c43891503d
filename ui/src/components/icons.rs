//! Inline SVG icons used by the chrome and the preview.

use dioxus::prelude::*;

use crate::signature::LOGO_MARK_PATH;

/// Brand mark shown in the form header and in the signature's icon cell.
#[component]
pub fn BrandMark(#[props(default = 48)] size: u32) -> Element {
    rsx! {
        svg {
            width: "27",
            height: "41",
            view_box: "0 0 27 41",
            fill: "none",
            xmlns: "http://www.w3.org/2000/svg",
            style: "width: {size}px; height: {size}px; display: block;",
            path { d: LOGO_MARK_PATH, fill: "currentColor" }
        }
    }
}

// Stroke icons share the same 24×24 frame.
#[component]
fn StrokeIcon(
    #[props(default = 16)] size: u32,
    #[props(default = "icon")] class: &'static str,
    children: Element,
) -> Element {
    rsx! {
        svg {
            class: class,
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

#[component]
pub fn InstagramIcon() -> Element {
    rsx! {
        StrokeIcon { class: "icon icon--inline",
            rect { width: "20", height: "20", x: "2", y: "2", rx: "5", ry: "5" }
            path { d: "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" }
            line { x1: "17.5", x2: "17.51", y1: "6.5", y2: "6.5" }
        }
    }
}

#[component]
pub fn SunIcon() -> Element {
    rsx! {
        StrokeIcon { size: 20,
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2" }
            path { d: "M12 20v2" }
            path { d: "m4.93 4.93 1.41 1.41" }
            path { d: "m17.66 17.66 1.41 1.41" }
            path { d: "M2 12h2" }
            path { d: "M20 12h2" }
            path { d: "m6.34 17.66-1.41 1.41" }
            path { d: "m19.07 4.93-1.41 1.41" }
        }
    }
}

#[component]
pub fn MoonIcon() -> Element {
    rsx! {
        StrokeIcon { size: 20,
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        }
    }
}

#[component]
pub fn MonitorIcon() -> Element {
    rsx! {
        StrokeIcon { size: 20,
            rect { width: "20", height: "14", x: "2", y: "3", rx: "2" }
            line { x1: "8", x2: "16", y1: "21", y2: "21" }
            line { x1: "12", x2: "12", y1: "17", y2: "21" }
        }
    }
}

#[component]
pub fn CopyIcon() -> Element {
    rsx! {
        StrokeIcon {
            rect { width: "14", height: "14", x: "8", y: "8", rx: "2", ry: "2" }
            path { d: "M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2" }
        }
    }
}

#[component]
pub fn CheckIcon() -> Element {
    rsx! {
        StrokeIcon {
            path { d: "M20 6 9 17l-5-5" }
        }
    }
}
