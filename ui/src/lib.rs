//! Shared UI crate for Signet: the signature renderer, its field record and
//! every component of the generator page. Platform crates only launch it.

pub mod core;
pub mod i18n;
pub mod signature;
pub mod theme;
pub mod views;

pub mod components {
    pub mod app_header;
    pub mod export_dialog;
    pub mod field_form;
    pub mod icons;
    pub mod preview;
    pub mod theme_switcher;

    pub use app_header::AppHeader;
    pub use export_dialog::{CopyStatus, CopyTracker, ExportDialog};
    pub use field_form::SignatureForm;
    pub use preview::{EmailMockup, SignaturePreview};
    pub use theme_switcher::ThemeSwitcher;
}
