//! Light / dark / system appearance preference.
//!
//! The preference only drives the app chrome. The exported signature always
//! uses `currentColor` and looks the same whichever theme is picked.

use std::fmt;
use std::str::FromStr;

use crate::core::storage;

const STORAGE_KEY: &str = "signet.theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Root class consumed by the stylesheet (`.theme-system` defers to
    /// `prefers-color-scheme`).
    pub fn css_class(self) -> &'static str {
        match self {
            ThemePreference::Light => "theme-light",
            ThemePreference::Dark => "theme-dark",
            ThemePreference::System => "theme-system",
        }
    }

    /// Read the stored preference, falling back to `System`.
    pub fn load() -> Self {
        match storage::load_setting(STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|err: UnknownTheme| {
                tracing::warn!("Ignoring stored theme preference: {err}");
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(err) => {
                tracing::warn!("Could not read theme preference: {err}");
                Self::default()
            }
        }
    }

    /// Best-effort write; failures are logged only.
    pub fn save(self) {
        if let Err(err) = storage::save_setting(STORAGE_KEY, self.as_str()) {
            tracing::warn!("Could not persist theme preference: {err}");
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            _ => Err(UnknownTheme(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_system() {
        assert_eq!(ThemePreference::default(), ThemePreference::System);
    }

    #[test]
    fn storage_string_round_trips() {
        for theme in ThemePreference::ALL {
            assert_eq!(theme.as_str().parse::<ThemePreference>(), Ok(theme));
        }
        assert_eq!(" Dark ".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert_eq!(
            "sepia".parse::<ThemePreference>(),
            Err(UnknownTheme("sepia".into()))
        );
    }

    #[test]
    fn css_classes_are_distinct() {
        let classes: Vec<_> = ThemePreference::ALL.iter().map(|t| t.css_class()).collect();
        assert_eq!(classes, ["theme-light", "theme-dark", "theme-system"]);
    }
}
