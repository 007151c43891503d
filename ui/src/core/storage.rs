//! Local persistence for small UI preferences.
//!
//! Only preferences live here; the signature fields themselves are never
//! written anywhere.
//!
//! - Web: one `localStorage` entry per key.
//! - Native: a `settings.toml` table in the platform config directory.

use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
use std::{collections::BTreeMap, path::Path, path::PathBuf};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage io: {0}")]
    Io(String),
    #[error("settings file is malformed: {0}")]
    Malformed(String),
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("window".into()))?
        .local_storage()
        .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
        .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))
}

#[cfg(target_arch = "wasm32")]
pub fn load_setting(key: &str) -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(key)
        .map_err(|_| StorageError::Io(format!("read {key}")))
}

#[cfg(target_arch = "wasm32")]
pub fn save_setting(key: &str, value: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|_| StorageError::Io(format!("write {key}")))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_setting(key: &str) -> Result<Option<String>, StorageError> {
    load_setting_from(&settings_path()?, key)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_setting(key: &str, value: &str) -> Result<(), StorageError> {
    save_setting_to(&settings_path()?, key, value)
}

#[cfg(not(target_arch = "wasm32"))]
fn settings_path() -> Result<PathBuf, StorageError> {
    let dirs = directories::ProjectDirs::from("com", "Signet", "Signet")
        .ok_or_else(|| StorageError::Unavailable("no config directory".into()))?;
    Ok(dirs.config_dir().join("settings.toml"))
}

#[cfg(not(target_arch = "wasm32"))]
type SettingsTable = BTreeMap<String, String>;

#[cfg(not(target_arch = "wasm32"))]
fn read_table(path: &Path) -> Result<SettingsTable, StorageError> {
    if !path.exists() {
        return Ok(SettingsTable::new());
    }
    let raw = std::fs::read_to_string(path).map_err(|err| StorageError::Io(err.to_string()))?;
    toml::from_str(&raw).map_err(|err| StorageError::Malformed(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn load_setting_from(path: &Path, key: &str) -> Result<Option<String>, StorageError> {
    Ok(read_table(path)?.remove(key))
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn save_setting_to(path: &Path, key: &str, value: &str) -> Result<(), StorageError> {
    // A malformed file is replaced rather than blocking the write.
    let mut table = match read_table(path) {
        Ok(table) => table,
        Err(StorageError::Malformed(err)) => {
            tracing::warn!("Discarding malformed settings file {}: {err}", path.display());
            SettingsTable::new()
        }
        Err(err) => return Err(err),
    };
    table.insert(key.to_string(), value.to_string());

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| StorageError::Io(err.to_string()))?;
    }
    let body = toml::to_string_pretty(&table).map_err(|err| StorageError::Io(err.to_string()))?;
    std::fs::write(path, body).map_err(|err| StorageError::Io(err.to_string()))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        assert_eq!(load_setting_from(&path, "theme").unwrap(), None);
    }

    #[test]
    fn values_round_trip_and_keep_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        save_setting_to(&path, "theme", "dark").unwrap();
        save_setting_to(&path, "language", "es-ES").unwrap();
        save_setting_to(&path, "theme", "light").unwrap();

        assert_eq!(load_setting_from(&path, "theme").unwrap().as_deref(), Some("light"));
        assert_eq!(load_setting_from(&path, "language").unwrap().as_deref(), Some("es-ES"));
    }

    #[test]
    fn malformed_file_is_reported_then_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "theme = [unclosed").unwrap();

        assert!(matches!(
            load_setting_from(&path, "theme"),
            Err(StorageError::Malformed(_))
        ));
        save_setting_to(&path, "theme", "system").unwrap();
        assert_eq!(load_setting_from(&path, "theme").unwrap().as_deref(), Some("system"));
    }
}
