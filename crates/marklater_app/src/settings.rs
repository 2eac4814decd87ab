//! RON-backed settings persistence with the two scopes the submission
//! controller reads: a synchronized one for the server URL and a local one
//! for credentials.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use mark_logging::{mark_error, mark_info, mark_warn};
use marklater_engine::{SettingsScope, SettingsStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct SettingsFile {
    #[serde(default)]
    sync: BTreeMap<String, String>,
    #[serde(default)]
    local: BTreeMap<String, String>,
}

/// File-backed settings store. Loaded once; a missing file or a parse
/// failure degrades to empty scopes rather than failing the submission.
pub struct FileSettingsStore {
    path: PathBuf,
    file: SettingsFile,
}

impl FileSettingsStore {
    pub fn load(path: &Path) -> Self {
        let file = match fs::read_to_string(path) {
            Ok(content) => match ron::from_str(&content) {
                Ok(file) => file,
                Err(err) => {
                    mark_warn!("Failed to parse settings from {:?}: {}", path, err);
                    SettingsFile::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => SettingsFile::default(),
            Err(err) => {
                mark_warn!("Failed to read settings from {:?}: {}", path, err);
                SettingsFile::default()
            }
        };

        Self {
            path: path.to_path_buf(),
            file,
        }
    }

    pub fn set(&mut self, scope: SettingsScope, key: &str, value: String) {
        self.scope_mut(scope).insert(key.to_string(), value);
    }

    pub fn save(&self) {
        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(&self.file, pretty) {
            Ok(content) => content,
            Err(err) => {
                mark_error!("Failed to serialize settings: {}", err);
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, content) {
            mark_error!("Failed to write settings to {:?}: {}", self.path, err);
            return;
        }
        mark_info!("Saved settings to {:?}", self.path);
    }

    fn scope(&self, scope: SettingsScope) -> &BTreeMap<String, String> {
        match scope {
            SettingsScope::Sync => &self.file.sync,
            SettingsScope::Local => &self.file.local,
        }
    }

    fn scope_mut(&mut self, scope: SettingsScope) -> &mut BTreeMap<String, String> {
        match scope {
            SettingsScope::Sync => &mut self.file.sync,
            SettingsScope::Local => &mut self.file.local,
        }
    }
}

#[async_trait::async_trait]
impl SettingsStore for FileSettingsStore {
    async fn get(&self, scope: SettingsScope, key: &str) -> Option<String> {
        self.scope(scope).get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marklater_core::{PASSWORD_KEY, SERVER_URL_KEY, USERNAME_KEY};

    #[tokio::test]
    async fn round_trips_both_scopes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");

        let mut store = FileSettingsStore::load(&path);
        store.set(
            SettingsScope::Sync,
            SERVER_URL_KEY,
            "https://x.test".to_string(),
        );
        store.set(SettingsScope::Local, USERNAME_KEY, "u".to_string());
        store.set(SettingsScope::Local, PASSWORD_KEY, "p".to_string());
        store.save();

        let reloaded = FileSettingsStore::load(&path);
        assert_eq!(
            reloaded.get(SettingsScope::Sync, SERVER_URL_KEY).await,
            Some("https://x.test".to_string())
        );
        assert_eq!(
            reloaded.get(SettingsScope::Local, USERNAME_KEY).await,
            Some("u".to_string())
        );
        // Scopes do not leak into each other.
        assert_eq!(reloaded.get(SettingsScope::Sync, USERNAME_KEY).await, None);
    }

    #[tokio::test]
    async fn missing_file_yields_empty_scopes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::load(&dir.path().join("absent.ron"));
        assert_eq!(store.get(SettingsScope::Sync, SERVER_URL_KEY).await, None);
    }

    #[tokio::test]
    async fn unparsable_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(&path, "not ron at all {{{").unwrap();

        let store = FileSettingsStore::load(&path);
        assert_eq!(store.get(SettingsScope::Sync, SERVER_URL_KEY).await, None);
    }
}
