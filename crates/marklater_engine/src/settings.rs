use marklater_core::{ServerConfig, SubmitError, PASSWORD_KEY, SERVER_URL_KEY, USERNAME_KEY};

/// Which of the store's two namespaces a key lives in. The server URL is
/// synchronized across devices; credentials stay on the local machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsScope {
    Sync,
    Local,
}

/// Read-only view of the host's key/value settings persistence.
///
/// The controller never writes configuration, and reads are idempotent, so
/// concurrent submissions may share one store without coordination.
#[async_trait::async_trait]
pub trait SettingsStore: Send + Sync {
    /// Looks up a key. Absence yields `None` and is not an error; whether a
    /// missing value matters is decided by the caller.
    async fn get(&self, scope: SettingsScope, key: &str) -> Option<String>;
}

/// Resolves the per-submission server configuration from the store.
///
/// Only a blank or missing `server_url` escalates to an error; credential
/// keys are optional and a partial pair degrades to anonymous submission.
pub async fn resolve_config(store: &dyn SettingsStore) -> Result<ServerConfig, SubmitError> {
    let server_url = store.get(SettingsScope::Sync, SERVER_URL_KEY).await;
    let username = store.get(SettingsScope::Local, USERNAME_KEY).await;
    let password = store.get(SettingsScope::Local, PASSWORD_KEY).await;
    ServerConfig::resolve(server_url, username, password)
}
