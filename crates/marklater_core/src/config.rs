use crate::SubmitError;

/// Settings key for the server base URL (synchronized scope).
pub const SERVER_URL_KEY: &str = "server_url";
/// Settings key for the optional username (local scope).
pub const USERNAME_KEY: &str = "username";
/// Settings key for the optional password (local scope).
pub const PASSWORD_KEY: &str = "password";

/// A username/password pair. Always present together or not at all; the
/// transport never sends one credential header without the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Server configuration resolved fresh for each submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    server_url: String,
    credentials: Option<Credentials>,
}

impl ServerConfig {
    /// Resolves a configuration from raw settings values.
    ///
    /// A missing or blank `server_url` is a configuration failure. The
    /// credential fields are independently optional: only a complete
    /// non-blank pair is kept, anything partial degrades to anonymous.
    pub fn resolve(
        server_url: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, SubmitError> {
        let server_url = server_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or(SubmitError::MissingServerUrl)?;

        let credentials = match (non_blank(username), non_blank(password)) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            _ => None,
        };

        Ok(Self {
            server_url,
            credentials,
        })
    }

    /// The full URL of the server's add-bookmark endpoint.
    pub fn add_endpoint(&self) -> String {
        format!("{}/add", self.server_url.trim_end_matches('/'))
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_requires_server_url() {
        assert_eq!(
            ServerConfig::resolve(None, None, None),
            Err(SubmitError::MissingServerUrl)
        );
        assert_eq!(
            ServerConfig::resolve(Some("   ".into()), None, None),
            Err(SubmitError::MissingServerUrl)
        );
    }

    #[test]
    fn resolve_keeps_complete_credential_pair() {
        let config =
            ServerConfig::resolve(Some("https://x.test".into()), Some("u".into()), Some("p".into()))
                .unwrap();
        assert_eq!(
            config.credentials(),
            Some(&Credentials {
                username: "u".into(),
                password: "p".into(),
            })
        );
    }

    #[test]
    fn resolve_degrades_partial_pair_to_anonymous() {
        let config =
            ServerConfig::resolve(Some("https://x.test".into()), Some("u".into()), None).unwrap();
        assert_eq!(config.credentials(), None);

        let config =
            ServerConfig::resolve(Some("https://x.test".into()), None, Some("p".into())).unwrap();
        assert_eq!(config.credentials(), None);

        let config = ServerConfig::resolve(
            Some("https://x.test".into()),
            Some("u".into()),
            Some("  ".into()),
        )
        .unwrap();
        assert_eq!(config.credentials(), None);
    }

    #[test]
    fn add_endpoint_tolerates_trailing_slash() {
        let config = ServerConfig::resolve(Some("https://x.test/".into()), None, None).unwrap();
        assert_eq!(config.add_endpoint(), "https://x.test/add");

        let config = ServerConfig::resolve(Some("https://x.test".into()), None, None).unwrap();
        assert_eq!(config.add_endpoint(), "https://x.test/add");
    }
}
