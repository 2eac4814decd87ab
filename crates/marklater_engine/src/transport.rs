use std::time::Duration;

use marklater_core::{BookmarkDraft, ServerConfig, SubmitError};

/// Header carrying the username when a full credential pair is configured.
pub const USERNAME_HEADER: &str = "X-Username";
/// Header carrying the password, always alongside [`USERNAME_HEADER`].
pub const PASSWORD_HEADER: &str = "X-Password";

#[derive(Debug, Clone, Default)]
pub struct TransportSettings {
    /// No timeout by default: a submission that never receives a response
    /// simply stays in flight. Hosts that want bounded waiting opt in.
    pub request_timeout: Option<Duration>,
}

/// The wire seam: posts one draft to the configured server.
#[async_trait::async_trait]
pub trait BookmarkTransport: Send + Sync {
    async fn submit(
        &self,
        config: &ServerConfig,
        draft: &BookmarkDraft,
    ) -> Result<(), SubmitError>;
}

/// HTTP transport speaking the server's `/add` protocol: a JSON POST with
/// optional `X-Username`/`X-Password` headers and a JSON reply.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    settings: TransportSettings,
}

impl ReqwestTransport {
    pub fn new(settings: TransportSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SubmitError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| SubmitError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl BookmarkTransport for ReqwestTransport {
    async fn submit(
        &self,
        config: &ServerConfig,
        draft: &BookmarkDraft,
    ) -> Result<(), SubmitError> {
        let client = self.build_client()?;

        let mut request = client.post(config.add_endpoint()).json(draft);
        if let Some(credentials) = config.credentials() {
            request = request
                .header(USERNAME_HEADER, &credentials.username)
                .header(PASSWORD_HEADER, &credentials.password);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::HttpStatus(status.as_u16()));
        }

        // The reply body must parse as JSON but is not otherwise
        // interpreted; the server's payload is informational only.
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|err| SubmitError::MalformedResponse(err.to_string()))?;

        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::Network(format!("request timed out: {err}"));
    }
    SubmitError::Network(err.to_string())
}
