//! HTTP directory source.
//!
//! Issues a single unauthenticated GET to a fixed endpoint and decodes the body
//! as a JSON array of users. The body is read as bytes and decoded with
//! `serde_json` so a malformed payload is reported as a parse failure rather
//! than a transport one.

use crate::domain::{DirectoryError, Result, User};
use crate::source::backend::DirectorySource;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tracing::Instrument;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Directory source backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSource {
    /// Creates a source for `endpoint` with a default client.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Creates a source reusing an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Returns the endpoint this source reads from.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl DirectorySource for HttpSource {
    fn fetch_users(&self) -> BoxFuture<'static, Result<Vec<User>>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        let span = tracing::debug_span!(
            "outgoing_http",
            http.method = "GET",
            http.url = %endpoint,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        );

        async move {
            let response = client
                .get(&endpoint)
                .send()
                .await
                .map_err(DirectoryError::from)?;

            let status = response.status();
            tracing::Span::current().record("http.status_code", status.as_u16());

            if !status.is_success() {
                tracing::debug!(status = status.as_u16(), "directory endpoint returned error status");
                return Err(DirectoryError::Status(status.as_u16()));
            }

            let body = response.bytes().await.map_err(DirectoryError::from)?;
            let users: Vec<User> = serde_json::from_slice(&body)
                .map_err(|e| DirectoryError::Parse(e.to_string()))?;

            tracing::debug!(user_count = users.len(), "directory fetched");
            Ok(users)
        }
        .instrument(span)
        .boxed()
    }
}
