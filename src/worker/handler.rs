//! Single-flight fetch controller.
//!
//! Each call to [`FetchController::start`] cancels the previous request, bumps
//! the generation, and spawns a task racing the source against a fresh
//! cancellation token. Finished tasks post a [`FetchResponse`] on a channel
//! owned by the event loop, which passes it back through
//! [`FetchController::accept`] before applying it. A response from any
//! generation but the latest is dropped there, so a superseded request can never
//! be observed after a newer one even if it finished first.

use crate::domain::InitialSnapshot;
use crate::source::DirectorySource;
use crate::worker::messages::{FetchResponse, Generation};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

/// Owns the in-flight request, if any, and the generation counter.
pub struct FetchController {
    source: Arc<dyn DirectorySource>,
    responses: mpsc::UnboundedSender<FetchResponse>,
    generation: Generation,
    in_flight: Option<CancellationToken>,
}

impl FetchController {
    /// Creates a controller and the receiving end of its response channel.
    #[must_use]
    pub fn new(source: Arc<dyn DirectorySource>) -> (Self, mpsc::UnboundedReceiver<FetchResponse>) {
        let (responses, receiver) = mpsc::unbounded_channel();
        let controller = Self {
            source,
            responses,
            generation: 0,
            in_flight: None,
        };
        (controller, receiver)
    }

    /// Starts a new fetch, cancelling the one in flight. Returns its generation.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) -> Generation {
        if let Some(previous) = self.in_flight.take() {
            tracing::debug!(superseded = self.generation, "cancelling in-flight fetch");
            previous.cancel();
        }

        self.generation += 1;
        let generation = self.generation;
        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        let request = self.source.fetch_users();
        let responses = self.responses.clone();
        let span = tracing::debug_span!("fetch_users", generation);

        tokio::spawn(
            async move {
                tokio::select! {
                    biased;
                    () = token.cancelled() => {
                        tracing::debug!("fetch cancelled before completion");
                    }
                    result = request => {
                        let response = match result {
                            Ok(users) => FetchResponse::loaded(generation, users),
                            Err(e) => {
                                tracing::debug!(error = %e, "fetch failed");
                                FetchResponse::failed(generation, e.user_message())
                            }
                        };
                        if responses.send(response).is_err() {
                            tracing::debug!("response channel closed, dropping fetch result");
                        }
                    }
                }
            }
            .instrument(span),
        );

        tracing::debug!(generation, "fetch started");
        generation
    }

    /// Decides whether `response` may be applied.
    ///
    /// Only the response of the latest, still active request is accepted;
    /// accepting it ends the request.
    pub fn accept(&mut self, response: &FetchResponse) -> bool {
        if self.in_flight.is_some() && response.generation == self.generation {
            self.in_flight = None;
            true
        } else {
            tracing::debug!(
                response_generation = response.generation,
                current_generation = self.generation,
                "discarding stale fetch response"
            );
            false
        }
    }

    /// Cancels the in-flight request without starting another.
    pub fn abort(&mut self) {
        if let Some(token) = self.in_flight.take() {
            tracing::debug!(generation = self.generation, "aborting in-flight fetch");
            token.cancel();
        }
    }

    /// Returns `true` while a request is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Returns the generation of the most recent request.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }
}

impl Drop for FetchController {
    fn drop(&mut self) {
        self.abort();
    }
}

/// Fetches once up front and packages the outcome as an initial snapshot.
///
/// Stands in for a server-side render step: the browser starts with whatever
/// this produced and skips its own first fetch when anything was produced.
pub async fn prefetch(source: &dyn DirectorySource) -> InitialSnapshot {
    match source.fetch_users().await {
        Ok(users) => {
            tracing::debug!(user_count = users.len(), "prefetched directory");
            InitialSnapshot { users, error: None }
        }
        Err(e) => {
            tracing::debug!(error = %e, "prefetch failed");
            InitialSnapshot {
                users: vec![],
                error: Some(e.user_message()),
            }
        }
    }
}
