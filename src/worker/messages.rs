//! Messages passed from fetch tasks back to the event loop.

use crate::domain::User;

/// Identifies one fetch request. Strictly increasing per controller.
pub type Generation = u64;

/// Outcome of a finished fetch, tagged with the request that produced it.
///
/// The error side is already collapsed to the user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub generation: Generation,
    pub outcome: Result<Vec<User>, String>,
}

impl FetchResponse {
    /// Builds a successful response.
    #[must_use]
    pub const fn loaded(generation: Generation, users: Vec<User>) -> Self {
        Self {
            generation,
            outcome: Ok(users),
        }
    }

    /// Builds a failed response.
    #[must_use]
    pub fn failed(generation: Generation, message: impl Into<String>) -> Self {
        Self {
            generation,
            outcome: Err(message.into()),
        }
    }
}
