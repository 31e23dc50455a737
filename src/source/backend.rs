//! Directory source abstraction.
//!
//! This module defines the [`DirectorySource`] trait that abstracts over where the
//! user collection comes from. The browser only needs one operation: fetch the
//! whole collection. Filtering and pagination always happen client-side.

use crate::domain::{Result, User};
use futures_util::future::BoxFuture;

/// Something that can produce the full user collection.
///
/// The returned future must be `'static` so the fetch controller can move it
/// into a spawned task and race it against a cancellation token.
///
/// # Implementations
///
/// - [`HttpSource`](super::HttpSource): GET against a fixed endpoint (default)
///
/// # Examples
///
/// ```no_run
/// use dirbrowse::source::{DirectorySource, HttpSource};
///
/// # async fn demo() -> dirbrowse::Result<()> {
/// let source = HttpSource::new("https://jsonplaceholder.typicode.com/users");
/// let users = source.fetch_users().await?;
/// println!("{} users", users.len());
/// # Ok(())
/// # }
/// ```
pub trait DirectorySource: Send + Sync + 'static {
    /// Fetches every user, in the order the source defines.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Status`](crate::DirectoryError::Status) for a
    /// non-2xx answer, [`DirectoryError::Parse`](crate::DirectoryError::Parse)
    /// for a malformed body, and a transport error when no response arrived.
    fn fetch_users(&self) -> BoxFuture<'static, Result<Vec<User>>>;
}
