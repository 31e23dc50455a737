//! User domain model.
//!
//! This module defines the `User` record served by the directory endpoint and the
//! `InitialSnapshot` handed over by a prefetch step before the UI starts. Users are
//! immutable once fetched; the browser only ever reads them.

use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Employer of a user. Only the name is read; other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

/// A single directory entry.
///
/// The endpoint returns more fields than these (address, phone, website, ...);
/// serde skips them during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company: Company,
}

impl User {
    /// Creates a user, mostly useful for tests and fixtures.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirbrowse::domain::User;
    ///
    /// let user = User::new(1, "Leanne Graham", "Sincere@april.biz", "Romaguera-Crona");
    /// assert_eq!(user.company.name, "Romaguera-Crona");
    /// ```
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            company: Company {
                name: company.into(),
            },
        }
    }

    /// Returns `true` if the lowercased name or email contains `needle`.
    ///
    /// `needle` must already be trimmed and lowercased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }
}

/// Data supplied before the first render, standing in for a server-side fetch.
///
/// When either field carries something, the automatic first fetch is skipped.
/// An empty user list without an error counts as "nothing supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialSnapshot {
    pub users: Vec<User>,
    pub error: Option<String>,
}

impl InitialSnapshot {
    /// Returns `true` if the snapshot leaves the browser with nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.error.is_none()
    }
}

/// Returns a short description of how long ago `timestamp` was.
///
/// - Less than 1 minute: "just now"
/// - Less than 1 hour: "Xm ago"
/// - Less than 1 day: "Xh ago"
/// - Otherwise: "Xd ago"
///
/// # Examples
///
/// ```
/// use dirbrowse::domain::user::time_ago;
///
/// let now = chrono::Utc::now().timestamp();
/// assert_eq!(time_ago(now), "just now");
/// assert_eq!(time_ago(now - 300), "5m ago");
/// ```
#[must_use]
pub fn time_ago(timestamp: i64) -> String {
    let diff = chrono::Utc::now().timestamp() - timestamp;

    if diff < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if diff < SECONDS_PER_HOUR {
        let mins = diff / SECONDS_PER_MINUTE;
        format!("{mins}m ago")
    } else if diff < SECONDS_PER_DAY {
        let hours = diff / SECONDS_PER_HOUR;
        format!("{hours}h ago")
    } else {
        let days = diff / SECONDS_PER_DAY;
        format!("{days}d ago")
    }
}
