//! Substring filter over the user collection.

use crate::domain::User;
use std::borrow::Cow;

/// Returns the users whose name or email contains `query`, ignoring case.
///
/// A blank query (empty or whitespace only) borrows the input unchanged.
/// Otherwise the query is trimmed and lowercased and the matching users are
/// cloned out in their original order. The input is never modified.
///
/// # Examples
///
/// ```
/// use dirbrowse::directory::filter_users;
/// use dirbrowse::domain::User;
///
/// let users = vec![
///     User::new(1, "Leanne Graham", "Sincere@april.biz", "Romaguera-Crona"),
///     User::new(2, "Ervin Howell", "Shanna@melissa.tv", "Deckow-Crist"),
/// ];
///
/// let hits = filter_users(&users, "  APRIL ");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id, 1);
/// ```
#[must_use]
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Cow<'a, [User]> {
    let needle = query.trim();
    if needle.is_empty() {
        return Cow::Borrowed(users);
    }

    let needle = needle.to_lowercase();
    let _span = tracing::debug_span!(
        "filter_users",
        total_users = users.len(),
        query_len = needle.len()
    )
    .entered();

    let filtered: Vec<User> = users
        .iter()
        .filter(|user| user.matches(&needle))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "search filter applied");
    Cow::Owned(filtered)
}
