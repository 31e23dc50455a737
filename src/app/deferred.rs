//! Immediate and deferred copies of the search query.
//!
//! Keystrokes edit the immediate copy, which the search box shows. Filtering,
//! paging, and highlighting read the deferred copy, which only catches up on
//! [`DeferredQuery::commit`]. While the two differ the query is stale.

/// Search query with a lagging copy used for derived state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeferredQuery {
    immediate: String,
    deferred: String,
}

impl DeferredQuery {
    /// Text as typed.
    #[must_use]
    pub fn immediate(&self) -> &str {
        &self.immediate
    }

    /// Text that derived state is computed from.
    #[must_use]
    pub fn deferred(&self) -> &str {
        &self.deferred
    }

    pub fn push(&mut self, c: char) {
        self.immediate.push(c);
    }

    /// Removes the last character. Returns `false` if the query was already empty.
    pub fn pop(&mut self) -> bool {
        self.immediate.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.immediate.clear();
    }

    /// Copies the immediate value into the deferred one.
    ///
    /// Returns `true` if the deferred value changed.
    pub fn commit(&mut self) -> bool {
        if self.immediate == self.deferred {
            return false;
        }
        self.deferred.clone_from(&self.immediate);
        true
    }

    /// `true` while the deferred value lags the immediate one.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.immediate != self.deferred
    }
}
