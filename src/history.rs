//! Snapshot history for the memento vignette: a strict LIFO stack of owned
//! state copies. A snapshot is captured by value, so mutating the owner
//! afterwards can never reach back into an already-taken snapshot.

use crate::error::PatternError;

pub struct History<S: Clone> {
    stack: Vec<S>,
}

impl<S: Clone> History<S> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Capture an owned copy of the current state.
    pub fn save(&mut self, state: &S) {
        self.stack.push(state.clone());
    }

    /// Pop the most recent snapshot. Restoring from an empty history is a
    /// reported condition, not an invalid dereference.
    pub fn restore(&mut self) -> Result<S, PatternError> {
        self.stack.pop().ok_or(PatternError::NoHistory)
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl<S: Clone> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}
