//! Shared in-memory query store

use std::sync::RwLock;

use super::{QueryCollectionState, QueryTransition, TransitionOutcome};
use crate::models::{ConversationMessage, Query, QueryId};

/// In-memory store for the session's query collection
///
/// Wraps the state in a single RwLock so every transition is observed
/// atomically by concurrent readers. `ReplaceOne` and `AppendMessage` are
/// read-modify-write sequences, so all transitions must go through this
/// one lock; a reader never sees a half-applied transition.
///
/// The store is owned by the composition root and passed into consumers
/// by reference, not accessed as an ambient singleton.
pub struct QueryStore {
    state: RwLock<QueryCollectionState>,
}

impl QueryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            state: RwLock::new(QueryCollectionState::new()),
        }
    }

    /// Apply a transition
    pub fn apply(&self, transition: QueryTransition) -> TransitionOutcome {
        self.state.write().unwrap().apply(transition)
    }

    /// Discard the collection and store the given sequence verbatim
    pub fn replace_all(&self, queries: Vec<Query>) {
        self.apply(QueryTransition::ReplaceAll(queries));
    }

    /// Replace the entry whose id matches, preserving its position
    pub fn replace_one(&self, query: Query) -> TransitionOutcome {
        self.apply(QueryTransition::ReplaceOne(query))
    }

    /// Append a message to the given query's conversation
    pub fn append_message(
        &self,
        query_id: QueryId,
        message: ConversationMessage,
    ) -> TransitionOutcome {
        self.apply(QueryTransition::AppendMessage { query_id, message })
    }

    /// Store the selection as given; `None` means "no selection"
    pub fn set_selection(&self, selection: Option<QueryId>) {
        self.apply(QueryTransition::SetSelection(selection));
    }

    /// Snapshot of all queries in stored order
    pub fn queries(&self) -> Vec<Query> {
        self.state.read().unwrap().queries.clone()
    }

    /// Get a query by id
    pub fn get_query(&self, id: &QueryId) -> Option<Query> {
        self.state.read().unwrap().get(id).cloned()
    }

    /// The current selection, which may dangle
    pub fn selection(&self) -> Option<QueryId> {
        self.state.read().unwrap().selected_query_id.clone()
    }

    /// The selected query, if the selection refers to a present entry
    pub fn selected_query(&self) -> Option<Query> {
        self.state.read().unwrap().selected_query().cloned()
    }

    /// Count queries in the collection
    pub fn count_queries(&self) -> usize {
        self.state.read().unwrap().queries.len()
    }

    /// Full snapshot of the collection state
    pub fn snapshot(&self) -> QueryCollectionState {
        self.state.read().unwrap().clone()
    }

    /// Reset to the empty initial state (session teardown)
    pub fn clear(&self) {
        let mut state = self.state.write().unwrap();
        *state = QueryCollectionState::new();
    }
}

impl Default for QueryStore {
    fn default() -> Self {
        Self::new()
    }
}
