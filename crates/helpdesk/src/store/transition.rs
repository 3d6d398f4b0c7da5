//! State transitions for the query collection

use serde::{Deserialize, Serialize};

use crate::models::{ConversationMessage, Query, QueryId};

/// A state transition applied to a [`QueryCollectionState`]
///
/// The set is closed: every mutation of the collection is one of these
/// four variants.
#[derive(Debug, Clone)]
pub enum QueryTransition {
    /// Discard the collection and store the given sequence verbatim
    ReplaceAll(Vec<Query>),
    /// Replace the entry with a matching id in place; skip when absent
    ReplaceOne(Query),
    /// Append a message to the given query's conversation; skip when absent
    AppendMessage {
        query_id: QueryId,
        message: ConversationMessage,
    },
    /// Store the selection as given, including `None` for "no selection"
    SetSelection(Option<QueryId>),
}

/// Whether a transition changed the state or was a documented no-op
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Applied,
    Skipped,
}

/// Snapshot of the query collection for one UI session
///
/// `selected_query_id` is a weak reference by id. It may point at a query
/// no longer present after a `ReplaceAll`; readers must tolerate that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCollectionState {
    /// Queries in fetch order; ids are unique within the collection
    pub queries: Vec<Query>,
    /// Currently selected query, if any
    pub selected_query_id: Option<QueryId>,
}

impl QueryCollectionState {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a transition in place.
    ///
    /// `ReplaceOne` and `AppendMessage` look the target up by linear scan
    /// and return [`TransitionOutcome::Skipped`] when no query has the
    /// given id, leaving the collection untouched. The upstream flow
    /// fetches before it updates, so an absent id is a no-op here rather
    /// than an error.
    pub fn apply(&mut self, transition: QueryTransition) -> TransitionOutcome {
        match transition {
            QueryTransition::ReplaceAll(queries) => {
                self.queries = queries;
                TransitionOutcome::Applied
            }
            QueryTransition::ReplaceOne(query) => {
                match self.queries.iter_mut().find(|q| q.id == query.id) {
                    Some(slot) => {
                        *slot = query;
                        TransitionOutcome::Applied
                    }
                    None => TransitionOutcome::Skipped,
                }
            }
            QueryTransition::AppendMessage { query_id, message } => {
                match self.queries.iter_mut().find(|q| q.id == query_id) {
                    Some(query) => {
                        query.conversation.push(message);
                        TransitionOutcome::Applied
                    }
                    None => TransitionOutcome::Skipped,
                }
            }
            QueryTransition::SetSelection(selection) => {
                self.selected_query_id = selection;
                TransitionOutcome::Applied
            }
        }
    }

    /// Look up a query by id
    pub fn get(&self, id: &QueryId) -> Option<&Query> {
        self.queries.iter().find(|q| q.id == *id)
    }

    /// The selected query, if the selection refers to a present entry
    pub fn selected_query(&self) -> Option<&Query> {
        self.selected_query_id.as_ref().and_then(|id| self.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_query(id: &str, subject: &str) -> Query {
        Query::builder(QueryId::new(id))
            .user_email("student@example.com")
            .subject(subject)
            .status("Open")
            .user_role("Student")
            .build()
    }

    fn make_message(sender: &str, text: &str) -> ConversationMessage {
        ConversationMessage::new(sender, "a@x.com", text, "t1", "Student")
    }

    #[test]
    fn test_replace_all_stores_sequence_verbatim() {
        let mut state = QueryCollectionState::new();
        let queries = vec![make_query("q1", "First"), make_query("q2", "Second")];

        let outcome = state.apply(QueryTransition::ReplaceAll(queries.clone()));

        assert_eq!(outcome, TransitionOutcome::Applied);
        assert_eq!(state.queries, queries);
    }

    #[test]
    fn test_replace_all_leaves_dangling_selection() {
        let mut state = QueryCollectionState::new();
        state.apply(QueryTransition::ReplaceAll(vec![make_query("q1", "First")]));
        state.apply(QueryTransition::SetSelection(Some(QueryId::new("q1"))));

        state.apply(QueryTransition::ReplaceAll(vec![make_query("q2", "Second")]));

        // Selection is not auto-cleared; it now dangles
        assert_eq!(state.selected_query_id, Some(QueryId::new("q1")));
        assert!(state.selected_query().is_none());
    }

    #[test]
    fn test_replace_one_preserves_position_and_order() {
        let mut state = QueryCollectionState::new();
        state.apply(QueryTransition::ReplaceAll(vec![
            make_query("q1", "First"),
            make_query("q2", "Second"),
            make_query("q3", "Third"),
        ]));

        let replacement = make_query("q2", "Second, updated");
        let outcome = state.apply(QueryTransition::ReplaceOne(replacement));

        assert_eq!(outcome, TransitionOutcome::Applied);
        assert_eq!(state.queries.len(), 3);
        assert_eq!(state.queries[0].subject, "First");
        assert_eq!(state.queries[1].subject, "Second, updated");
        assert_eq!(state.queries[2].subject, "Third");
    }

    #[test]
    fn test_replace_one_missing_id_is_noop() {
        let mut state = QueryCollectionState::new();
        state.apply(QueryTransition::ReplaceAll(vec![
            make_query("q1", "First"),
            make_query("q2", "Second"),
        ]));

        let outcome = state.apply(QueryTransition::ReplaceOne(make_query("q3", "Ghost")));

        assert_eq!(outcome, TransitionOutcome::Skipped);
        assert_eq!(state.queries.len(), 2);
        assert!(state.get(&QueryId::new("q3")).is_none());
    }

    #[test]
    fn test_append_message_preserves_prior_order() {
        let mut state = QueryCollectionState::new();
        let mut q1 = make_query("q1", "First");
        q1.conversation.push(make_message("Alice", "first"));
        state.apply(QueryTransition::ReplaceAll(vec![q1, make_query("q2", "Second")]));

        let outcome = state.apply(QueryTransition::AppendMessage {
            query_id: QueryId::new("q1"),
            message: make_message("Bob", "second"),
        });

        assert_eq!(outcome, TransitionOutcome::Applied);
        let q1 = state.get(&QueryId::new("q1")).unwrap();
        assert_eq!(q1.conversation.len(), 2);
        assert_eq!(q1.conversation[0].message, "first");
        assert_eq!(q1.conversation[1].message, "second");

        let q2 = state.get(&QueryId::new("q2")).unwrap();
        assert!(q2.conversation.is_empty());
    }

    #[test]
    fn test_append_message_missing_id_is_noop() {
        let mut state = QueryCollectionState::new();
        state.apply(QueryTransition::ReplaceAll(vec![make_query("q1", "First")]));

        let outcome = state.apply(QueryTransition::AppendMessage {
            query_id: QueryId::new("missing"),
            message: make_message("Alice", "lost"),
        });

        assert_eq!(outcome, TransitionOutcome::Skipped);
        assert!(state.get(&QueryId::new("q1")).unwrap().conversation.is_empty());
    }

    #[test]
    fn test_set_selection_is_unvalidated() {
        let mut state = QueryCollectionState::new();

        state.apply(QueryTransition::SetSelection(Some(QueryId::new("nowhere"))));
        assert_eq!(state.selected_query_id, Some(QueryId::new("nowhere")));

        state.apply(QueryTransition::SetSelection(None));
        assert_eq!(state.selected_query_id, None);
    }
}
