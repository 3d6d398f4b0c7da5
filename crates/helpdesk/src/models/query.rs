//! Query model representing a support ticket

use serde::{Deserialize, Serialize};

use super::ConversationMessage;

/// Unique identifier for a query, assigned by the remote system
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryId(pub String);

impl QueryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for QueryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for QueryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A support ticket with its conversation thread
///
/// `status` is a server-defined string and is not validated locally; the
/// collection accepts whatever the server returns. Mutations are
/// whole-record replacement or conversation append only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Server-assigned identifier, unique within a collection
    pub id: QueryId,
    /// Email address of the user who raised the query
    pub user_email: String,
    /// Subject line
    pub subject: String,
    /// Server-defined status string (e.g. "Open", "InProgress", "Resolved")
    pub status: String,
    /// Role of the user who raised the query
    pub user_role: String,
    /// Creation time as reported by the server
    pub created_at: String,
    /// Last-update time as reported by the server
    pub updated_at: String,
    /// Conversation thread, append-only, in display order
    #[serde(default)]
    pub conversation: Vec<ConversationMessage>,
}

impl Query {
    /// Create a new query builder
    pub fn builder(id: QueryId) -> QueryBuilder {
        QueryBuilder::new(id)
    }
}

/// Builder for creating Query instances
pub struct QueryBuilder {
    id: QueryId,
    user_email: String,
    subject: String,
    status: String,
    user_role: String,
    created_at: String,
    updated_at: String,
    conversation: Vec<ConversationMessage>,
}

impl QueryBuilder {
    fn new(id: QueryId) -> Self {
        Self {
            id,
            user_email: String::new(),
            subject: String::new(),
            status: String::new(),
            user_role: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
            conversation: Vec::new(),
        }
    }

    pub fn user_email(mut self, user_email: impl Into<String>) -> Self {
        self.user_email = user_email.into();
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn user_role(mut self, user_role: impl Into<String>) -> Self {
        self.user_role = user_role.into();
        self
    }

    pub fn created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    pub fn updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = updated_at.into();
        self
    }

    pub fn conversation(mut self, conversation: Vec<ConversationMessage>) -> Self {
        self.conversation = conversation;
        self
    }

    pub fn build(self) -> Query {
        Query {
            id: self.id,
            user_email: self.user_email,
            subject: self.subject,
            status: self.status,
            user_role: self.user_role,
            created_at: self.created_at,
            updated_at: self.updated_at,
            conversation: self.conversation,
        }
    }
}
