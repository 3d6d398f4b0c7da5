//! Helpdesk crate - client-side core for the support-desk application
//!
//! This crate provides UI-independent support-ticketing functionality:
//! - Domain models (Query, ConversationMessage, Role, user records)
//! - HTTP client wrapping the remote support-desk API
//! - In-memory query store with explicit state transitions
//! - API endpoint configuration
//!
//! Rendering, routing, and dialogs live in the consuming application;
//! it calls the client, feeds successful results into the store, and
//! reads store snapshots to display.

pub mod client;
pub mod config;
pub mod models;
pub mod store;

pub use client::{
    HelpdeskClient, SendMessageError, StatusUpdateForbiddenError, api::SessionData,
    normalize_user_list,
};
pub use config::ApiEndpoints;
pub use models::{ConversationMessage, ManagedUser, NewUser, Query, QueryBuilder, QueryId, Role};
pub use store::{QueryCollectionState, QueryStore, QueryTransition, TransitionOutcome};
