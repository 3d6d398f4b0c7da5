//! Support-desk API HTTP client
//!
//! One method per remote operation. Uses synchronous HTTP (ureq) to be
//! executor-agnostic. The bearer token travels as an argument on every
//! authorized call; the client holds no session state, so each call is a
//! single request with no retry, batching, or caching.

use anyhow::{Context, Result};
use log::debug;

use super::api::{LoginRequest, SessionData, TokenResponse, UserListResponse};
use super::normalize::normalize_user_list;
use super::routes::{self, ApiBase};
use crate::config::ApiEndpoints;
use crate::models::{ConversationMessage, ManagedUser, NewUser, Query, QueryId, Role};

/// Error carrying the caller-facing message contract for posting failures
///
/// `send_message` and `manage_query_status` surface every failure under
/// this one message; callers match on the display text. The underlying
/// error is retained as the source rather than discarded.
#[derive(Debug, thiserror::Error)]
#[error("Failed to send message")]
pub struct SendMessageError {
    #[source]
    source: anyhow::Error,
}

/// Error indicating the server refused a status change for an admin account
#[derive(Debug, thiserror::Error)]
#[error("Admin status cannot be updated")]
pub struct StatusUpdateForbiddenError;

/// Support-desk API client
pub struct HelpdeskClient {
    endpoints: ApiEndpoints,
}

impl HelpdeskClient {
    /// Create a new client for the given endpoints
    pub fn new(endpoints: ApiEndpoints) -> Self {
        Self { endpoints }
    }

    fn url(&self, base: ApiBase, path: &str) -> String {
        let base = match base {
            ApiBase::User => self.endpoints.user_base(),
            ApiBase::Admin => self.endpoints.admin_base(),
        };
        format!("{}/{}", base, path)
    }

    /// Exchange a Google OAuth access token for session data
    ///
    /// The only unauthenticated operation; the returned token authorizes
    /// every other call.
    pub fn login_with_google(&self, access_token: &str) -> Result<SessionData> {
        let url = self.url(ApiBase::User, "userLogin");

        let mut response = ureq::post(&url)
            .send_json(&LoginRequest {
                token_response: TokenResponse { access_token },
            })
            .context("Failed to send login request")?;

        let session: SessionData = response
            .body_mut()
            .read_json()
            .context("Failed to parse login response")?;

        Ok(session)
    }

    /// Register a new user (admin only)
    ///
    /// The record is validated locally before the request is sent.
    pub fn register_user(&self, user: &NewUser, token: &str) -> Result<()> {
        user.validate()?;

        let url = self.url(ApiBase::Admin, "registerUser");

        ureq::post(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send_json(user)
            .context("Failed to send register user request")?;

        Ok(())
    }

    /// Raise a new query
    ///
    /// Returns the created record so the caller can feed it to the store.
    pub fn create_query(&self, subject: &str, message: &str, token: &str) -> Result<Query> {
        let url = self.url(ApiBase::User, "userRaiseQuery");

        let mut response = ureq::post(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send_json(serde_json::json!({
                "subject": subject,
                "message": message,
            }))
            .context("Failed to send raise query request")?;

        let query: Query = response
            .body_mut()
            .read_json()
            .context("Failed to parse raised query response")?;

        Ok(query)
    }

    /// Fetch the caller's own queries
    pub fn fetch_queries(&self, token: &str) -> Result<Vec<Query>> {
        let url = self.url(ApiBase::User, "userViewMyQueries");

        let mut response = ureq::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .call()
            .context("Failed to send view queries request")?;

        let queries: Vec<Query> = response
            .body_mut()
            .read_json()
            .context("Failed to parse queries response")?;

        Ok(queries)
    }

    /// Fetch all raised queries (admin only)
    pub fn admin_fetch_queries(&self, token: &str) -> Result<Vec<Query>> {
        let url = self.url(ApiBase::Admin, "adminViewRaisedQueries");

        let mut response = ureq::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .call()
            .context("Failed to send view raised queries request")?;

        let queries: Vec<Query> = response
            .body_mut()
            .read_json()
            .context("Failed to parse raised queries response")?;

        Ok(queries)
    }

    /// Post a message to a query's conversation
    ///
    /// Support admins post through the admin response endpoint, everyone
    /// else through the user comment endpoint. Returns the message as the
    /// server recorded it, ready for a conversation append.
    ///
    /// # Errors
    /// Every failure surfaces as [`SendMessageError`].
    pub fn send_message(
        &self,
        query_id: &QueryId,
        message: &str,
        token: &str,
        role: &Role,
    ) -> Result<ConversationMessage, SendMessageError> {
        self.send_message_inner(query_id, message, token, role)
            .map_err(|source| SendMessageError { source })
    }

    fn send_message_inner(
        &self,
        query_id: &QueryId,
        message: &str,
        token: &str,
        role: &Role,
    ) -> Result<ConversationMessage> {
        let (base, path) = routes::comment_route(role);
        let url = format!(
            "{}/{}",
            self.url(base, path),
            urlencoding::encode(query_id.as_str())
        );
        debug!("Posting message for query {} via {}", query_id.as_str(), path);

        let mut response = ureq::post(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send_json(serde_json::json!({ "message": message }))?;

        let recorded: ConversationMessage = response.body_mut().read_json()?;
        Ok(recorded)
    }

    /// Change a query's status
    ///
    /// Admins manage statuses through the admin endpoint, everyone else
    /// through the user endpoint. The new status is part of the path and
    /// the query owner's email travels in the body.
    ///
    /// # Errors
    /// Every failure surfaces as [`SendMessageError`].
    pub fn manage_query_status(
        &self,
        query_id: &QueryId,
        user_email: &str,
        token: &str,
        role: &Role,
        new_status: &str,
    ) -> Result<(), SendMessageError> {
        self.manage_query_status_inner(query_id, user_email, token, role, new_status)
            .map_err(|source| SendMessageError { source })
    }

    fn manage_query_status_inner(
        &self,
        query_id: &QueryId,
        user_email: &str,
        token: &str,
        role: &Role,
        new_status: &str,
    ) -> Result<()> {
        let (base, path) = routes::status_route(role);
        let url = format!(
            "{}/{}/{}",
            self.url(base, path),
            urlencoding::encode(query_id.as_str()),
            urlencoding::encode(new_status)
        );
        debug!(
            "Setting status {} for query {} via {}",
            new_status,
            query_id.as_str(),
            path
        );

        ureq::post(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send_json(serde_json::json!({ "userEmail": user_email }))?;

        Ok(())
    }

    /// Fetch a single query by id
    ///
    /// Support admins read through the admin endpoint, everyone else
    /// through the user endpoint.
    pub fn fetch_query_by_id(
        &self,
        query_id: &QueryId,
        token: &str,
        role: &Role,
    ) -> Result<Query> {
        let (base, path) = routes::query_data_route(role);
        let url = format!(
            "{}/{}",
            self.url(base, path),
            urlencoding::encode(query_id.as_str())
        );

        let mut response = ureq::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .call()
            .context("Failed to send get query request")?;

        let query: Query = response
            .body_mut()
            .read_json()
            .context("Failed to parse query response")?;

        Ok(query)
    }

    /// List registered users (admin only)
    ///
    /// Malformed entries in the server's list are logged and skipped.
    pub fn admin_get_user_list(&self, token: &str) -> Result<Vec<ManagedUser>> {
        let url = self.url(ApiBase::Admin, "adminViewUserList");

        let mut response = ureq::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .call()
            .context("Failed to send user list request")?;

        let list: UserListResponse = response
            .body_mut()
            .read_json()
            .context("Failed to parse user list response")?;

        Ok(normalize_user_list(list.user_list))
    }

    /// Toggle a user's active status (admin only)
    ///
    /// # Errors
    /// Returns [`StatusUpdateForbiddenError`] when the server answers 403;
    /// admin accounts cannot be deactivated. Other failures propagate
    /// unmodified.
    pub fn admin_update_student_status(
        &self,
        email: &str,
        role: &Role,
        new_status: bool,
        token: &str,
    ) -> Result<()> {
        let url = self.url(ApiBase::Admin, "adminManageStudentStatus");

        let response = ureq::post(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send_json(serde_json::json!({
                "email": email,
                "role": role,
                "status": new_status,
            }));

        match response {
            Ok(_) => Ok(()),
            Err(ureq::Error::StatusCode(403)) => Err(StatusUpdateForbiddenError.into()),
            Err(e) => Err(anyhow::anyhow!("Failed to update user status: {}", e)),
        }
    }
}
