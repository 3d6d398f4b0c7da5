//! Support-desk API integration
//!
//! This module provides:
//! - The HTTP client wrapping the remote support-desk API
//! - Role-based endpoint selection
//! - Validation of the user-management list at the API boundary

mod http;
mod normalize;
mod routes;

pub use http::{HelpdeskClient, SendMessageError, StatusUpdateForbiddenError};
pub use normalize::normalize_user_list;

/// Support-desk API wire types
pub mod api {
    use serde::{Deserialize, Serialize};

    use crate::models::Role;

    /// Session data returned by a successful login
    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SessionData {
        /// Bearer token for subsequent authorized calls
        pub token: String,
        /// Display name of the signed-in user
        pub name: String,
        pub email: String,
        pub role: Role,
    }

    /// Body of the login request
    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub(crate) struct LoginRequest<'a> {
        pub token_response: TokenResponse<'a>,
    }

    /// OAuth access token wrapper, as the login endpoint expects it
    #[derive(Debug, Serialize)]
    pub(crate) struct TokenResponse<'a> {
        pub access_token: &'a str,
    }

    /// Response from the admin user-list endpoint
    ///
    /// Entries are kept untyped here and validated into
    /// [`ManagedUser`](crate::models::ManagedUser) at the boundary.
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UserListResponse {
        pub user_list: Vec<serde_json::Value>,
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_session_data_wire_format() {
            let json = r#"{
                "token": "abc123",
                "name": "Jane",
                "email": "jane@example.com",
                "role": "SupportAdmin"
            }"#;

            let session: SessionData = serde_json::from_str(json).unwrap();
            assert_eq!(session.token, "abc123");
            assert_eq!(session.role, Role::SupportAdmin);
        }

        #[test]
        fn test_login_request_shape() {
            let request = LoginRequest {
                token_response: TokenResponse {
                    access_token: "ya29.token",
                },
            };

            let json = serde_json::to_value(&request).unwrap();
            assert_eq!(json["tokenResponse"]["access_token"], "ya29.token");
        }
    }
}
