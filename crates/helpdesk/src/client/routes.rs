//! Role-based endpoint selection
//!
//! The support-desk API exposes parallel admin and user route families.
//! Which family an operation targets depends on the caller's role; the
//! mapping lives here so the branching cannot drift between call sites.

use crate::models::Role;

/// API base a request is issued against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ApiBase {
    User,
    Admin,
}

/// Route for posting a message to a query's conversation
///
/// Support admins respond through the admin endpoint; every other role
/// comments through the user endpoint.
pub(crate) fn comment_route(role: &Role) -> (ApiBase, &'static str) {
    match role {
        Role::SupportAdmin => (ApiBase::Admin, "adminAddResponseToQuery"),
        _ => (ApiBase::User, "userAddCommentToQuery"),
    }
}

/// Route for changing a query's status
///
/// Admins manage statuses through the admin endpoint; every other role
/// through the user endpoint.
pub(crate) fn status_route(role: &Role) -> (ApiBase, &'static str) {
    match role {
        Role::Admin => (ApiBase::Admin, "adminManageQueryStatus"),
        _ => (ApiBase::User, "userManageQueryStatus"),
    }
}

/// Route for fetching a single query
pub(crate) fn query_data_route(role: &Role) -> (ApiBase, &'static str) {
    match role {
        Role::SupportAdmin => (ApiBase::Admin, "adminGetQueryData"),
        _ => (ApiBase::User, "userGetQueryData"),
    }
}
