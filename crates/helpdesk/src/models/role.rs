//! Role model for support-desk users

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role attached to a session or user record
///
/// The server owns the role vocabulary. The known roles get variants;
/// any other string round-trips through `Other` unchanged, so an
/// unrecognized role never fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Responds to queries through the admin endpoints
    SupportAdmin,
    /// Manages users and query statuses
    Admin,
    Counsellor,
    Student,
    /// A role string this client does not know about
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::SupportAdmin => "SupportAdmin",
            Role::Admin => "Admin",
            Role::Counsellor => "Counsellor",
            Role::Student => "Student",
            Role::Other(s) => s,
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "SupportAdmin" => Role::SupportAdmin,
            "Admin" => Role::Admin,
            "Counsellor" => Role::Counsellor,
            "Student" => Role::Student,
            other => Role::Other(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::from(s.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
