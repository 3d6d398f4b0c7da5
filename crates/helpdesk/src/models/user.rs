//! User records exchanged with the admin API

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use super::Role;

/// Registration data for a new support-desk user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub role: Role,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        contact_number: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            contact_number: contact_number.into(),
            role,
        }
    }

    /// Validate the record before it is sent to the registration endpoint
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("Name is required");
        }
        if self.email.trim().is_empty() {
            bail!("Email is required");
        }
        if self.contact_number.trim().is_empty() {
            bail!("Contact number is required");
        }
        Ok(())
    }
}

/// One validated entry of the admin user-management list
///
/// The server returns loosely shaped records here; entries that fail to
/// deserialize into this type are quarantined at the API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub contact_number: Option<String>,
    pub role: Role,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_complete_record() {
        let user = NewUser::new("Jane Doe", "jane@example.com", "0123456789", Role::Counsellor);
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let blank_name = NewUser::new("  ", "jane@example.com", "0123456789", Role::Student);
        assert!(blank_name.validate().is_err());

        let blank_email = NewUser::new("Jane", "", "0123456789", Role::Student);
        assert!(blank_email.validate().is_err());

        let blank_contact = NewUser::new("Jane", "jane@example.com", " ", Role::Student);
        assert!(blank_contact.validate().is_err());
    }

    #[test]
    fn test_new_user_wire_format() {
        let user = NewUser::new("Jane", "jane@example.com", "0123456789", Role::Admin);
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["name"], "Jane");
        assert_eq!(json["contactNumber"], "0123456789");
        assert_eq!(json["role"], "Admin");
    }

    #[test]
    fn test_managed_user_optional_contact() {
        let json = r#"{
            "name": "Sam",
            "email": "sam@example.com",
            "role": "Student",
            "isActive": true
        }"#;

        let user: ManagedUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.contact_number, None);
        assert!(user.is_active);
    }
}
