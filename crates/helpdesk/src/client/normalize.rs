//! User-list response validation
//!
//! The admin user-list endpoint returns loosely shaped records. Entries
//! are validated into [`ManagedUser`] here; malformed ones are logged and
//! dropped so untyped data never crosses the API boundary.

use log::warn;
use serde_json::Value;

use crate::models::ManagedUser;

/// Validate raw user-list entries, quarantining malformed records
pub fn normalize_user_list(entries: Vec<Value>) -> Vec<ManagedUser> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Dropping malformed user-list entry {}: {}", index, e);
                None
            }
        })
        .collect()
}
