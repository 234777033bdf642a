use crate::RawUser;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A source user reshaped to the fixed `user_data` schema.
///
/// Every text field is always present; fields missing from the source are
/// stored as empty strings, never NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Upsert key: 1-based position in the source response
    pub id: i64,

    pub name: String,
    pub email: String,
    pub username: String,
    pub phone: String,
    pub website: String,
}

impl UserRecord {
    /// Build a record from a raw source object.
    ///
    /// `ordinal` is the 1-based position of the object in the source response
    /// and is always the key. A source `id` field is ignored like any other
    /// unknown field, so two objects in one response never share a key.
    pub fn from_raw(raw: &RawUser, ordinal: i64) -> Self {
        Self {
            id: ordinal,
            name: text_field(raw, "name"),
            email: text_field(raw, "email"),
            username: text_field(raw, "username"),
            phone: text_field(raw, "phone"),
            website: text_field(raw, "website"),
        }
    }
}

/// Read a field as text: strings as-is, null/missing as "", anything else as compact JSON.
fn text_field(raw: &RawUser, key: &str) -> String {
    match raw.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
