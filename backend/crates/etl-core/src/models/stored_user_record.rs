use crate::UserRecord;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A `user_data` row as read back from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUserRecord {
    pub id: i64,

    pub name: String,
    pub email: String,
    pub username: String,
    pub phone: String,
    pub website: String,

    // Set by the store on first insert, untouched by later upserts
    pub timestamp: NaiveDateTime,
}

impl StoredUserRecord {
    /// Drop the store-assigned timestamp.
    pub fn into_record(self) -> UserRecord {
        UserRecord {
            id: self.id,
            name: self.name,
            email: self.email,
            username: self.username,
            phone: self.phone,
            website: self.website,
        }
    }
}
