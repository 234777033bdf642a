#![allow(dead_code)]

use etl_core::UserRecord;

/// Creates a test UserRecord with every field filled
pub fn create_test_user_record(id: i64) -> UserRecord {
    UserRecord {
        id,
        name: format!("User {}", id),
        email: format!("user{}@example.com", id),
        username: format!("user{}", id),
        phone: "555-0100".to_string(),
        website: "example.com".to_string(),
    }
}

/// Creates a UserRecord with only a name; every other field is empty
pub fn create_sparse_user_record(id: i64, name: &str) -> UserRecord {
    UserRecord {
        id,
        name: name.to_string(),
        email: String::new(),
        username: String::new(),
        phone: String::new(),
        website: String::new(),
    }
}
