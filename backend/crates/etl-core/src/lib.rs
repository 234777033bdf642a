pub mod models;
pub mod transform;

#[cfg(test)]
mod tests;

pub use error_location::ErrorLocation;
pub use models::raw_user::RawUser;
pub use models::stored_user_record::StoredUserRecord;
pub use models::user_record::UserRecord;
pub use transform::transform;
