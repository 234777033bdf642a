pub mod raw_user;
pub mod stored_user_record;
pub mod user_record;
