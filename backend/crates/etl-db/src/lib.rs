pub mod connection;
pub mod error;
pub mod loader;
pub mod repositories;

pub use connection::store_connection::open_store;
pub use error::{DbError, Result};
pub use loader::Loader;
pub use repositories::user_record_repository::UserRecordRepository;
