//! etl-source
//!
//! Extract stage: fetches raw user objects from the source API.

pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod user_source;


pub use client::SourceClient;
pub use error::{Result as SourceResult, SourceError};
pub use user_source::UserSource;
