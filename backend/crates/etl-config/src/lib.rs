mod config;
mod error;
mod log_level;
mod logging_config;
mod scheduler_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use scheduler_config::SchedulerConfig;

/// Endpoint the extractor reads users from.
pub const SOURCE_URL: &str = "https://jsonplaceholder.typicode.com/users";
/// Store file, relative to the working directory.
pub const DATABASE_FILENAME: &str = "api_data.db";

const CONFIG_DIR_ENV: &str = "ETL_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".etl";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
