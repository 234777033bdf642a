use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Config error: {0}")]
    Config(#[from] etl_config::ConfigError),

    #[error("Extract failed: {0}")]
    Source(#[from] etl_source::SourceError),

    #[error("Load failed: {0}")]
    Db(#[from] etl_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to create log directory {path}: {source}")]
    LogDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RunnerError>;
