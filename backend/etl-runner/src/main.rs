//! user-etl
//!
//! Pulls users from the source API every interval and upserts them into the
//! local `api_data.db` store until the process is stopped.

use etl_config::{Config, SOURCE_URL};
use etl_runner::{Pipeline, Scheduler, logger};
use etl_source::SourceClient;

use std::error::Error;

use log::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting user-etl v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pipeline = Pipeline::new(SourceClient::new(SOURCE_URL), config.database_path()?);
    let scheduler = Scheduler::new(config.scheduler.interval());

    info!("Store: {}", pipeline.database_path().display());

    tokio::select! {
        result = scheduler.run(async || pipeline.run_once().await) => match result {
            Ok(never) => match never {},
            Err(e) => {
                error!("ETL pipeline failed, stopping: {}", e);
                Err(e.into())
            }
        },
        Ok(()) = tokio::signal::ctrl_c() => {
            info!("Received SIGINT (Ctrl+C), stopping");
            Ok(())
        }
    }
}
