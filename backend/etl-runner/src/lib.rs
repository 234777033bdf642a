pub mod error;
pub mod logger;
pub mod pipeline;
pub mod scheduler;


pub use error::{Result as RunnerResult, RunnerError};
pub use pipeline::Pipeline;
pub use scheduler::Scheduler;
