use std::convert::Infallible;
use std::time::Duration;

use log::info;

/// Runs a tick handler, waits a fixed duration, and repeats.
///
/// There is no fault boundary: the first failing tick ends the loop and its
/// error is handed back to the caller. A slow tick pushes the next one back by
/// its own duration; ticks never overlap.
pub struct Scheduler {
    wait: Duration,
}

impl Scheduler {
    pub fn new(wait: Duration) -> Self {
        Self { wait }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Loop until a tick fails.
    pub async fn run<F, T, E>(&self, mut tick: F) -> Result<Infallible, E>
    where
        F: AsyncFnMut() -> Result<T, E>,
    {
        loop {
            tick().await?;
            self.pause().await;
        }
    }

    /// Same loop, bounded to `ticks` runs. No wait after the last one.
    pub async fn run_ticks<F, T, E>(&self, ticks: usize, mut tick: F) -> Result<Vec<T>, E>
    where
        F: AsyncFnMut() -> Result<T, E>,
    {
        let mut results = Vec::with_capacity(ticks);

        for n in 1..=ticks {
            results.push(tick().await?);
            if n < ticks {
                self.pause().await;
            }
        }

        Ok(results)
    }

    async fn pause(&self) {
        info!(
            "Waiting {} before next run...",
            humantime::format_duration(self.wait)
        );
        tokio::time::sleep(self.wait).await;
    }
}
