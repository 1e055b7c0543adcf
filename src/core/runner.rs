use crate::domain::ports::DelayedTask;
use crate::utils::error::Result;
use std::fmt::Debug;
use std::time::Instant;

/// Drives a single `DelayedTask`, logging around its lifecycle.
pub struct TaskRunner<T: DelayedTask> {
    task: T,
}

impl<T: DelayedTask> TaskRunner<T> {
    pub fn new(task: T) -> Self {
        Self { task }
    }

    pub async fn run(&self) -> Result<T::Output>
    where
        T::Output: Debug,
    {
        tracing::info!("Starting task...");
        let started = Instant::now();

        match self.task.run().await {
            Ok(output) => {
                tracing::info!("Task completed in {:?}: {:?}", started.elapsed(), output);
                Ok(output)
            }
            Err(e) => {
                tracing::error!("Task failed after {:?}: {}", started.elapsed(), e);
                Err(e)
            }
        }
    }
}
