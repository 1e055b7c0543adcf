use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Capability for anything that can describe itself with a formatted summary.
pub trait Describe {
    fn info(&self) -> String;
}

/// A unit of asynchronous work that suspends before completing with success or failure.
#[async_trait]
pub trait DelayedTask: Send + Sync {
    type Output;

    async fn run(&self) -> Result<Self::Output>;
}

pub trait TaskConfig: Send + Sync {
    fn task_value(&self) -> f64;
    fn task_delay(&self) -> Duration;
}
