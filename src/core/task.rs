use crate::domain::ports::DelayedTask;
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Squares `value` after the default delay. Negative input fails before the
/// suspension point, so rejection is immediate.
pub async fn square_async(value: f64) -> Result<f64> {
    square_after(value, DEFAULT_DELAY).await
}

pub async fn square_after(value: f64, delay: Duration) -> Result<f64> {
    if value < 0.0 {
        return Err(DemoError::NegativeNumberError { value });
    }
    tracing::debug!("squaring {} after {:?}", value, delay);
    sleep(delay).await;
    Ok(value * value)
}

/// The delayed squaring operation as a reusable task.
pub struct SquareTask {
    value: f64,
    delay: Duration,
}

impl SquareTask {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_delay(value: f64, delay: Duration) -> Self {
        Self { value, delay }
    }
}

#[async_trait]
impl DelayedTask for SquareTask {
    type Output = f64;

    async fn run(&self) -> Result<f64> {
        square_after(self.value, self.delay).await
    }
}
