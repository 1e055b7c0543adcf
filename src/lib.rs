pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::runner::TaskRunner;
pub use crate::core::task::{square_async, SquareTask};
pub use domain::model::{Car, Day, DayType, Product, RatedRecord, Value, Vehicle};
pub use domain::ports::{DelayedTask, Describe, TaskConfig};
pub use utils::error::{DemoError, Result};
