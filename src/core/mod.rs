pub mod calendar;
pub mod catalog;
pub mod dispatch;
pub mod runner;
pub mod sequence;
pub mod task;
pub mod text;

pub use crate::domain::model::{Car, Day, DayType, Product, RatedRecord, Value, Vehicle};
pub use crate::domain::ports::{DelayedTask, Describe, TaskConfig};
pub use crate::utils::error::Result;
