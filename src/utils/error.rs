use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("negative number not allowed: {value}")]
    NegativeNumberError { value: f64 },

    #[error("no day with index {index}, expected 0-6")]
    UnknownDayError { index: u8 },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DemoError>;
