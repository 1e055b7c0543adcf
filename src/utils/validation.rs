use crate::utils::error::{DemoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("text", "hello").is_ok());
        assert!(validate_non_empty_string("text", "").is_err());
        assert!(validate_non_empty_string("text", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("delay_ms", 1000u64, 1, 600_000).is_ok());
        assert!(validate_range("delay_ms", 0u64, 1, 600_000).is_err());
        assert!(validate_range("delay_ms", 700_000u64, 1, 600_000).is_err());
    }

    #[test]
    fn test_range_error_mentions_field() {
        let err = validate_range("delay_ms", 0u64, 1, 600_000).unwrap_err();
        assert!(err.to_string().contains("delay_ms"));
    }
}
