use crate::domain::ports::TaskConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "snippet-lab")]
#[command(about = "Runs a showcase of small standalone operations")]
pub struct CliConfig {
    #[arg(long, default_value = "Hello, Snippet Lab")]
    pub text: String,

    #[arg(long, help = "Upper-case the formatted text instead of lower-casing it")]
    pub uppercase: bool,

    #[arg(long, default_value = "4.0", help = "Number fed to the delayed squaring task")]
    pub value: f64,

    #[arg(long, default_value = "1000")]
    pub delay_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("text", &self.text)?;
        validate_range("delay_ms", self.delay_ms, 1, 600_000)?;
        Ok(())
    }
}

impl TaskConfig for CliConfig {
    fn task_value(&self) -> f64 {
        self.value
    }

    fn task_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CliConfig::parse_from(["snippet-lab"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.task_delay(), Duration::from_millis(1000));
        assert_eq!(config.task_value(), 4.0);
    }

    #[test]
    fn test_zero_delay_rejected() {
        let config = CliConfig::parse_from(["snippet-lab", "--delay-ms", "0"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_text_rejected() {
        let config = CliConfig::parse_from(["snippet-lab", "--text", "  "]);
        assert!(config.validate().is_err());
    }
}
