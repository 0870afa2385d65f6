//! Error types for Calcpad
//!
//! Two families live here. `Fault` is a calculator error that the state
//! machine handles itself by flashing a message and recovering. It never
//! reaches a caller as an `Err`. `CalcpadError` is an application error
//! (bad config, unparseable key script) that binaries report and exit on.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcpadError>;

#[derive(Error, Debug)]
pub enum CalcpadError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CalcpadError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CalcpadError::InvalidInput(_) => 3,
            CalcpadError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Recoverable calculator faults, surfaced as a display message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    #[error("Cannot divide by zero")]
    DivideByZero,

    #[error("Invalid operation")]
    InvalidResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = CalcpadError::InvalidInput("unknown key 'z'".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_config_error() {
        let config_error = ConfigError::MissingField("config directory".to_string());
        let error = CalcpadError::Config(config_error);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_invalid_input() {
        let error = CalcpadError::InvalidInput("unknown key 'z' at position 3".to_string());
        assert_eq!(
            format!("{}", error),
            "Invalid input: unknown key 'z' at position 3"
        );
    }

    #[test]
    fn test_error_message_formatting_invalid_value() {
        let error = CalcpadError::Config(ConfigError::InvalidValue {
            field: "recovery.delay_ms".to_string(),
            reason: "must be greater than zero".to_string(),
        });
        assert_eq!(
            format!("{}", error),
            "Configuration error: Invalid value for recovery.delay_ms: must be greater than zero"
        );
    }

    #[test]
    fn test_fault_messages() {
        assert_eq!(Fault::DivideByZero.to_string(), "Cannot divide by zero");
        assert_eq!(Fault::InvalidResult.to_string(), "Invalid operation");
    }

    #[test]
    fn test_error_conversion_from_config_error() {
        let config_error = ConfigError::MissingField("test".to_string());
        let calcpad_error: CalcpadError = config_error.into();

        match calcpad_error {
            CalcpadError::Config(_) => {}
            _ => panic!("Expected CalcpadError::Config"),
        }
    }
}
