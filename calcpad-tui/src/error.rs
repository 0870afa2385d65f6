//! Error types for calcpad-tui
//!
//! Wraps calculator-core errors (configuration) and terminal/IO errors for
//! unified error handling in the binary.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Calculator core error (configuration, logging setup)
    #[error("{0}")]
    Calcpad(#[from] libcalcpad::CalcpadError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl TuiError {
    /// Process exit code, matching the other calcpad binaries
    pub fn exit_code(&self) -> i32 {
        match self {
            TuiError::Calcpad(e) => e.exit_code(),
            TuiError::Terminal(_) => 1,
        }
    }
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
