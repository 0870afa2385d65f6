//! Calcpad - a four-function calculator core
//!
//! This library holds the calculator state machine and everything around it
//! that does not depend on a particular front end: input mapping, display
//! formatting, the recovery policy, configuration and logging setup.

pub mod calculator;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod logging;
pub mod recovery;

// Re-export commonly used types
pub use calculator::{Calculator, Phase, Snapshot};
pub use config::Config;
pub use error::{CalcpadError, ConfigError, Fault, Result};
pub use input::{Digit, InputEvent, Operator};
pub use recovery::{RecoveryPolicy, RecoveryTicket};
