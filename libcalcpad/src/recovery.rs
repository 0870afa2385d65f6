//! Error recovery policy
//!
//! An error flash ends with an automatic clear-all after a fixed delay. The
//! calculator never owns a timer: it hands out a `RecoveryTicket` when an
//! error is shown and the front end calls `Calculator::recover` with that
//! ticket once the delay has elapsed.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay between showing an error and the automatic clear-all.
pub const DEFAULT_RECOVERY_DELAY: Duration = Duration::from_millis(2000);

/// Identifies one scheduled recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecoveryTicket(pub(crate) u64);

impl RecoveryTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecoveryTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "recovery#{}", self.0)
    }
}

/// What happens to a pending recovery when the user keeps typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryPolicy {
    /// Any input cancels the pending recovery and dismisses the error.
    #[default]
    CancelOnInput,

    /// The recovery always fires, even mid-interaction.
    FireAnyway,
}

impl FromStr for RecoveryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cancel-on-input" => Ok(RecoveryPolicy::CancelOnInput),
            "fire-anyway" => Ok(RecoveryPolicy::FireAnyway),
            _ => Err(format!(
                "Invalid recovery policy: '{}'. Valid options: cancel-on-input, fire-anyway",
                s
            )),
        }
    }
}

impl fmt::Display for RecoveryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryPolicy::CancelOnInput => write!(f, "cancel-on-input"),
            RecoveryPolicy::FireAnyway => write!(f, "fire-anyway"),
        }
    }
}
