//! Recovery timers for the TUI
//!
//! Bridges the calculator's recovery tickets to real time. Each ticket gets a
//! one-shot tokio task that sleeps for the recovery delay and then sends the
//! ticket over a crossbeam channel, which the synchronous event loop drains
//! on every iteration. Cancelling a ticket aborts its task.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use calcpad_tui::recovery::RecoveryScheduler;
//! use libcalcpad::Calculator;
//!
//! # fn example() -> calcpad_tui::Result<()> {
//! let mut calc = Calculator::new();
//! let mut timers = RecoveryScheduler::new(Duration::from_secs(2))?;
//!
//! // After every dispatch, line the timers up with the calculator
//! timers.sync(calc.pending_recoveries());
//!
//! // Later, in the event loop
//! for ticket in timers.drain() {
//!     calc.recover(ticket);
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crossbeam_channel::{unbounded, Receiver, Sender};
use libcalcpad::RecoveryTicket;
use std::collections::HashMap;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Owns the timer runtime and one task per outstanding ticket
pub struct RecoveryScheduler {
    runtime: tokio::runtime::Runtime,
    delay: Duration,
    tx: Sender<RecoveryTicket>,
    rx: Receiver<RecoveryTicket>,
    timers: HashMap<RecoveryTicket, JoinHandle<()>>,
}

impl RecoveryScheduler {
    /// Create a scheduler whose timers fire after `delay`
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new(delay: Duration) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("calcpad-timers")
            .enable_time()
            .build()?;

        let (tx, rx) = unbounded();

        Ok(Self {
            runtime,
            delay,
            tx,
            rx,
            timers: HashMap::new(),
        })
    }

    /// Start the timer for `ticket` unless one is already running
    pub fn schedule(&mut self, ticket: RecoveryTicket) {
        if self.timers.contains_key(&ticket) {
            return;
        }

        let tx = self.tx.clone();
        let delay = self.delay;
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // The loop may already be gone during shutdown
            let _ = tx.send(ticket);
        });

        tracing::debug!(%ticket, ?delay, "recovery scheduled");
        self.timers.insert(ticket, handle);
    }

    /// Abort the timer for `ticket`; returns false if none was running
    pub fn cancel(&mut self, ticket: RecoveryTicket) -> bool {
        match self.timers.remove(&ticket) {
            Some(handle) => {
                handle.abort();
                tracing::debug!(%ticket, "recovery cancelled");
                true
            }
            None => false,
        }
    }

    /// Match running timers to the calculator's outstanding tickets
    ///
    /// New tickets get a timer. Timers whose ticket is no longer outstanding
    /// (fired, or cancelled by input) are aborted.
    pub fn sync(&mut self, outstanding: &[RecoveryTicket]) {
        let stale: Vec<RecoveryTicket> = self
            .timers
            .keys()
            .filter(|ticket| !outstanding.contains(ticket))
            .copied()
            .collect();
        for ticket in stale {
            self.cancel(ticket);
        }

        for ticket in outstanding {
            self.schedule(*ticket);
        }
    }

    /// Tickets whose delay has elapsed since the last call
    pub fn drain(&self) -> Vec<RecoveryTicket> {
        self.rx.try_iter().collect()
    }

    /// Block until a ticket fires or `timeout` passes
    pub fn wait(&self, timeout: Duration) -> Option<RecoveryTicket> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Number of timers currently running
    pub fn pending(&self) -> usize {
        self.timers.len()
    }
}

impl Drop for RecoveryScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }
}
