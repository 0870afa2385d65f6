//! Calculator state machine
//!
//! One `Calculator` value holds the whole session: the entry being typed, the
//! operand and operator captured when an operator key was pressed, the reset
//! flag, and any error being flashed. Every input runs to completion
//! synchronously. The only time-driven transition is the automatic clear-all
//! after an error, driven from outside through [`Calculator::recover`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::Fault;
use crate::format::{format_number, parse_operand, render_entry, round_result, MAX_ENTRY_LEN};
use crate::input::{Digit, InputEvent, Operator};
use crate::recovery::{RecoveryPolicy, RecoveryTicket};

/// Coarse state, mostly useful to front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Building the current entry (or showing a result)
    Entering,
    /// Operator chosen, waiting for the next operand
    OperatorSelected,
    /// Flashing an error
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ErrorFlash {
    fault: Fault,
    message_visible: bool,
}

#[derive(Debug, Clone)]
pub struct Calculator {
    current: String,
    pending_operand: String,
    pending_operator: Option<Operator>,
    reset_next: bool,
    error: Option<ErrorFlash>,
    recoveries: Vec<RecoveryTicket>,
    next_ticket: u64,
    policy: RecoveryPolicy,
}

/// Rendering view of the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub display: String,
    pub entry: String,
    pub pending_operand: String,
    pub pending_operator: Option<Operator>,
    pub error: bool,
    /// The fault message, while it is the one on screen
    pub error_message: Option<String>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::with_policy(RecoveryPolicy::default())
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RecoveryPolicy) -> Self {
        Self {
            current: "0".to_string(),
            pending_operand: String::new(),
            pending_operator: None,
            reset_next: false,
            error: None,
            recoveries: Vec::new(),
            next_ticket: 0,
            policy,
        }
    }

    // === Observers ===

    pub fn current_entry(&self) -> &str {
        &self.current
    }

    pub fn pending_operand(&self) -> &str {
        &self.pending_operand
    }

    /// The operator to highlight, if any
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// True when the next digit starts a fresh number
    pub fn awaiting_operand(&self) -> bool {
        self.reset_next
    }

    pub fn fault(&self) -> Option<Fault> {
        self.error.map(|e| e.fault)
    }

    /// The error flag used for error styling
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn policy(&self) -> RecoveryPolicy {
        self.policy
    }

    /// Recoveries that have been issued but not yet fired or cancelled
    pub fn pending_recoveries(&self) -> &[RecoveryTicket] {
        &self.recoveries
    }

    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::Error
        } else if self.pending_operator.is_some() && self.reset_next {
            Phase::OperatorSelected
        } else {
            Phase::Entering
        }
    }

    /// The string the display shows right now.
    pub fn display(&self) -> String {
        match self.error {
            Some(ErrorFlash {
                fault,
                message_visible: true,
            }) => fault.to_string(),
            _ => render_entry(&self.current),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display(),
            entry: self.current.clone(),
            pending_operand: self.pending_operand.clone(),
            pending_operator: self.pending_operator,
            error: self.error.is_some(),
            error_message: self
                .error
                .filter(|e| e.message_visible)
                .map(|e| e.fault.to_string()),
        }
    }

    // === Input ===

    /// Route one discrete press to its operation.
    pub fn apply(&mut self, event: InputEvent) {
        trace!(?event, "input");
        match event {
            InputEvent::Digit(d) => self.append_digit(d),
            InputEvent::Decimal => self.append_decimal(),
            InputEvent::Operator(op) => self.set_operator(op),
            InputEvent::Equals => self.calculate(),
            InputEvent::ClearAll => self.clear_all(),
            InputEvent::ClearEntry => self.clear_entry(),
            InputEvent::Backspace => self.delete_last(),
        }
    }

    pub fn append_digit(&mut self, digit: Digit) {
        self.begin_input();

        if self.reset_next {
            self.current = "0".to_string();
            self.reset_next = false;
        }

        if self.current == "0" {
            self.current = digit.as_char().to_string();
        } else if self.current.len() < MAX_ENTRY_LEN {
            self.current.push(digit.as_char());
        }

        self.hide_error_message();
    }

    pub fn append_decimal(&mut self) {
        self.begin_input();

        if self.reset_next {
            self.current = "0.".to_string();
            self.reset_next = false;
        } else if !self.current.contains('.') {
            self.current.push('.');
        }

        self.hide_error_message();
    }

    /// Select an operator, resolving a chained operation first.
    ///
    /// Re-selecting before an operand has been typed only swaps the operator.
    pub fn set_operator(&mut self, op: Operator) {
        self.begin_input();

        if self.pending_operator.is_some() && !self.reset_next {
            self.evaluate_pending();
        }

        debug!(operator = %op, operand = %self.current, "operator selected");
        self.pending_operator = Some(op);
        self.pending_operand = self.current.clone();
        self.reset_next = true;
    }

    /// Evaluate the pending operation (the `=` key).
    pub fn calculate(&mut self) {
        self.begin_input();
        self.evaluate_pending();
    }

    pub fn clear_all(&mut self) {
        self.begin_input();
        self.reset();
    }

    /// Reset only the current entry.
    pub fn clear_entry(&mut self) {
        self.begin_input();
        self.current = "0".to_string();
        self.error = None;
    }

    pub fn delete_last(&mut self) {
        self.begin_input();
        self.current.pop();
        if self.current.is_empty() {
            self.current = "0".to_string();
        }
        self.error = None;
    }

    // === Errors and recovery ===

    /// Flash an error and issue the ticket for its automatic recovery.
    pub fn show_error(&mut self, fault: Fault) -> RecoveryTicket {
        let ticket = RecoveryTicket(self.next_ticket);
        self.next_ticket += 1;

        debug!(%fault, %ticket, "showing error");
        self.error = Some(ErrorFlash {
            fault,
            message_visible: true,
        });
        self.recoveries.push(ticket);
        ticket
    }

    /// Run the automatic clear-all for `ticket`.
    ///
    /// Returns false and changes nothing when the ticket was already
    /// cancelled or fired.
    pub fn recover(&mut self, ticket: RecoveryTicket) -> bool {
        let Some(pos) = self.recoveries.iter().position(|t| *t == ticket) else {
            trace!(%ticket, "ignoring stale recovery");
            return false;
        };

        self.recoveries.remove(pos);
        debug!(%ticket, "recovering");
        self.reset();
        true
    }

    /// Fire every outstanding recovery, as if their delays had elapsed.
    pub fn settle(&mut self) {
        for ticket in self.recoveries.clone() {
            self.recover(ticket);
        }
    }

    // === Internals ===

    fn evaluate_pending(&mut self) {
        let Some(op) = self.pending_operator else {
            return;
        };
        if self.reset_next {
            return;
        }

        let lhs = parse_operand(&self.pending_operand);
        let rhs = parse_operand(&self.current);

        match evaluate(op, lhs, rhs) {
            Ok(result) => {
                debug!(operator = %op, lhs, rhs, result, "calculated");
                self.current = format_number(result);
                self.pending_operator = None;
                self.pending_operand.clear();
                self.reset_next = true;
                self.hide_error_message();
            }
            Err(fault) => {
                self.show_error(fault);
            }
        }
    }

    /// Apply the recovery policy ahead of a user input.
    fn begin_input(&mut self) {
        if self.policy == RecoveryPolicy::CancelOnInput {
            if !self.recoveries.is_empty() {
                debug!(cancelled = self.recoveries.len(), "input cancels pending recovery");
                self.recoveries.clear();
            }
            self.error = None;
        }
    }

    /// A display refresh replaces the message but keeps the error flag.
    fn hide_error_message(&mut self) {
        if let Some(flash) = self.error.as_mut() {
            flash.message_visible = false;
        }
    }

    fn reset(&mut self) {
        self.current = "0".to_string();
        self.pending_operand.clear();
        self.pending_operator = None;
        self.reset_next = false;
        self.error = None;
    }
}

/// Apply `op`, rejecting division by zero and non-finite results, and round.
fn evaluate(op: Operator, lhs: f64, rhs: f64) -> Result<f64, Fault> {
    if op == Operator::Divide && rhs == 0.0 {
        return Err(Fault::DivideByZero);
    }

    let result = op.apply(lhs, rhs);
    if !result.is_finite() {
        return Err(Fault::InvalidResult);
    }

    Ok(round_result(result))
}
