//! Input events and key mapping
//!
//! Every front end (terminal keys, mouse clicks on the keypad, scripted key
//! sequences) is reduced to the same small event set before it reaches the
//! calculator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CalcpadError, Result};

/// A single decimal digit, `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Numeric value of the digit
    pub fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for the digit
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = char;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        c.to_digit(10)
            .and_then(|d| Digit::new(d as u8))
            .ok_or(c)
    }
}

/// Binary operators, evaluated strictly left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Apply the operator. Division by zero is checked by the caller.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }

    /// Symbol shown on the keypad and in the pending expression
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Map a typed character to an operator
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '*' | 'x' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One discrete press, from keyboard or pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    ClearAll,
    ClearEntry,
    Backspace,
}

impl InputEvent {
    /// Map a keyboard character to an event.
    ///
    /// Covers the characters a user types directly. Named keys (Enter,
    /// Escape, Backspace, Delete) are mapped by the front end.
    pub fn from_char(c: char) -> Option<Self> {
        if let Ok(digit) = Digit::try_from(c) {
            return Some(InputEvent::Digit(digit));
        }
        if let Some(op) = Operator::from_char(c) {
            return Some(InputEvent::Operator(op));
        }
        match c {
            '.' | ',' => Some(InputEvent::Decimal),
            '=' => Some(InputEvent::Equals),
            _ => None,
        }
    }

    /// Map a character from a key script.
    ///
    /// Scripts add tokens for the keys that have no printable character:
    /// `C` clears all, `E` clears the entry, `<` deletes the last character.
    pub fn from_script_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(InputEvent::ClearAll),
            'E' => Some(InputEvent::ClearEntry),
            '<' => Some(InputEvent::Backspace),
            _ => Self::from_char(c),
        }
    }

    /// Short label used on keypad buttons
    pub fn label(self) -> String {
        match self {
            InputEvent::Digit(d) => d.as_char().to_string(),
            InputEvent::Decimal => ".".to_string(),
            InputEvent::Operator(op) => op.symbol().to_string(),
            InputEvent::Equals => "=".to_string(),
            InputEvent::ClearAll => "C".to_string(),
            InputEvent::ClearEntry => "CE".to_string(),
            InputEvent::Backspace => "⌫".to_string(),
        }
    }
}

/// Parse a key script such as `"12+7="` into events.
///
/// Whitespace is ignored. Any other unknown character is rejected with its
/// position so scripts fail loudly instead of computing something else.
pub fn parse_script(script: &str) -> Result<Vec<InputEvent>> {
    script
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(pos, c)| {
            InputEvent::from_script_char(c).ok_or_else(|| {
                CalcpadError::InvalidInput(format!("unknown key '{}' at position {}", c, pos))
            })
        })
        .collect()
}
