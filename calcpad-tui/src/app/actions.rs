//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use crossterm::event::{KeyEvent, MouseEvent};
use libcalcpad::{InputEvent, RecoveryTicket};

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event (when capture is enabled)
    Mouse(MouseEvent),

    /// Periodic tick, lets the loop pick up timer firings
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Application ===
    /// Quit the application
    Quit,

    /// Toggle mouse capture on/off
    ToggleMouse,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Calculator ===
    /// One calculator key press, from keyboard or keypad click
    Input(InputEvent),

    /// An error recovery delay elapsed
    RecoveryElapsed(RecoveryTicket),

    // === Status Bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}
