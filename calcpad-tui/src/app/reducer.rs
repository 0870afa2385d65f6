//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`. The reducer has no side effects: timers,
//! terminal mode changes and drawing all happen in the event loop.

use super::actions::Action;
use super::state::{AppState, StatusBarState};
use crate::ui::keypad;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use libcalcpad::InputEvent;
use ratatui::layout::Rect;

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Mouse(mouse) => {
            let clicked = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));
            if !clicked || !state.mouse_enabled || state.help_visible {
                return state;
            }
            match keypad::hit_test(state.viewport, mouse.column, mouse.row) {
                Some(event) => reduce(state, Action::Input(event)),
                None => state,
            }
        }
        Action::Tick => state,
        Action::Resize(width, height) => AppState {
            viewport: Rect::new(0, 0, width, height),
            ..state
        },

        // === Application ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ToggleMouse => {
            let mouse_enabled = !state.mouse_enabled;
            let message = if mouse_enabled {
                "Mouse input on"
            } else {
                "Mouse input off"
            };
            let state = AppState {
                mouse_enabled,
                ..state
            };
            reduce(state, Action::SetStatus(message.to_string()))
        }

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Calculator ===
        Action::Input(event) => {
            let mut calculator = state.calculator;
            calculator.apply(event);
            reduce(AppState { calculator, ..state }, Action::ClearStatus)
        }

        Action::RecoveryElapsed(ticket) => {
            let mut calculator = state.calculator;
            let recovered = calculator.recover(ticket);
            let state = AppState { calculator, ..state };
            if recovered {
                reduce(state, Action::SetStatus("Cleared after error".to_string()))
            } else {
                state
            }
        }

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Terminals that report releases would otherwise double every press
    if key.kind != KeyEventKind::Press {
        return state;
    }

    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
            return reduce(state, Action::Quit);
        }

        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        (KeyCode::Char('m'), KeyModifiers::NONE) => {
            return reduce(state, Action::ToggleMouse);
        }

        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    if state.help_visible {
        return state;
    }

    match calculator_key(key) {
        Some(event) => reduce(state, Action::Input(event)),
        None => state,
    }
}

/// Map a key press to a calculator input
fn calculator_key(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Enter => Some(InputEvent::Equals),
        KeyCode::Esc => Some(InputEvent::ClearAll),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Delete => Some(InputEvent::ClearEntry),
        // Shift is needed for '+' and '*' on most layouts
        KeyCode::Char(c) if (key.modifiers - KeyModifiers::SHIFT).is_empty() => {
            InputEvent::from_char(c)
        }
        _ => None,
    }
}
