//! Test keybinding mappings to actions
//!
//! Verifies that keyboard and mouse input is correctly mapped to calculator
//! operations through the reducer.

use calcpad_tui::app::{reduce, Action, AppState};
use calcpad_tui::ui;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use libcalcpad::{InputEvent, Operator};

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn type_keys(mut state: AppState, keys: &str) -> AppState {
    for c in keys.chars() {
        state = reduce(state, Action::Key(key_event(KeyCode::Char(c), KeyModifiers::NONE)));
    }
    state
}

fn click(column: u16, row: u16) -> Action {
    Action::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_q_quits_application() {
    let state = AppState::new();
    let new_state = reduce(state, Action::Key(key_event(KeyCode::Char('q'), KeyModifiers::NONE)));
    assert!(new_state.should_quit);
}

#[test]
fn test_ctrl_c_quits_application() {
    let state = AppState::new();
    let key = key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(reduce(state, Action::Key(key)).should_quit);
}

#[test]
fn test_digits_and_operators() {
    let state = type_keys(AppState::new(), "12+30");
    assert_eq!(state.calculator.current_entry(), "30");
    assert_eq!(state.calculator.pending_operand(), "12");
    assert_eq!(state.calculator.pending_operator(), Some(Operator::Add));
}

#[test]
fn test_enter_calculates() {
    let state = type_keys(AppState::new(), "6x7");
    let state = reduce(state, Action::Key(key_event(KeyCode::Enter, KeyModifiers::NONE)));
    assert_eq!(state.calculator.current_entry(), "42");
}

#[test]
fn test_comma_is_decimal_point() {
    let state = type_keys(AppState::new(), "1,5");
    assert_eq!(state.calculator.current_entry(), "1.5");
}

#[test]
fn test_escape_clears_all() {
    let state = type_keys(AppState::new(), "9-4");
    let state = reduce(state, Action::Key(key_event(KeyCode::Esc, KeyModifiers::NONE)));
    assert_eq!(state.calculator.current_entry(), "0");
    assert_eq!(state.calculator.pending_operator(), None);
}

#[test]
fn test_backspace_and_delete() {
    let state = type_keys(AppState::new(), "8*42");
    let state = reduce(state, Action::Key(key_event(KeyCode::Backspace, KeyModifiers::NONE)));
    assert_eq!(state.calculator.current_entry(), "4");

    let state = reduce(state, Action::Key(key_event(KeyCode::Delete, KeyModifiers::NONE)));
    assert_eq!(state.calculator.current_entry(), "0");
    assert_eq!(state.calculator.pending_operator(), Some(Operator::Multiply));
}

#[test]
fn test_key_release_is_ignored() {
    let state = type_keys(AppState::new(), "5");
    let release = KeyEvent {
        code: KeyCode::Char('5'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    let state = reduce(state, Action::Key(release));
    assert_eq!(state.calculator.current_entry(), "5");
}

#[test]
fn test_f1_toggles_help() {
    let state = AppState::new();
    assert!(!state.help_visible);

    let state = reduce(state, Action::Key(key_event(KeyCode::F(1), KeyModifiers::NONE)));
    assert!(state.help_visible);

    let state = reduce(state, Action::Key(key_event(KeyCode::F(1), KeyModifiers::NONE)));
    assert!(!state.help_visible);
}

#[test]
fn test_keys_ignored_while_help_open() {
    let state = reduce(AppState::new(), Action::ShowHelp);
    let state = type_keys(state, "7");
    assert_eq!(state.calculator.current_entry(), "0");
}

#[test]
fn test_esc_hides_help_without_clearing() {
    let state = type_keys(AppState::new(), "7");
    let state = reduce(state, Action::ShowHelp);

    let state = reduce(state, Action::Key(key_event(KeyCode::Esc, KeyModifiers::NONE)));
    assert!(!state.help_visible);
    assert_eq!(state.calculator.current_entry(), "7");
}

#[test]
fn test_m_toggles_mouse() {
    let state = AppState::new();
    let before = state.mouse_enabled;

    let state = reduce(state, Action::Key(key_event(KeyCode::Char('m'), KeyModifiers::NONE)));
    assert_eq!(state.mouse_enabled, !before);
    assert!(state.status.message.is_some());
}

#[test]
fn test_click_on_keypad_button() {
    let mut state = reduce(AppState::new(), Action::Resize(60, 30));
    state.mouse_enabled = true;

    let keypad = ui::screen_layout(state.viewport).keypad;
    let seven = ui::keypad::buttons(keypad)
        .into_iter()
        .find(|b| b.event == InputEvent::from_char('7').unwrap())
        .unwrap();

    let state = reduce(state, click(seven.area.x + 1, seven.area.y + 1));
    assert_eq!(state.calculator.current_entry(), "7");
}

#[test]
fn test_click_ignored_when_mouse_disabled() {
    let mut state = reduce(AppState::new(), Action::Resize(60, 30));
    state.mouse_enabled = false;

    let keypad = ui::screen_layout(state.viewport).keypad;
    let button = ui::keypad::buttons(keypad)[4];

    let state = reduce(state, click(button.area.x + 1, button.area.y + 1));
    assert_eq!(state.calculator.current_entry(), "0");
}
