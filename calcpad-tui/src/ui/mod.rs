//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Nothing here mutates state; the display string, error flag and active
//! operator are all read from the calculator.

pub mod keypad;

use crate::app::AppState;
use libcalcpad::{InputEvent, Phase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Widest the calculator is drawn, in columns
const MAX_WIDTH: u16 = 40;

/// Regions of the calculator screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub display: Rect,
    pub keypad: Rect,
    pub status: Rect,
}

/// Split the terminal into display, keypad and status bar
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let width = area.width.min(MAX_WIDTH);
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Display
            Constraint::Min(5),    // Keypad
            Constraint::Length(3), // Status bar
        ])
        .split(column);

    ScreenLayout {
        display: chunks[0],
        keypad: chunks[1],
        status: chunks[2],
    }
}

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.size();
    let layout = screen_layout(area);

    render_display(frame, layout.display, state);
    render_keypad(frame, layout.keypad, state);
    render_status_bar(frame, layout.status, state);

    if state.help_visible {
        render_help_overlay(frame, area);
    }
}

/// Render the pending expression and the display string
fn render_display(frame: &mut Frame, area: Rect, state: &AppState) {
    let calc = &state.calculator;

    let expression = match calc.pending_operator() {
        Some(op) => format!("{} {}", calc.pending_operand(), op),
        None => String::new(),
    };

    let display_style = if !calc.has_error() {
        Style::default().add_modifier(Modifier::BOLD)
    } else if state.config.colors_enabled {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    };

    let border_style = if calc.has_error() && state.config.colors_enabled {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let lines = vec![
        Line::from(Span::styled(expression, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(calc.display(), display_style)),
    ];

    let display = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Calcpad ")
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    frame.render_widget(display, area);
}

/// Render the keypad, highlighting the pending operator
fn render_keypad(frame: &mut Frame, area: Rect, state: &AppState) {
    let active = state.calculator.pending_operator();

    for button in keypad::buttons(area) {
        let highlighted = matches!(button.event, InputEvent::Operator(op) if Some(op) == active);

        let style = match (highlighted, state.config.colors_enabled) {
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().add_modifier(Modifier::REVERSED),
            (false, true) => key_color(button.event),
            (false, false) => Style::default(),
        };

        let key = Paragraph::new(button.event.label())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL));

        frame.render_widget(key, button.area);
    }
}

fn key_color(event: InputEvent) -> Style {
    match event {
        InputEvent::Operator(_) | InputEvent::Equals => Style::default().fg(Color::Yellow),
        InputEvent::ClearAll | InputEvent::ClearEntry | InputEvent::Backspace => {
            Style::default().fg(Color::Red)
        }
        InputEvent::Digit(_) | InputEvent::Decimal => Style::default(),
    }
}

/// Render status bar with the last status message or key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = match state.status.message {
        Some(ref message) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Cyan),
        )),
        None => Line::from(Span::styled(
            phase_hint(state.calculator.phase()),
            Style::default().fg(Color::Gray),
        )),
    };

    let status = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Key hint for the status bar when no message is showing
fn phase_hint(phase: Phase) -> &'static str {
    match phase {
        Phase::Entering => "F1: Help | m: Mouse | q: Quit",
        Phase::OperatorSelected => "Enter next number | F1: Help",
        Phase::Error => "Esc: Clear | F1: Help",
    }
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  0-9 . ,      - Enter number"),
        Line::from("  + - * x /    - Operator"),
        Line::from("  Enter =      - Calculate"),
        Line::from("  Backspace    - Delete last digit"),
        Line::from("  Delete       - Clear entry (CE)"),
        Line::from("  Esc          - Clear all (C)"),
        Line::from(""),
        Line::from("  m            - Toggle mouse"),
        Line::from("  F1           - Toggle help"),
        Line::from("  q / Ctrl+C   - Quit"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
