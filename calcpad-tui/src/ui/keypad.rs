//! Keypad geometry
//!
//! Rendering and mouse hit-testing share these functions, so a click always
//! lands on the button that was drawn there.

use libcalcpad::InputEvent;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Button rows, written as key-script characters.
const ROWS: [&str; 5] = ["CE</", "789*", "456-", "123+", "0.="];

/// One keypad button and the input it sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub area: Rect,
    pub event: InputEvent,
}

/// Lay out every button inside `area`
pub fn buttons(area: Rect) -> Vec<Button> {
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(ROWS.iter().map(|_| Constraint::Ratio(1, ROWS.len() as u32)))
        .split(area);

    ROWS.iter()
        .zip(row_areas.iter())
        .flat_map(|(keys, row_area)| {
            let events: Vec<InputEvent> =
                keys.chars().filter_map(InputEvent::from_script_char).collect();
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(events.iter().map(|_| Constraint::Ratio(1, events.len() as u32)))
                .split(*row_area);

            events
                .into_iter()
                .zip(cells.iter())
                .map(|(event, cell)| Button { area: *cell, event })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Find the calculator input under a click at (`column`, `row`)
pub fn hit_test(viewport: Rect, column: u16, row: u16) -> Option<InputEvent> {
    let keypad = super::screen_layout(viewport).keypad;
    buttons(keypad)
        .into_iter()
        .find(|button| contains(button.area, column, row))
        .map(|button| button.event)
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use libcalcpad::Operator;

    #[test]
    fn test_every_key_has_a_button() {
        let buttons = buttons(Rect::new(0, 0, 40, 20));
        assert_eq!(buttons.len(), 19);
        assert!(buttons
            .iter()
            .any(|b| b.event == InputEvent::Operator(Operator::Divide)));
        assert!(buttons.iter().any(|b| b.event == InputEvent::ClearEntry));
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let buttons = buttons(Rect::new(0, 0, 40, 20));
        for (i, a) in buttons.iter().enumerate() {
            for b in &buttons[i + 1..] {
                assert!(!a.area.intersects(b.area), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_hit_test_matches_drawn_button() {
        let viewport = Rect::new(0, 0, 60, 30);
        let keypad = crate::ui::screen_layout(viewport).keypad;

        for button in buttons(keypad) {
            let column = button.area.x + button.area.width / 2;
            let row = button.area.y + button.area.height / 2;
            assert_eq!(hit_test(viewport, column, row), Some(button.event));
        }
    }

    #[test]
    fn test_click_outside_keypad_hits_nothing() {
        let viewport = Rect::new(0, 0, 60, 30);
        assert_eq!(hit_test(viewport, 0, 0), None);
    }
}
