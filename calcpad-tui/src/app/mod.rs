//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//!
//! The calculator itself lives in `libcalcpad`; this layer maps terminal
//! input onto it and tracks the UI around it.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use reducer::reduce;
pub use state::{AppState, StatusBarState, UiConfig};
