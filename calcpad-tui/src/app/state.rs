//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).

use libcalcpad::{Calculator, Config};
use ratatui::layout::Rect;

/// Root application state
///
/// This is the single source of truth for the entire application. It owns
/// the one calculator instance for the session.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Mouse capture enabled?
    pub mouse_enabled: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// The calculator session
    pub calculator: Calculator,

    /// Status bar state
    pub status: StatusBarState,

    /// Last known terminal area, used to hit-test mouse clicks
    pub viewport: Rect,

    /// UI configuration
    pub config: UiConfig,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default().with_env_overrides())
    }
}

impl AppState {
    /// Create new application state from defaults and environment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            should_quit: false,
            mouse_enabled: config.ui.mouse,
            help_visible: false,
            calculator: Calculator::with_policy(config.recovery.policy),
            status: StatusBarState::default(),
            viewport: Rect::default(),
            config: UiConfig {
                colors_enabled: config.ui.colors,
                tick_rate_ms: config.ui.tick_rate_ms,
            },
        }
    }
}
