//! calcpad-tui - Terminal calculator
//!
//! Keyboard and mouse driven four-function calculator. Errors flash on the
//! display and clear themselves after the configured recovery delay.

use calcpad_tui::{
    app::{event::EventHandler, reduce, Action, AppState},
    error::Result,
    recovery::RecoveryScheduler,
    terminal::{install_panic_hook, restore_terminal, set_mouse_capture, setup_terminal, Tui},
    ui,
};
use libcalcpad::{logging::LoggingConfig, Config};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let config = Config::load()?;

    // Only log when a file is configured; stderr belongs to the screen
    if config.log_file().is_some() {
        LoggingConfig::from_config(&config, false)?.init()?;
    }
    tracing::info!(policy = %config.recovery.policy, delay_ms = config.recovery.delay_ms, "starting");

    install_panic_hook();

    let mut terminal = setup_terminal(config.ui.mouse)?;
    let result = run_app(&mut terminal, &config);
    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui, config: &Config) -> Result<()> {
    let mut state = AppState::from_config(config);
    let mut recovery = RecoveryScheduler::new(config.recovery_delay())?;
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    let size = terminal.size()?;
    state = reduce(state, Action::Resize(size.width, size.height));

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let mouse_before = state.mouse_enabled;
        let action: Action = event_handler.next()?.into();
        state = reduce(state, action);

        for ticket in recovery.drain() {
            state = reduce(state, Action::RecoveryElapsed(ticket));
        }

        // Start timers for new errors, abort the ones input cancelled
        recovery.sync(state.calculator.pending_recoveries());

        if state.mouse_enabled != mouse_before {
            set_mouse_capture(terminal, state.mouse_enabled)?;
        }

        if state.should_quit {
            break;
        }
    }

    tracing::info!("exiting");
    Ok(())
}
