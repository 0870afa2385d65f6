//! calcpad-eval - Run a key sequence through the calculator
//!
//! Reads keys from the argument or stdin, presses them one by one, and prints
//! what the display shows afterwards. Handy for scripts and for checking the
//! calculator's behaviour without a terminal UI.

use std::io::{self, IsTerminal, Read};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use libcalcpad::input::parse_script;
use libcalcpad::logging::LoggingConfig;
use libcalcpad::{CalcpadError, Calculator, Config, RecoveryPolicy};

#[derive(Parser, Debug)]
#[command(name = "calcpad-eval")]
#[command(about = "Evaluate calculator key sequences", long_about = None)]
#[command(after_help = "KEYS: 0-9 . , + - * x / = | C clear all | E clear entry | < backspace")]
struct Cli {
    /// Keys to press, e.g. "12+7=" (reads from stdin if not provided)
    keys: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Let pending error recoveries fire before printing
    #[arg(short, long)]
    settle: bool,

    /// Print the display after every key
    #[arg(long)]
    steps: bool,

    /// Recovery policy, overriding the config file
    #[arg(long, env = "CALCPAD_RECOVERY_POLICY")]
    policy: Option<RecoveryPolicy>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<CalcpadError>()
            .map(CalcpadError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load()?;

    let level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::new(config.log_format()?, level.to_string(), cli.verbose)
        .init()
        .context("failed to initialize logging")?;

    let keys = match cli.keys {
        Some(keys) => keys,
        None => read_stdin()?,
    };
    let events = parse_script(&keys)?;

    let policy = cli.policy.unwrap_or(config.recovery.policy);
    let mut calc = Calculator::with_policy(policy);
    tracing::debug!(%policy, presses = events.len(), "evaluating");

    for event in events {
        calc.apply(event);
        if cli.steps {
            println!("{:>4} | {}", event.label(), calc.display());
        }
    }

    if cli.settle {
        calc.settle();
    }

    match cli.format {
        OutputFormat::Text => println!("{}", calc.display()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&calc.snapshot())?),
    }

    Ok(())
}

fn read_stdin() -> anyhow::Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CalcpadError::InvalidInput(
            "no keys given (pass them as an argument or pipe them in)".to_string(),
        )
        .into());
    }

    let mut keys = String::new();
    stdin
        .lock()
        .read_to_string(&mut keys)
        .context("failed to read keys from stdin")?;
    Ok(keys)
}
