//! Interactive reminder manager.
//!
//! # Responsibility
//! - Wire environment config, logging and one shared reminder service.
//! - Read commands from stdin line by line and print each reply.

mod commands;
mod config;
mod dates;

use config::CliConfig;
use log::info;
use reminder_core::{core_version, init_logging_with, Clock, LoggingConfig, ReminderService};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    start_logging(&config);

    let service = ReminderService::with_system_clock();
    println!("reminders {} (type /help for commands)", core_version());

    match run(&service, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => {
            info!("event=cli_exit module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("i/o error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the read-eval-print loop until end of input.
fn run<C: Clock, R: BufRead, W: Write>(
    service: &ReminderService<C>,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let reply = commands::handle_line(service, &line?);
        if !reply.is_empty() {
            writeln!(output, "{reply}")?;
            output.flush()?;
        }
    }
    Ok(())
}

fn start_logging(config: &CliConfig) {
    let Some(log_dir) = config.log_dir.as_ref() else {
        return;
    };
    let Some(raw_dir) = log_dir.to_str() else {
        eprintln!("log directory is not valid UTF-8; file logging disabled");
        return;
    };

    let result = LoggingConfig::from_raw(config.log_level.as_str(), raw_dir)
        .and_then(|logging| init_logging_with(&logging));
    match result {
        Ok(()) => info!(
            "event=cli_start module=cli status=ok level={}",
            config.log_level
        ),
        Err(err) => eprintln!("file logging disabled: {err}"),
    }
}
