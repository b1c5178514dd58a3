use std::{fs::File, process::ExitCode};

use config::AppConfig;
use enrollment::EnrollmentError;
use simplelog::{ColorChoice, TermLogger, TerminalMode, WriteLogger};

mod config;
mod enrollment;

/// Route `log` records to stderr, or to a file when one is configured.
/// stdout is reserved for the interactive session.
fn init_logger(config: &AppConfig) -> Result<(), EnrollmentError> {
    let log_config = simplelog::Config::default();
    let installed = match &config.log_file {
        Some(path) => WriteLogger::init(config.log_level, log_config, File::create(path)?),
        None => TermLogger::init(
            config.log_level,
            log_config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };
    // a logger can only be set once per process
    installed.ok();
    Ok(())
}

fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logger(&config) {
        eprintln!("Failed to open log file: {}", err);
        return ExitCode::FAILURE;
    }

    match enrollment::run_interactive(config.preload_students) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("\nSession ended: {}", err);
            ExitCode::FAILURE
        }
    }
}
