// src/main.rs
use clap::{CommandFactory, Parser};
use desk_trader::cli::{Cli, Mode};
use desk_trader::config::{PositionMap, POSITIONS_FILE};
use desk_trader::error::BotError;
use desk_trader::input::{EnigoDriver, RdevCaptureSource};
use desk_trader::trade::{TradeExecutor, TradeRequest};
use desk_trader::utils::{setup_logging, LOG_FILE};
use desk_trader::recorder;
use log::{error, info};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = setup_logging(Path::new(LOG_FILE)) {
        eprintln!("Failed to initialize logging: {}", err);
        process::exit(1);
    }

    let result = match cli.mode {
        Mode::RecordPositions => record_positions(),
        Mode::Trade => trade(&cli),
    };

    if let Err(err) = result {
        error!("{}", err);
        eprintln!("Error: {}", err);
        if usage_error(&err) {
            let _ = Cli::command().print_help();
        }
        process::exit(1);
    }
}

fn record_positions() -> Result<(), BotError> {
    let mut source = RdevCaptureSource::spawn()?;
    recorder::run(&mut source, Path::new(POSITIONS_FILE))
}

fn trade(cli: &Cli) -> Result<(), BotError> {
    // Validate before touching the mapping file or the desktop.
    let request = TradeRequest::from_cli(cli)?;
    let positions = PositionMap::load(Path::new(POSITIONS_FILE))?;

    let driver = EnigoDriver::new()?;
    let mut executor = TradeExecutor::new(&positions, driver);
    let summary = executor.run(&request);

    // Attempt failures are already logged at the attempt boundary and do not
    // affect the exit status; the run itself completed.
    info!(
        "Run complete: {}/{} attempts succeeded",
        summary.succeeded, summary.attempted
    );
    Ok(())
}

fn usage_error(err: &BotError) -> bool {
    matches!(
        err,
        BotError::MissingParameter(_)
            | BotError::MissingLimitPrice
            | BotError::InvalidAmount(_)
            | BotError::InvalidPauseRange { .. }
    )
}
