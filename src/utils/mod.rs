// src/utils/mod.rs
use log::info;
use std::path::Path;

/// Fixed path of the append-only run log.
pub const LOG_FILE: &str = "trading_bot.log";

pub fn setup_logging(log_path: &Path) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(fern::log_file(log_path)?)
        .apply()?;
    info!("Logging initialized.");
    Ok(())
}
