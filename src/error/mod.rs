// src/error/mod.rs
use thiserror::Error;

/// Crate-wide error type for the trading bot.
///
/// Configuration and argument errors are unrecoverable and terminate the
/// process; step-level errors (`MissingPosition`, `Input`) are caught at the
/// single-attempt boundary by the executor and reported as a failed attempt.
#[derive(Debug, Clone, Error)]
pub enum BotError {
    /// The coordinate mapping file does not exist yet
    #[error("Config file not found at '{0}'. Please run in record_positions mode to configure UI coordinates.")]
    ConfigMissing(String),

    /// The coordinate mapping file exists but could not be read or parsed
    #[error("Config Error: {0}")]
    Config(String),

    /// A required trade parameter was not supplied on the command line
    #[error("Missing required parameters: {0}")]
    MissingParameter(String),

    /// Limit orders cannot be placed without a price
    #[error("Limit price is required for limit orders")]
    MissingLimitPrice,

    /// Share count must be a positive whole number
    #[error("Invalid Amount: {0}")]
    InvalidAmount(String),

    /// The inter-repeat pause range is inverted or negative
    #[error("Invalid Pause Range: min_pause {min} must not exceed max_pause {max}")]
    InvalidPauseRange { min: f64, max: f64 },

    /// A UI anchor referenced by the step sequence was never recorded
    #[error("No recorded position for UI element '{0}'")]
    MissingPosition(String),

    /// Synthetic input (mouse/keyboard) could not be delivered
    #[error("Input Error: {0}")]
    Input(String),

    /// The recorder's global input listener failed or disconnected
    #[error("Listener Error: {0}")]
    Listener(String),
}

impl BotError {
    /// True for errors that must terminate the process before any UI
    /// interaction is attempted. Step-level errors are caught at the
    /// attempt boundary instead.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, BotError::MissingPosition(_) | BotError::Input(_))
    }
}
