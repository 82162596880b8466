// src/cli.rs
//! Command-line surface. Long option spellings match the legacy tool so
//! existing operator scripts keep working.

use crate::trade::{Account, OrderType, TradeAction, TradeKind};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Replay the recorded coordinates to place an order
    Trade,
    /// Interactively record UI element coordinates
    #[value(name = "record_positions")]
    RecordPositions,
}

#[derive(Debug, Parser)]
#[command(name = "desk-trader")]
#[command(about = "Automated stock trading bot driving a desktop UI through recorded screen coordinates")]
pub struct Cli {
    /// Mode to run in
    #[arg(value_enum)]
    pub mode: Mode,

    /// Trade Stocks or Options
    #[arg(long = "trade_type", value_enum)]
    pub trade_type: Option<TradeKind>,

    /// Account type
    #[arg(long, value_enum)]
    pub account: Option<Account>,

    /// Stock ticker symbol
    #[arg(long)]
    pub ticker: Option<String>,

    /// Buy or Sell action
    #[arg(long, value_enum)]
    pub action: Option<TradeAction>,

    /// Number of whole shares to trade
    #[arg(long)]
    pub amount: Option<u32>,

    /// Order type
    #[arg(long = "order_type", value_enum)]
    pub order_type: Option<OrderType>,

    /// Limit price if using a limit order
    #[arg(long = "limit_price")]
    pub limit_price: Option<f64>,

    /// Enable extended hours trading (Day+)
    #[arg(long = "extended_hours")]
    pub extended_hours: bool,

    /// Number of times to repeat the order
    #[arg(long, default_value_t = 1)]
    pub repeat: u32,

    /// Minimum pause time between repeats (seconds)
    #[arg(long = "min_pause", default_value_t = 1.0)]
    pub min_pause: f64,

    /// Maximum pause time between repeats (seconds)
    #[arg(long = "max_pause", default_value_t = 3.0)]
    pub max_pause: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_is_required() {
        assert!(Cli::try_parse_from(["desk-trader"]).is_err());
    }

    #[test]
    fn record_mode_needs_no_trade_options() {
        let cli = Cli::parse_from(["desk-trader", "record_positions"]);
        assert_eq!(cli.mode, Mode::RecordPositions);
        assert!(cli.trade_type.is_none());
    }

    #[test]
    fn legacy_flag_spellings_parse() {
        let cli = Cli::parse_from([
            "desk-trader",
            "trade",
            "--trade_type",
            "options",
            "--account",
            "HSA",
            "--ticker",
            "SPY",
            "--action",
            "sell",
            "--amount",
            "3",
            "--order_type",
            "limit",
            "--limit_price",
            "12.25",
            "--extended_hours",
            "--repeat",
            "4",
            "--min_pause",
            "0.5",
            "--max_pause",
            "1.5",
        ]);
        assert_eq!(cli.mode, Mode::Trade);
        assert_eq!(cli.trade_type, Some(TradeKind::Options));
        assert_eq!(cli.account, Some(Account::Hsa));
        assert_eq!(cli.order_type, Some(OrderType::Limit));
        assert_eq!(cli.limit_price, Some(12.25));
        assert!(cli.extended_hours);
        assert_eq!(cli.repeat, 4);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["desk-trader", "backtest"]).is_err());
    }
}
