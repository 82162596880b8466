// src/trade/request.rs
//! Validated order parameters. All fixed enumerations are closed variants so
//! unknown values die at the command-line boundary instead of deep inside the
//! click sequence.

use crate::cli::Cli;
use crate::error::BotError;
use clap::ValueEnum;
use std::fmt;

/// Which side of the application the order targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TradeKind {
    Stocks,
    Options,
}

impl TradeKind {
    /// Anchor name of the trade-type button.
    pub fn position_key(&self) -> &'static str {
        match self {
            TradeKind::Stocks => "stocks_button",
            TradeKind::Options => "options_button",
        }
    }
}

/// Recognized account types. Value names match the legacy CLI surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Account {
    #[value(name = "Roth")]
    Roth,
    #[value(name = "Traditional")]
    Traditional,
    #[value(name = "HSA")]
    Hsa,
    #[value(name = "Brokeragelink")]
    Brokeragelink,
    #[value(name = "Individual")]
    Individual,
    #[value(name = "Individual_TOD")]
    IndividualTod,
}

impl Account {
    /// Anchor name of this account's dropdown entry.
    pub fn position_key(&self) -> &'static str {
        match self {
            Account::Roth => "account_roth",
            Account::Traditional => "account_traditional",
            Account::Hsa => "account_hsa",
            Account::Brokeragelink => "account_brokeragelink",
            Account::Individual => "account_individual",
            Account::IndividualTod => "account_individual_tod",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    pub fn position_key(&self) -> &'static str {
        match self {
            TradeAction::Buy => "buy_button",
            TradeAction::Sell => "sell_button",
        }
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAction::Buy => write!(f, "buy"),
            TradeAction::Sell => write!(f, "sell"),
        }
    }
}

/// Order type as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderType {
    Market,
    Limit,
}

/// Order type with its mandatory data attached: a limit order cannot exist
/// without a price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderKind {
    Market,
    Limit { price: f64 },
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderKind::Market => write!(f, "market"),
            OrderKind::Limit { .. } => write!(f, "limit"),
        }
    }
}

/// Bounds for the randomized pause between repeated attempts, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PauseRange {
    pub min_secs: f64,
    pub max_secs: f64,
}

/// One validated order, immutable once constructed. Consumed once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRequest {
    pub trade_type: TradeKind,
    pub account: Account,
    pub ticker: String,
    pub action: TradeAction,
    /// Whole shares. Fractional-share trading is unsupported; the CLI rejects
    /// non-integer amounts at parse time.
    pub amount: u32,
    pub order: OrderKind,
    pub extended_hours: bool,
    pub repeat: u32,
    pub pause: PauseRange,
}

impl TradeRequest {
    /// Single validation boundary between the raw CLI surface and the
    /// executor. No UI interaction happens before this succeeds.
    pub fn from_cli(cli: &Cli) -> Result<Self, BotError> {
        let mut missing = Vec::new();
        if cli.trade_type.is_none() {
            missing.push("trade_type");
        }
        if cli.account.is_none() {
            missing.push("account");
        }
        if cli.ticker.is_none() {
            missing.push("ticker");
        }
        if cli.action.is_none() {
            missing.push("action");
        }
        if cli.amount.is_none() {
            missing.push("amount");
        }
        if cli.order_type.is_none() {
            missing.push("order_type");
        }
        if !missing.is_empty() {
            return Err(BotError::MissingParameter(missing.join(", ")));
        }

        let amount = cli.amount.unwrap_or_default();
        if amount == 0 {
            return Err(BotError::InvalidAmount(
                "amount must be greater than 0".to_string(),
            ));
        }

        let order = match cli.order_type.unwrap_or(OrderType::Market) {
            OrderType::Market => OrderKind::Market,
            OrderType::Limit => match cli.limit_price {
                None => return Err(BotError::MissingLimitPrice),
                Some(price) if price <= 0.0 => {
                    return Err(BotError::InvalidAmount(
                        "limit_price must be greater than 0".to_string(),
                    ));
                }
                Some(price) => OrderKind::Limit { price },
            },
        };

        if cli.min_pause < 0.0 || cli.min_pause > cli.max_pause {
            return Err(BotError::InvalidPauseRange {
                min: cli.min_pause,
                max: cli.max_pause,
            });
        }

        Ok(Self {
            trade_type: cli.trade_type.unwrap_or(TradeKind::Stocks),
            account: cli.account.unwrap_or(Account::Individual),
            ticker: cli.ticker.clone().unwrap_or_default(),
            action: cli.action.unwrap_or(TradeAction::Buy),
            amount,
            order,
            extended_hours: cli.extended_hours,
            // repeat 0 behaves like a single run, as the legacy tool did.
            repeat: cli.repeat.max(1),
            pause: PauseRange {
                min_secs: cli.min_pause,
                max_secs: cli.max_pause,
            },
        })
    }
}
