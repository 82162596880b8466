// src/trade/mod.rs
//! Order parameters and the coordinate-replay trade executor.

pub mod executor;
pub mod request;

pub use executor::{ExecutionSummary, TradeExecutor};
pub use request::{Account, OrderKind, OrderType, PauseRange, TradeAction, TradeKind, TradeRequest};
