// src/lib.rs
//! Coordinate-replay trading bot.
//!
//! Two mutually exclusive run modes share one artifact, the recorded
//! name -> (x, y) anchor mapping: `record_positions` builds it by watching
//! real operator clicks, `trade` replays a fixed click/keystroke sequence
//! against it to drive an order through the external application's UI.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod recorder;
pub mod trade;
pub mod utils;
