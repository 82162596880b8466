// src/config/mod.rs
//! Persistence of recorded UI anchor coordinates.

pub mod positions;

pub use positions::{Point, PositionMap, POSITIONS_FILE};
