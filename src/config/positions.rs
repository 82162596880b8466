// src/config/positions.rs
//! The name -> (x, y) anchor mapping recorded by the operator and replayed
//! by the trade executor.

use crate::error::BotError;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Fixed path of the coordinate mapping file, shared by both run modes.
pub const POSITIONS_FILE: &str = "click_positions.json";

/// A recorded screen pixel position, serialized as a two-element array so the
/// on-disk file stays `{"ticker_box": [812, 344], ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Point {
    fn from(pair: [i32; 2]) -> Self {
        Self { x: pair[0], y: pair[1] }
    }
}

impl From<Point> for [i32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Named UI anchor points. Created by the recorder, read-only for the
/// executor. Lookup of an unrecorded name is an error, surfaced at the
/// attempt boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionMap {
    anchors: HashMap<String, Point>,
}

impl PositionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the anchor for a logical element name.
    pub fn insert(&mut self, name: &str, point: Point) {
        self.anchors.insert(name.to_string(), point);
    }

    pub fn get(&self, name: &str) -> Result<Point, BotError> {
        self.anchors
            .get(name)
            .copied()
            .ok_or_else(|| BotError::MissingPosition(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.anchors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Load the mapping from disk. An absent file is a distinct error so the
    /// caller can print the run-the-recorder-first message and exit.
    pub fn load(path: &Path) -> Result<Self, BotError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(BotError::ConfigMissing(path.display().to_string()));
            }
            Err(err) => return Err(BotError::Config(err.to_string())),
        };
        serde_json::from_str(&raw).map_err(|err| BotError::Config(err.to_string()))
    }

    /// Save the full mapping, overwriting any prior file wholesale.
    pub fn save(&self, path: &Path) -> Result<(), BotError> {
        let encoded = serde_json::to_string_pretty(self)
            .map_err(|err| BotError::Config(err.to_string()))?;
        fs::write(path, encoded).map_err(|err| BotError::Config(err.to_string()))?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}
