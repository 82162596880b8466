// src/recorder/mod.rs
//! Interactive recording of UI anchor coordinates.
//!
//! Walks the operator through every element the executor may reference; each
//! prompt blocks until a real pointer click (recorded) or the skip key
//! (skipped). The finished map overwrites the mapping file wholesale.

use crate::config::{Point, PositionMap};
use crate::error::BotError;
use crate::input::{Capture, CaptureSource};
use log::info;
use std::path::Path;

/// Ordered prompts: (logical element name, operator instruction). Dropdowns
/// are deliberately re-recorded between entries because the application
/// closes them after each selection; the last recorded value for a name
/// wins.
pub const ELEMENTS: &[(&str, &str)] = &[
    ("screen_focus", "Click the screen to focus it"),
    ("options_button", "Click the Options button"),
    ("stocks_button", "Click the Stocks button"),
    ("account_dropdown", "Click the account dropdown"),
    ("account_roth", "Click the Roth account option"),
    ("account_dropdown", "Click the account dropdown AGAIN to reopen it"),
    ("account_dropdown", "Click the account dropdown AGAIN to reopen it"),
    ("account_traditional", "Click the Traditional account option"),
    ("account_dropdown", "Click the account dropdown AGAIN to reopen it"),
    ("account_dropdown", "Click the account dropdown AGAIN to reopen it"),
    ("account_hsa", "Click the HSA account option"),
    ("account_dropdown", "Click the account dropdown AGAIN to reopen it"),
    ("account_dropdown", "Click the account dropdown AGAIN to reopen it"),
    ("account_brokeragelink", "Click the Brokeragelink account option"),
    ("account_dropdown", "Click the account dropdown AGAIN to reopen it"),
    ("account_dropdown", "Click the account dropdown AGAIN to reopen it"),
    ("account_individual", "Click the Individual account option"),
    ("account_dropdown", "Click the account dropdown AGAIN to reopen it"),
    ("account_dropdown", "Click the account dropdown AGAIN to reopen it"),
    ("account_individual_tod", "Click the Individual (TOD) account option"),
    ("ticker_box", "Click inside the ticker input box"),
    ("buy_button", "Click the Buy button"),
    ("sell_button", "Click the Sell button"),
    ("amount_box", "Click inside the amount input box"),
    ("market_order", "Click the Market order option"),
    ("limit_order", "Click the Limit order option"),
    ("limit_price_box", "Click inside the Limit price input box"),
    ("day_dropdown", "Click the day dropdown"),
    ("day_option", "Click the day option"),
    ("day_dropdown", "Click the day dropdown AGAIN to reopen it"),
    ("day_dropdown", "Click the day dropdown AGAIN to reopen it"),
    ("day_plus_option", "Click the Day+ option"),
    ("place_order_button", "Click the Place Order button"),
];

/// Walk the prompt list against a capture source and build the mapping.
/// Waits indefinitely on each prompt; skipped elements are simply absent
/// from the result.
pub fn record_elements<S: CaptureSource>(source: &mut S) -> Result<PositionMap, BotError> {
    println!("Move the mouse to each element and LEFT-click to record.");
    println!("Press ESC to skip optional elements or Ctrl+C to abort the entire process.\n");

    let mut map = PositionMap::new();
    let total = ELEMENTS.len();

    for (idx, (name, prompt)) in ELEMENTS.iter().enumerate() {
        println!(
            "[{}/{}] {} (press ESC to skip) - waiting for input...",
            idx + 1,
            total,
            prompt
        );

        match source.next_capture()? {
            Capture::Click { x, y } => {
                map.insert(name, Point::new(x, y));
                println!("Recorded ({}, {})\n", x, y);
            }
            Capture::Skip => {
                println!("Skipped {}\n", prompt);
            }
        }
    }

    Ok(map)
}

/// Record every element, then persist the mapping.
pub fn run<S: CaptureSource>(source: &mut S, path: &Path) -> Result<(), BotError> {
    let map = record_elements(source)?;
    map.save(path)?;
    info!("Recorded {} anchor positions", map.len());
    println!("All positions saved to {}", path.display());
    Ok(())
}
