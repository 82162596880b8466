//! End-to-end flow: record positions through a scripted capture source,
//! persist them, reload them, and replay a trade through a scripted driver.

use desk_trader::config::{Point, PositionMap};
use desk_trader::error::BotError;
use desk_trader::input::{Capture, CaptureSource, UiDriver};
use desk_trader::recorder::{self, ELEMENTS};
use desk_trader::trade::{
    Account, ExecutionSummary, OrderKind, PauseRange, TradeAction, TradeExecutor, TradeKind,
    TradeRequest,
};
use pretty_assertions::assert_eq;
use std::collections::VecDeque;
use std::time::Duration;

struct ScriptedSource {
    events: VecDeque<Capture>,
}

impl CaptureSource for ScriptedSource {
    fn next_capture(&mut self) -> Result<Capture, BotError> {
        Ok(self.events.pop_front().unwrap_or(Capture::Skip))
    }
}

#[derive(Default)]
struct RecordingDriver {
    clicks: Vec<(Point, u32)>,
    typed: Vec<(String, bool)>,
}

impl UiDriver for RecordingDriver {
    fn click(&mut self, at: Point, times: u32) -> Result<(), BotError> {
        self.clicks.push((at, times));
        Ok(())
    }

    fn type_text(&mut self, text: &str, press_enter: bool) -> Result<(), BotError> {
        self.typed.push((text.to_string(), press_enter));
        Ok(())
    }

    fn pause(&mut self, _min_s: f64, _max_s: f64) {}

    fn sleep(&mut self, _duration: Duration) {}
}

#[test]
fn recorded_positions_drive_a_full_limit_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("click_positions.json");

    // Operator clicks every prompt at a distinct coordinate.
    let events: VecDeque<Capture> = (0..ELEMENTS.len() as i32)
        .map(|i| Capture::Click { x: 100 + i, y: 200 + i })
        .collect();
    let mut source = ScriptedSource { events };
    recorder::run(&mut source, &path).unwrap();

    let positions = PositionMap::load(&path).unwrap();

    let request = TradeRequest {
        trade_type: TradeKind::Options,
        account: Account::Traditional,
        ticker: "SPY".to_string(),
        action: TradeAction::Sell,
        amount: 3,
        order: OrderKind::Limit { price: 418.0 },
        extended_hours: true,
        repeat: 1,
        pause: PauseRange { min_secs: 1.0, max_secs: 3.0 },
    };

    let mut executor = TradeExecutor::new(&positions, RecordingDriver::default());
    let summary = executor.run(&request);
    assert_eq!(summary, ExecutionSummary { attempted: 1, succeeded: 1 });

    let driver = executor.driver();

    // First action: the options button, clicked twice.
    assert_eq!(
        driver.clicks.first().unwrap(),
        &(positions.get("options_button").unwrap(), 2)
    );
    // Last action: place order, a single click.
    assert_eq!(
        driver.clicks.last().unwrap(),
        &(positions.get("place_order_button").unwrap(), 1)
    );
    // Ticker and limit price are typed with enter, the amount without.
    assert_eq!(
        driver.typed,
        vec![
            ("SPY".to_string(), true),
            ("3".to_string(), false),
            ("418.00".to_string(), true),
        ]
    );
    // Extended hours selected Day+, never the plain Day option.
    let clicked: Vec<Point> = driver.clicks.iter().map(|(p, _)| *p).collect();
    assert!(clicked.contains(&positions.get("day_plus_option").unwrap()));
    assert!(!clicked.contains(&positions.get("day_option").unwrap()));
}

#[test]
fn executor_only_references_recorded_anchor_names() {
    // A mapping recorded from the prompt list must satisfy every lookup the
    // step sequence performs, for every account and order-type combination.
    let mut positions = PositionMap::new();
    for (i, (name, _)) in ELEMENTS.iter().enumerate() {
        positions.insert(name, Point::new(i as i32, i as i32));
    }

    for account in [
        Account::Roth,
        Account::Traditional,
        Account::Hsa,
        Account::Brokeragelink,
        Account::Individual,
        Account::IndividualTod,
    ] {
        for (order, extended_hours) in [
            (OrderKind::Market, false),
            (OrderKind::Limit { price: 10.0 }, true),
        ] {
            let request = TradeRequest {
                trade_type: TradeKind::Stocks,
                account,
                ticker: "VTI".to_string(),
                action: TradeAction::Buy,
                amount: 1,
                order,
                extended_hours,
                repeat: 1,
                pause: PauseRange { min_secs: 1.0, max_secs: 3.0 },
            };
            let mut executor = TradeExecutor::new(&positions, RecordingDriver::default());
            let summary = executor.run(&request);
            assert!(
                summary.all_succeeded(),
                "lookup failed for {:?}",
                request.account
            );
        }
    }
}

#[test]
fn incomplete_mapping_fails_the_attempt_not_the_process() {
    let mut positions = PositionMap::new();
    positions.insert("stocks_button", Point::new(1, 1));

    let request = TradeRequest {
        trade_type: TradeKind::Stocks,
        account: Account::Roth,
        ticker: "VTI".to_string(),
        action: TradeAction::Buy,
        amount: 1,
        order: OrderKind::Market,
        extended_hours: false,
        repeat: 1,
        pause: PauseRange { min_secs: 1.0, max_secs: 3.0 },
    };

    let mut executor = TradeExecutor::new(&positions, RecordingDriver::default());
    let summary = executor.run(&request);
    assert_eq!(summary, ExecutionSummary { attempted: 1, succeeded: 0 });
}
