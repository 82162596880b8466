// src/trade/executor.rs
//! Replays the fixed click/keystroke sequence against recorded coordinates.

use crate::config::PositionMap;
use crate::error::BotError;
use crate::input::{uniform_secs, UiDriver};
use crate::trade::request::{OrderKind, TradeRequest};
use log::{error, info, warn};

/// Outcome of a run: how many attempts were started and how many completed
/// the full step sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionSummary {
    pub attempted: u32,
    pub succeeded: u32,
}

impl ExecutionSummary {
    pub fn all_succeeded(&self) -> bool {
        self.attempted == self.succeeded
    }
}

/// Drives one order (or a repeated batch) through the external application's
/// UI. Reads only from the coordinate mapping; every step error is caught at
/// the single-attempt boundary and reported as a failed attempt.
pub struct TradeExecutor<'a, D: UiDriver> {
    positions: &'a PositionMap,
    driver: D,
}

impl<'a, D: UiDriver> TradeExecutor<'a, D> {
    pub fn new(positions: &'a PositionMap, driver: D) -> Self {
        Self { positions, driver }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Run the request: a single attempt, or `repeat` sequential attempts
    /// with a randomized pause in between. Stops on the first failure
    /// without starting the remaining repeats.
    pub fn run(&mut self, request: &TradeRequest) -> ExecutionSummary {
        let mut summary = ExecutionSummary::default();

        if request.repeat > 1 {
            info!(
                "Executing the same {} order for {} shares {} times",
                request.action, request.amount, request.repeat
            );
            for i in 0..request.repeat {
                info!(
                    "Executing order {}/{} for {} shares",
                    i + 1,
                    request.repeat,
                    request.amount
                );
                summary.attempted += 1;
                if !self.execute_attempt(request) {
                    warn!("Failed at repeat {}. Stopping.", i + 1);
                    break;
                }
                summary.succeeded += 1;

                if i < request.repeat - 1 {
                    let pause = uniform_secs(request.pause.min_secs, request.pause.max_secs);
                    info!(
                        "Pausing for {:.2} seconds before next repeat...",
                        pause.as_secs_f64()
                    );
                    self.driver.sleep(pause);
                }
            }
        } else {
            summary.attempted = 1;
            if self.execute_attempt(request) {
                summary.succeeded = 1;
            }
        }

        summary
    }

    /// One full pass through the step sequence. The attempt boundary: any
    /// step error lands here, gets logged, and becomes a failed attempt.
    fn execute_attempt(&mut self, request: &TradeRequest) -> bool {
        info!(
            "Executing {} order: {} shares of {} as {} order",
            request.action, request.amount, request.ticker, request.order
        );

        match self.place_order(request) {
            Ok(()) => true,
            Err(err) => {
                error!("Error executing trade: {}", err);
                false
            }
        }
    }

    fn place_order(&mut self, request: &TradeRequest) -> Result<(), BotError> {
        self.select_trade_type(request)?;
        self.select_account(request)?;
        self.select_ticker(request)?;
        self.select_action(request)?;
        self.enter_amount(request)?;
        self.select_order_type(request)?;
        self.select_session(request)?;
        self.submit_order()
    }

    /// Step 1: the trade-type button is clicked twice; the first click only
    /// focuses the pane in some window states.
    fn select_trade_type(&mut self, request: &TradeRequest) -> Result<(), BotError> {
        let pos = self.positions.get(request.trade_type.position_key())?;
        self.driver.click(pos, 2)
    }

    /// Step 2: open the account dropdown, pick the entry.
    fn select_account(&mut self, request: &TradeRequest) -> Result<(), BotError> {
        let dropdown = self.positions.get("account_dropdown")?;
        let entry = self.positions.get(request.account.position_key())?;
        self.driver.click(dropdown, 1)?;
        self.driver.pause(0.05, 0.4);
        self.driver.click(entry, 1)?;
        self.driver.pause(0.15, 0.3);
        Ok(())
    }

    /// Step 3: type the ticker and confirm with enter, then let it load.
    fn select_ticker(&mut self, request: &TradeRequest) -> Result<(), BotError> {
        let pos = self.positions.get("ticker_box")?;
        self.driver.click(pos, 1)?;
        self.driver.type_text(&request.ticker, true)?;
        self.driver.pause(0.25, 0.5);
        Ok(())
    }

    /// Step 4: buy or sell.
    fn select_action(&mut self, request: &TradeRequest) -> Result<(), BotError> {
        let pos = self.positions.get(request.action.position_key())?;
        self.driver.click(pos, 1)?;
        self.driver.pause(0.15, 0.3);
        Ok(())
    }

    /// Step 5: whole share count, no enter (the field confirms on blur).
    fn enter_amount(&mut self, request: &TradeRequest) -> Result<(), BotError> {
        let pos = self.positions.get("amount_box")?;
        self.driver.click(pos, 1)?;
        self.driver.type_text(&request.amount.to_string(), false)?;
        self.driver.pause(0.15, 0.3);
        Ok(())
    }

    /// Step 6: market or limit; a limit order also fills in its price.
    fn select_order_type(&mut self, request: &TradeRequest) -> Result<(), BotError> {
        match request.order {
            OrderKind::Market => {
                let pos = self.positions.get("market_order")?;
                self.driver.click(pos, 1)?;
            }
            OrderKind::Limit { price } => {
                let pos = self.positions.get("limit_order")?;
                self.driver.click(pos, 1)?;
                // The limit-price field takes a moment to appear.
                self.driver.pause(0.2, 0.4);
                let price_box = self.positions.get("limit_price_box")?;
                self.driver.click(price_box, 1)?;
                self.driver.type_text(&format!("{:.2}", price), true)?;
            }
        }
        self.driver.pause(0.15, 0.3);
        Ok(())
    }

    /// Step 7: trading-session duration, Day+ for extended hours, plain Day
    /// otherwise. Always selected explicitly rather than trusting the UI's
    /// remembered state.
    fn select_session(&mut self, request: &TradeRequest) -> Result<(), BotError> {
        let dropdown = self.positions.get("day_dropdown")?;
        let option = if request.extended_hours {
            self.positions.get("day_plus_option")?
        } else {
            self.positions.get("day_option")?
        };
        self.driver.click(dropdown, 1)?;
        self.driver.pause(0.15, 0.3);
        self.driver.click(option, 1)?;
        self.driver.pause(0.15, 0.3);
        Ok(())
    }

    /// Step 8: submit. The interface returns to the order screen by itself.
    fn submit_order(&mut self) -> Result<(), BotError> {
        let pos = self.positions.get("place_order_button")?;
        self.driver.click(pos, 1)
    }
}
