// src/input/driver.rs
//! Synthetic mouse/keyboard output behind a trait so the step sequence can be
//! exercised in tests without touching the real desktop.

use crate::config::Point;
use crate::error::BotError;
use crate::input::{human_delay, uniform_secs};
use enigo::{Button, Coordinate, Direction, Enigo, Key, Keyboard, Mouse, Settings};
use std::time::Duration;

/// All UI output the executor performs. One implementation drives the real
/// desktop; tests substitute a scripted recorder.
pub trait UiDriver {
    /// Move focus to `at` and left-click `times` times.
    fn click(&mut self, at: Point, times: u32) -> Result<(), BotError>;

    /// Type literal text into the focused field, optionally pressing enter.
    fn type_text(&mut self, text: &str, press_enter: bool) -> Result<(), BotError>;

    /// Randomized short pause between steps (human pacing).
    fn pause(&mut self, min_s: f64, max_s: f64);

    /// Literal sleep, used by the repeat orchestration between attempts.
    fn sleep(&mut self, duration: Duration);
}

/// Production driver backed by `enigo`.
pub struct EnigoDriver {
    enigo: Enigo,
}

impl EnigoDriver {
    pub fn new() -> Result<Self, BotError> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|err| BotError::Input(format!("failed to open input connection: {err}")))?;
        Ok(Self { enigo })
    }
}

impl UiDriver for EnigoDriver {
    fn click(&mut self, at: Point, times: u32) -> Result<(), BotError> {
        self.enigo
            .move_mouse(at.x, at.y, Coordinate::Abs)
            .map_err(|err| BotError::Input(format!("mouse move failed: {err}")))?;
        human_delay(0.05, 0.1);

        for _ in 0..times {
            self.enigo
                .button(Button::Left, Direction::Click)
                .map_err(|err| BotError::Input(format!("click failed: {err}")))?;
            human_delay(0.01, 0.05);
        }
        Ok(())
    }

    fn type_text(&mut self, text: &str, press_enter: bool) -> Result<(), BotError> {
        // Per-character typing with a jittered interval; one text() call per
        // keystroke keeps the pacing visible to the target application.
        for ch in text.chars() {
            let mut buf = [0u8; 4];
            self.enigo
                .text(ch.encode_utf8(&mut buf))
                .map_err(|err| BotError::Input(format!("typing failed: {err}")))?;
            std::thread::sleep(uniform_secs(0.02, 0.05));
        }

        if press_enter {
            human_delay(0.05, 0.15);
            self.enigo
                .key(Key::Return, Direction::Click)
                .map_err(|err| BotError::Input(format!("enter failed: {err}")))?;
        }
        human_delay(0.05, 0.15);
        Ok(())
    }

    fn pause(&mut self, min_s: f64, max_s: f64) {
        human_delay(min_s, max_s);
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
