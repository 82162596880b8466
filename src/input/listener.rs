// src/input/listener.rs
//! Blocking "next pointer-press or skip-key" primitive used by the recorder.

use crate::error::BotError;
use log::warn;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

/// One observed capture event: either a real pointer press at absolute screen
/// coordinates, or the designated skip key (Esc).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    Click { x: i32, y: i32 },
    Skip,
}

/// Synchronous source of capture events. The recorder issues one blocking
/// request per prompt; no timeout, waits indefinitely.
pub trait CaptureSource {
    fn next_capture(&mut self) -> Result<Capture, BotError>;
}

/// Production capture source backed by `rdev`'s global input hook.
///
/// rdev's listener is process-global and cannot be torn down per prompt, so
/// one background thread feeds a channel for the recorder's whole lifetime.
/// Button events carry no coordinates, so the cursor is tracked from move
/// events inside the hook. Stale events queued between prompts are drained
/// before each wait, which keeps the one-capture-per-prompt modal semantics.
pub struct RdevCaptureSource {
    events: Receiver<Capture>,
}

impl RdevCaptureSource {
    pub fn spawn() -> Result<Self, BotError> {
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut cursor: (f64, f64) = (0.0, 0.0);
            let result = rdev::listen(move |event| match event.event_type {
                rdev::EventType::MouseMove { x, y } => cursor = (x, y),
                rdev::EventType::ButtonPress(rdev::Button::Left) => {
                    let _ = tx.send(Capture::Click {
                        x: cursor.0 as i32,
                        y: cursor.1 as i32,
                    });
                }
                rdev::EventType::KeyPress(rdev::Key::Escape) => {
                    let _ = tx.send(Capture::Skip);
                }
                _ => {}
            });
            if let Err(err) = result {
                warn!("Global input listener stopped: {:?}", err);
            }
        });

        Ok(Self { events: rx })
    }
}

impl CaptureSource for RdevCaptureSource {
    fn next_capture(&mut self) -> Result<Capture, BotError> {
        // Discard anything that arrived before this prompt went up.
        loop {
            match self.events.try_recv() {
                Ok(_) => {}
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    return Err(BotError::Listener(
                        "input listener thread terminated".to_string(),
                    ));
                }
            }
        }

        self.events
            .recv()
            .map_err(|_| BotError::Listener("input listener thread terminated".to_string()))
    }
}
