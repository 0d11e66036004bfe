use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Event handler for terminal events
///
/// Polls at the configured tick rate normally, and at the animation rate
/// while a scroll or typewriter animation needs smooth frames.
pub struct EventHandler {
    tick_rate: Duration,
    animation_tick: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_tick: Duration::from_millis(16),
        }
    }

    /// Create with a separate, faster poll rate for animation frames.
    /// The tick is clamped to at least 1ms so the poll never busy-spins.
    pub fn with_animation_fps(tick_rate_ms: u64, animation_fps: u16) -> Self {
        let animation_tick = if animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis((1000 / animation_fps as u64).max(1))
        };
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_tick,
        }
    }

    /// Poll for the next event at the normal tick rate
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll for the next event at the animation tick rate
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_tick)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_tick_never_zero() {
        let handler = EventHandler::with_animation_fps(100, 5000);
        assert_eq!(handler.animation_tick, Duration::from_millis(1));

        let fallback = EventHandler::with_animation_fps(100, 0);
        assert_eq!(fallback.animation_tick, Duration::from_millis(16));
    }
}
