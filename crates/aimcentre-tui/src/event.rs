use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events
///
/// Polls with the animation frame interval while the carousel moves and
/// with the slower tick rate otherwise.
pub struct EventHandler {
    tick_rate: Duration,
    frame_interval: Duration,
}

impl EventHandler {
    /// Handler whose poll interval drops to one frame at `fps` while animating
    pub fn with_animation_fps(tick_rate_ms: u64, fps: u32) -> Self {
        let frame_interval = if fps == 0 {
            Duration::from_millis(tick_rate_ms)
        } else {
            Duration::from_secs(1) / fps
        };
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            frame_interval: frame_interval.min(Duration::from_millis(tick_rate_ms)),
        }
    }

    pub fn poll_interval(&self, animating: bool) -> Duration {
        if animating {
            self.frame_interval
        } else {
            self.tick_rate
        }
    }

    /// Poll for the next event
    pub fn next(&self, animating: bool) -> Result<Option<AppEvent>> {
        if event::poll(self.poll_interval(animating))? {
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
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
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
    /// Pointer moved, clicked, dragged or scrolled
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Nothing happened within the poll interval
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_interval_follows_animation() {
        let handler = EventHandler::with_animation_fps(100, 60);
        assert_eq!(handler.poll_interval(false), Duration::from_millis(100));
        assert!(handler.poll_interval(true) < Duration::from_millis(17));
    }

    #[test]
    fn test_zero_fps_uses_tick_rate() {
        let handler = EventHandler::with_animation_fps(50, 0);
        assert_eq!(handler.poll_interval(true), Duration::from_millis(50));
        assert_eq!(handler.poll_interval(false), Duration::from_millis(50));
    }
}
