//! Keyboard-driven run control
//!
//! Waits out each interval by polling for terminal events, so the user can
//! quit at any time instead of only between generations.

use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use chroma_life_core::RunControl;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Whether a key press asks to leave the simulation
#[must_use]
pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// [`RunControl`] that stops on Esc, `q`, or Ctrl-C
#[derive(Debug, Default)]
pub struct KeyboardControl {
    quit: bool,
}

impl KeyboardControl {
    /// Create a control that has not seen a quit key yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a quit key has been read
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Feed one terminal event
    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Key(key) = event {
            if is_quit_key(key) {
                tracing::info!(code = ?key.code, "Quit requested");
                self.quit = true;
            }
        }
    }

    fn wait(&mut self, interval: Duration) -> std::io::Result<()> {
        let deadline = Instant::now() + interval;
        while !self.quit {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            let event = event::read()?;
            self.handle_event(&event);
        }
        Ok(())
    }
}

impl RunControl for KeyboardControl {
    fn pause(&mut self, interval: Duration) -> ControlFlow<()> {
        if let Err(e) = self.wait(interval) {
            tracing::error!(error = %e, "Terminal event read failed, stopping");
            self.quit = true;
        }

        if self.quit {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_keys() {
        for event in [
            press(KeyCode::Esc, KeyModifiers::NONE),
            press(KeyCode::Char('q'), KeyModifiers::NONE),
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut control = KeyboardControl::new();
            control.handle_event(&event);
            assert!(control.quit_requested(), "{event:?}");
        }
    }

    #[test]
    fn test_other_input_is_ignored() {
        let mut control = KeyboardControl::new();
        control.handle_event(&press(KeyCode::Char('c'), KeyModifiers::NONE));
        control.handle_event(&press(KeyCode::Enter, KeyModifiers::NONE));
        control.handle_event(&Event::Resize(80, 24));
        control.handle_event(&Event::FocusLost);

        assert!(!control.quit_requested());
    }

    #[test]
    fn test_key_release_does_not_quit() {
        let release = KeyEvent {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(!is_quit_key(&release));
    }

    #[test]
    fn test_pause_breaks_once_quit_seen() {
        let mut control = KeyboardControl::new();
        control.handle_event(&press(KeyCode::Esc, KeyModifiers::NONE));
        assert!(control.pause(Duration::from_secs(3600)).is_break());
    }
}
