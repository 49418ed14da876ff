#![forbid(unsafe_code)]

//! The Elm-style program loop.
//!
//! An [`App`] is a model with two obligations: fold an [`Event`] into
//! itself (`update`), and draw itself into a fresh [`Frame`] (`view`).
//! [`Program::run`] owns everything else — the terminal session, the
//! poll/tick cadence, resize handling, and presentation with row diffing.
//! All updates happen on this single thread; a frame is presented after
//! every update, so any state change is on screen before the next event
//! is processed.

use std::time::{Duration, Instant};

use crate::buffer::Buffer;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::frame::Frame;
use crate::terminal::TerminalSession;

/// What an update asks the runtime to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    None,
    Quit,
}

/// A runnable model.
pub trait App {
    fn update(&mut self, event: Event) -> Cmd;
    fn view(&self, frame: &mut Frame);
}

#[derive(Debug, Clone, Copy)]
pub struct ProgramConfig {
    /// Poll timeout; when it elapses without input an [`Event::Tick`] is
    /// synthesized.
    pub tick: Duration,
    /// Quit unconditionally once this much wall time has passed. Used by
    /// automation; `None` in normal operation.
    pub exit_after: Option<Duration>,
    /// Smallest terminal the app can be laid out in.
    pub min_size: (u16, u16),
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(250),
            exit_after: None,
            min_size: (40, 10),
        }
    }
}

/// Drives an [`App`] against the live terminal.
#[derive(Debug, Default)]
pub struct Program {
    config: ProgramConfig,
}

impl Program {
    #[must_use]
    pub fn new(config: ProgramConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, app: &mut dyn App) -> Result<()> {
        let mut session = TerminalSession::new()?;
        let (mut width, mut height) = session.size()?;
        let (min_width, min_height) = self.config.min_size;
        if width < min_width || height < min_height {
            return Err(Error::TooSmall {
                width,
                height,
                min_width,
                min_height,
            });
        }
        tracing::debug!(message = "program.start", width, height);

        let started = Instant::now();
        let mut presented: Option<Buffer> = None;
        loop {
            let mut frame = Frame::new(width, height);
            app.view(&mut frame);
            session.present(&frame.buffer, presented.as_ref())?;
            presented = Some(frame.buffer);

            if let Some(deadline) = self.config.exit_after
                && started.elapsed() >= deadline
            {
                tracing::debug!(message = "program.exit_after");
                break;
            }

            let event = if crossterm::event::poll(self.config.tick)? {
                match Event::from_crossterm(crossterm::event::read()?) {
                    Some(event) => event,
                    None => continue,
                }
            } else {
                Event::Tick
            };

            if let Event::Resize(new_width, new_height) = event {
                width = new_width;
                height = new_height;
                // Size changed; the kept frame no longer matches.
                presented = None;
            }

            if app.update(event) == Cmd::Quit {
                tracing::debug!(message = "program.quit");
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_a_tick_and_a_floor() {
        let config = ProgramConfig::default();
        assert_eq!(config.tick, Duration::from_millis(250));
        assert!(config.exit_after.is_none());
        assert!(config.min_size.0 > 0 && config.min_size.1 > 0);
    }
}
