use chrono::{offset::Local, Timelike};
use glyphclock::{TimeSample, TimeSource};
use is_terminal::IsTerminal;
use std::io;
use std::sync::atomic;

pub mod controller;
pub mod render;

pub use controller::{Controller, DisplayOptions, Interrupt, State, Tick, Ticker};
pub use render::Renderer;

pub type Result<T> = ::std::result::Result<T, Error>;

/// Width assumed when stdout is not a terminal.
pub const FALLBACK_COLUMNS: usize = 80;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Clock(#[from] glyphclock::Error),
    #[error("Unable to query the terminal size")]
    TerminalSize,
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("Signal handler error: {0}")]
    Signal(#[from] ctrlc::Error),
}

/// The system's local wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn sample(&self) -> glyphclock::Result<TimeSample> {
        let now = Local::now();

        TimeSample::new(
            now.hour().try_into()?,
            now.minute().try_into()?,
            now.second().try_into()?,
        )
    }
}

/// Source of the current output width in columns.
pub trait Columns {
    fn columns(&self) -> Result<usize>;
}

/// A fixed width.
impl Columns for usize {
    fn columns(&self) -> Result<usize> {
        Ok(*self)
    }
}

/// Width of the terminal attached to stdout, queried on every call.
#[derive(Debug, Default)]
pub struct TerminalColumns {
    warned: atomic::AtomicBool,
}

impl Columns for TerminalColumns {
    fn columns(&self) -> Result<usize> {
        if !io::stdout().is_terminal() {
            if !self.warned.swap(true, atomic::Ordering::Relaxed) {
                log::warn!(
                    "stdout is not a terminal, centering to {} columns",
                    FALLBACK_COLUMNS
                );
            }

            return Ok(FALLBACK_COLUMNS);
        }

        match terminal_size::terminal_size() {
            Some((terminal_size::Width(w), _)) => Ok(w.into()),
            None => Err(Error::TerminalSize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_clock() {
        let sample = LocalClock.sample().unwrap();

        assert!(sample.hour() < 24);
        assert!(sample.minute() < 60);
        assert!(sample.second() < 60);
    }

    #[test]
    fn fixed_columns() {
        assert_eq!(80usize.columns().unwrap(), 80);
    }
}
