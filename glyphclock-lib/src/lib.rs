//! Building blocks of a terminal clock.
//!
//! Everything in this crate is pure: a [`TimeSample`] goes in, a clock-face
//! [`ClockGlyph`] and a formatted line come out, styled by a [`Color`].
//! Reading the clock and talking to the terminal is left to the caller.
//!
//! ```
//! use glyphclock::{format, glyph_for, TimeSample};
//!
//! let sample = TimeSample::new(10, 5, 9).unwrap();
//! let glyph = glyph_for(sample.hour(), sample.minute());
//!
//! assert_eq!(format(&sample, glyph, true), "\u{1F559} 10:05:09 AM");
//! ```
use std::num;

pub mod glyph;
pub mod palette;
pub mod time;

mod format;

pub use format::{center, format};
pub use glyph::{glyph_for, ClockGlyph};
pub use palette::{resolve, Color};
pub use time::{Meridiem, TimeSample, TimeSource};

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown color: {0}")]
    UnknownColor(String),
    #[error("Invalid time {hour}:{minute}:{second}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    #[error("Clock read error: {0}")]
    ClockRead(#[from] num::TryFromIntError),
}
