use crate::{Error, Result};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn from_hour(hour: u8) -> Self {
        if hour < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reading of the wall clock, in 24 hour time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSample {
    hour: u8,
    minute: u8,
    second: u8,
    meridiem: Meridiem,
}

impl TimeSample {
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(Error::InvalidTime {
                hour: hour.into(),
                minute: minute.into(),
                second: second.into(),
            });
        }

        Ok(TimeSample {
            hour,
            minute,
            second,
            meridiem: Meridiem::from_hour(hour),
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }
}

/// Anything that can tell the current time of day.
pub trait TimeSource {
    fn sample(&self) -> Result<TimeSample>;
}
