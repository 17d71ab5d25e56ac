use crate::{Columns, Renderer, Result};
use glyphclock::{format, glyph_for, Color, TimeSource};
use std::io::Write;
use std::sync::mpsc;
use std::time::Duration;

pub const EXIT_MESSAGE: &str = "Exiting clock...";

/// Time between two frames.
pub const TICK: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_seconds: bool,
    pub center: bool,
    pub color: Color,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            show_seconds: true,
            center: true,
            color: Color::BrightMagenta,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Elapsed,
    Interrupted,
}

/// Waits between frames and reports whether the user asked to quit.
pub trait Ticker {
    fn wait(&mut self, period: Duration) -> Tick;
}

/// Ctrl-C (and SIGTERM) delivered through a channel, so a pending wait
/// returns as soon as the signal arrives.
#[derive(Debug)]
pub struct Interrupt {
    rx: mpsc::Receiver<()>,
}

impl Interrupt {
    /// Install the process wide signal handler. Can only be done once.
    pub fn install() -> Result<Self> {
        let (tx, rx) = mpsc::channel();

        ctrlc::set_handler(move || {
            let _ = tx.send(());
        })?;

        Ok(Interrupt { rx })
    }
}

impl Ticker for Interrupt {
    fn wait(&mut self, period: Duration) -> Tick {
        match self.rx.recv_timeout(period) {
            Err(mpsc::RecvTimeoutError::Timeout) => Tick::Elapsed,
            Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => Tick::Interrupted,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    ShuttingDown,
}

pub struct Controller<S, T, W, C>
where
    S: TimeSource,
    T: Ticker,
    W: Write,
    C: Columns,
{
    source: S,
    ticker: T,
    renderer: Renderer<W, C>,
    show_seconds: bool,
    state: State,
}

impl<S, T, W, C> Controller<S, T, W, C>
where
    S: TimeSource,
    T: Ticker,
    W: Write,
    C: Columns,
{
    pub fn new(source: S, ticker: T, out: W, columns: C, options: DisplayOptions) -> Self {
        Controller {
            source,
            ticker,
            renderer: Renderer::new(out, columns, options.color, options.center),
            show_seconds: options.show_seconds,
            state: State::Running,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Draw one frame for the current time.
    pub fn tick(&mut self) -> Result<()> {
        let sample = self.source.sample()?;
        let glyph = glyph_for(sample.hour(), sample.minute());
        let line = format(&sample, glyph, self.show_seconds);

        log::debug!("frame: {}", line);
        self.renderer.render_frame(&line)
    }

    /// Redraw every [`TICK`] until interrupted, then say goodbye.
    ///
    /// Errors end the loop right away. The cursor is shown again in any case.
    pub fn run(&mut self) -> Result<()> {
        while self.state == State::Running {
            self.tick()?;

            if self.ticker.wait(TICK) == Tick::Interrupted {
                self.state = State::ShuttingDown;
            }
        }

        log::info!("Interrupted, shutting down");
        self.renderer.render_frame(EXIT_MESSAGE)?;
        self.renderer.restore_cursor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphclock::palette::{CLEAR_FROM_CURSOR, CURSOR_HOME, RESET, SHOW_CURSOR};
    use glyphclock::TimeSample;
    use std::cell::Cell;

    struct FixedClock(Cell<u8>);

    impl TimeSource for FixedClock {
        fn sample(&self) -> glyphclock::Result<TimeSample> {
            let second = self.0.get();
            self.0.set(second + 1);

            TimeSample::new(10, 5, second)
        }
    }

    struct BrokenClock;

    impl TimeSource for BrokenClock {
        fn sample(&self) -> glyphclock::Result<TimeSample> {
            TimeSample::new(25, 0, 0)
        }
    }

    /// Interrupts after `frames` waits.
    struct Countdown {
        frames: usize,
        waits: usize,
    }

    impl Countdown {
        fn new(frames: usize) -> Self {
            Countdown { frames, waits: 0 }
        }
    }

    impl Ticker for Countdown {
        fn wait(&mut self, period: Duration) -> Tick {
            assert_eq!(period, TICK);
            self.waits += 1;

            if self.waits >= self.frames {
                Tick::Interrupted
            } else {
                Tick::Elapsed
            }
        }
    }

    #[test]
    fn interrupt_after_two_frames() {
        let mut out = Vec::new();
        let options = DisplayOptions {
            show_seconds: true,
            center: false,
            color: Color::Green,
        };

        let mut controller =
            Controller::new(FixedClock(Cell::new(9)), Countdown::new(2), &mut out, 80usize, options);

        controller.run().unwrap();
        assert_eq!(controller.state(), State::ShuttingDown);
        drop(controller);

        let out = String::from_utf8(out).unwrap();
        let clear = format!("{}{}", CURSOR_HOME, CLEAR_FROM_CURSOR);

        assert_eq!(out.matches(&clear).count(), 3);
        assert!(out.contains("\x1b[32m\u{1F559} 10:05:09 AM\x1b[0m"));
        assert!(out.contains("\x1b[32m\u{1F559} 10:05:10 AM\x1b[0m"));
        assert!(out.contains(&format!("\x1b[32m{}{}", EXIT_MESSAGE, RESET)));
        assert!(out.ends_with(SHOW_CURSOR));
        assert_eq!(out.matches(SHOW_CURSOR).count(), 1);
    }

    #[test]
    fn centered_exit_message() {
        let mut out = Vec::new();
        let options = DisplayOptions {
            show_seconds: false,
            center: true,
            color: Color::Green,
        };

        Controller::new(FixedClock(Cell::new(0)), Countdown::new(1), &mut out, 36usize, options)
            .run()
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        let padded = format!("{}{}{}", " ".repeat(10), EXIT_MESSAGE, " ".repeat(10));

        assert!(out.contains(&format!("\x1b[32m{}\x1b[0m", padded)));
        assert!(!out.contains(":00 AM"));
    }

    #[test]
    fn clock_failure_skips_exit_message() {
        let mut out = Vec::new();
        let result =
            Controller::new(BrokenClock, Countdown::new(5), &mut out, 80usize, DisplayOptions::default())
                .run();

        assert!(result.is_err());
        assert!(!String::from_utf8(out).unwrap().contains(EXIT_MESSAGE));
    }

    #[test]
    fn channel_ticker() {
        let (tx, rx) = mpsc::channel();
        let mut ticker = Interrupt { rx };

        assert_eq!(ticker.wait(Duration::from_millis(1)), Tick::Elapsed);

        tx.send(()).unwrap();
        assert_eq!(ticker.wait(Duration::from_secs(60)), Tick::Interrupted);

        drop(tx);
        assert_eq!(ticker.wait(Duration::from_secs(60)), Tick::Interrupted);
    }
}
