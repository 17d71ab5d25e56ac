use crate::{Columns, Result};
use glyphclock::palette::{CLEAR_FROM_CURSOR, CURSOR_HOME, HIDE_CURSOR, RESET, SHOW_CURSOR};
use glyphclock::{center, Color};
use std::io::Write;

/// Full-screen redraws of a single colored line.
///
/// The first frame hides the cursor. It stays hidden until
/// [`Renderer::restore_cursor`] is called or the renderer is dropped,
/// whichever comes first.
#[derive(Debug)]
pub struct Renderer<W: Write, C: Columns> {
    out: W,
    columns: C,
    color: Color,
    center: bool,
    cursor_hidden: bool,
}

impl<W: Write, C: Columns> Renderer<W, C> {
    pub fn new(out: W, columns: C, color: Color, center: bool) -> Self {
        Renderer {
            out,
            columns,
            color,
            center,
            cursor_hidden: false,
        }
    }

    pub fn render_frame(&mut self, line: &str) -> Result<()> {
        let line = if self.center {
            center(line, self.columns.columns()?)
        } else {
            line.to_owned()
        };

        write!(self.out, "{}{}{}", CURSOR_HOME, CLEAR_FROM_CURSOR, HIDE_CURSOR)?;
        self.cursor_hidden = true;

        writeln!(self.out, "{}{}{}", self.color.sequence(), line, RESET)?;
        self.out.flush()?;

        Ok(())
    }

    pub fn restore_cursor(&mut self) -> Result<()> {
        self.out.write_all(SHOW_CURSOR.as_bytes())?;
        self.out.flush()?;
        self.cursor_hidden = false;

        Ok(())
    }
}

impl<W: Write, C: Columns> Drop for Renderer<W, C> {
    fn drop(&mut self) {
        if self.cursor_hidden {
            if let Err(e) = self.restore_cursor() {
                log::error!("Unable to restore the cursor: {}", e);
            }
        }
    }
}
