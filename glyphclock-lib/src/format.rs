use crate::{ClockGlyph, TimeSample};

/// Format a clock line, e.g. `"🕙 10:05:09 AM"`.
pub fn format(sample: &TimeSample, glyph: ClockGlyph, show_seconds: bool) -> String {
    let mut line = format!("{} {:02}:{:02}", glyph, sample.hour(), sample.minute());

    if show_seconds {
        line.push_str(&format!(":{:02}", sample.second()));
    }

    line.push(' ');
    line.push_str(sample.meridiem().as_str());
    line
}

/// Pad `text` with spaces to `width` characters, text in the middle.
///
/// An odd amount of padding puts the extra space on the right. Text at least
/// as wide as `width` is returned as is.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();

    if len >= width {
        return text.to_owned();
    }

    let left = (width - len) / 2;
    let right = width - len - left;

    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
