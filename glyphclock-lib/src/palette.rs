//! ANSI colors and the few control sequences needed to redraw a screen.
use crate::{Error, Result};
use std::str;

pub const RESET: &str = "\x1b[0m";
pub const CURSOR_HOME: &str = "\x1b[H";
pub const CLEAR_FROM_CURSOR: &str = "\x1b[J";
pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    LightGray,
    DarkGray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    #[default]
    White,
}

const COLORS: [(&str, Color); 16] = [
    ("BLACK", Color::Black),
    ("RED", Color::Red),
    ("GREEN", Color::Green),
    ("YELLOW", Color::Yellow),
    ("BLUE", Color::Blue),
    ("MAGENTA", Color::Magenta),
    ("CYAN", Color::Cyan),
    ("LIGHT_GRAY", Color::LightGray),
    ("DARK_GRAY", Color::DarkGray),
    ("BRIGHT_RED", Color::BrightRed),
    ("BRIGHT_GREEN", Color::BrightGreen),
    ("BRIGHT_YELLOW", Color::BrightYellow),
    ("BRIGHT_BLUE", Color::BrightBlue),
    ("BRIGHT_MAGENTA", Color::BrightMagenta),
    ("BRIGHT_CYAN", Color::BrightCyan),
    ("WHITE", Color::White),
];

impl Color {
    pub const NAMES: [&'static str; 16] = {
        let mut names = [""; 16];
        let mut i = 0;
        while i < COLORS.len() {
            names[i] = COLORS[i].0;
            i += 1;
        }
        names
    };

    /// The foreground escape sequence for this color.
    pub fn sequence(self) -> &'static str {
        match self {
            Color::Black => "\x1b[30m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::LightGray => "\x1b[37m",
            Color::DarkGray => "\x1b[90m",
            Color::BrightRed => "\x1b[91m",
            Color::BrightGreen => "\x1b[92m",
            Color::BrightYellow => "\x1b[93m",
            Color::BrightBlue => "\x1b[94m",
            Color::BrightMagenta => "\x1b[95m",
            Color::BrightCyan => "\x1b[96m",
            Color::White => "\x1b[97m",
        }
    }

    pub fn name(self) -> &'static str {
        COLORS
            .iter()
            .find(|(_, color)| *color == self)
            .map(|(name, _)| *name)
            .unwrap_or("WHITE")
    }
}

impl str::FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();

        COLORS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, color)| *color)
            .ok_or_else(|| Error::UnknownColor(s.to_owned()))
    }
}

/// Resolve an optional color name. A missing or blank name gives the default
/// color, anything else must name a known color.
pub fn resolve(name: Option<&str>) -> Result<Color> {
    match name.map(str::trim) {
        None | Some("") => Ok(Color::default()),
        Some(name) => name.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive() {
        let green = resolve(Some("green")).unwrap();

        assert_eq!(resolve(Some("GREEN")).unwrap(), green);
        assert_eq!(resolve(Some("Green")).unwrap(), green);
        assert_eq!(green.sequence(), "\x1b[32m");
        assert_eq!(
            resolve(Some("bright-magenta")).unwrap(),
            Color::BrightMagenta
        );
        assert_eq!(resolve(Some("Bright_Magenta")).unwrap(), Color::BrightMagenta);
    }

    #[test]
    fn default_white() {
        assert_eq!(resolve(None).unwrap(), Color::White);
        assert_eq!(resolve(Some("")).unwrap(), Color::White);
        assert_eq!(resolve(Some("  ")).unwrap(), Color::White);
        assert_eq!(Color::White.sequence(), "\x1b[97m");
    }

    #[test]
    fn unknown_color() {
        match resolve(Some("chartreuse")) {
            Err(Error::UnknownColor(name)) => assert_eq!(name, "chartreuse"),
            other => panic!("expected unknown color, got {:?}", other),
        }
    }

    #[test]
    fn names_round_trip() {
        for name in Color::NAMES {
            let color: Color = name.parse().unwrap();
            assert_eq!(color.name(), name);
        }
    }
}
