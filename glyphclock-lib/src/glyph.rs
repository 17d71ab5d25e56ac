//! Clock-face glyphs.
//!
//! Unicode has a face for every full and every half hour, 24 in total.
//! [`glyph_for`] picks one for a time of day. The half hour face is shown
//! from minute 29 onwards.
use std::fmt;

/// First minute showing the half hour face.
const HALF_HOUR: u8 = 29;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClockGlyph {
    OneOclock,
    TwoOclock,
    ThreeOclock,
    FourOclock,
    FiveOclock,
    SixOclock,
    SevenOclock,
    EightOclock,
    NineOclock,
    TenOclock,
    ElevenOclock,
    TwelveOclock,
    OneThirty,
    TwoThirty,
    ThreeThirty,
    FourThirty,
    FiveThirty,
    SixThirty,
    SevenThirty,
    EightThirty,
    NineThirty,
    TenThirty,
    ElevenThirty,
    TwelveThirty,
}

use ClockGlyph::*;

/// Indexed by `[hour - 1][half]`.
const TABLE: [[ClockGlyph; 2]; 12] = [
    [OneOclock, OneThirty],
    [TwoOclock, TwoThirty],
    [ThreeOclock, ThreeThirty],
    [FourOclock, FourThirty],
    [FiveOclock, FiveThirty],
    [SixOclock, SixThirty],
    [SevenOclock, SevenThirty],
    [EightOclock, EightThirty],
    [NineOclock, NineThirty],
    [TenOclock, TenThirty],
    [ElevenOclock, ElevenThirty],
    [TwelveOclock, TwelveThirty],
];

impl ClockGlyph {
    pub const ALL: [ClockGlyph; 24] = [
        OneOclock, TwoOclock, ThreeOclock, FourOclock, FiveOclock, SixOclock,
        SevenOclock, EightOclock, NineOclock, TenOclock, ElevenOclock, TwelveOclock,
        OneThirty, TwoThirty, ThreeThirty, FourThirty, FiveThirty, SixThirty,
        SevenThirty, EightThirty, NineThirty, TenThirty, ElevenThirty, TwelveThirty,
    ];

    pub fn as_char(self) -> char {
        match self {
            OneOclock => '\u{1F550}',
            TwoOclock => '\u{1F551}',
            ThreeOclock => '\u{1F552}',
            FourOclock => '\u{1F553}',
            FiveOclock => '\u{1F554}',
            SixOclock => '\u{1F555}',
            SevenOclock => '\u{1F556}',
            EightOclock => '\u{1F557}',
            NineOclock => '\u{1F558}',
            TenOclock => '\u{1F559}',
            ElevenOclock => '\u{1F55A}',
            TwelveOclock => '\u{1F55B}',
            OneThirty => '\u{1F55C}',
            TwoThirty => '\u{1F55D}',
            ThreeThirty => '\u{1F55E}',
            FourThirty => '\u{1F55F}',
            FiveThirty => '\u{1F560}',
            SixThirty => '\u{1F561}',
            SevenThirty => '\u{1F562}',
            EightThirty => '\u{1F563}',
            NineThirty => '\u{1F564}',
            TenThirty => '\u{1F565}',
            ElevenThirty => '\u{1F566}',
            TwelveThirty => '\u{1F567}',
        }
    }
}

impl fmt::Display for ClockGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Select the clock face for `hour` (0..=23) and `minute` (0..=59).
///
/// Hours wrap onto a 12 hour dial, so 0 and 12 both show twelve o'clock and
/// 13 shows one o'clock. Values above the valid range are reduced the same
/// way rather than rejected.
pub fn glyph_for(hour: u8, minute: u8) -> ClockGlyph {
    let index = (usize::from(hour) + 11) % 12;
    let half = (HALF_HOUR..=59).contains(&minute);

    TABLE[index][usize::from(half)]
}
