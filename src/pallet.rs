use core::fmt;
use core::str::FromStr;

use smart_leds::RGB8;

#[cfg(feature = "rtt")]
use rtt_target::rprintln;

/// One LED color with its channels stored in wire order (green, red, blue).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grb {
    pub g: u8,
    pub r: u8,
    pub b: u8,
}

impl Grb {
    pub const fn new(g: u8, r: u8, b: u8) -> Self {
        Self { g, r, b }
    }

    /// Channels in the order the LED expects them.
    pub const fn channels(&self) -> [u8; 3] {
        [self.g, self.r, self.b]
    }

    pub const fn as_rgb(&self) -> RGB8 {
        RGB8::new(self.r, self.g, self.b)
    }
}

impl From<Grb> for [u8; 3] {
    fn from(color: Grb) -> Self {
        color.channels()
    }
}

impl From<Grb> for RGB8 {
    fn from(color: Grb) -> Self {
        color.as_rgb()
    }
}

pub const RED: Grb = Grb::new(0, 255, 0);
pub const GREEN: Grb = Grb::new(255, 0, 0);
pub const BLUE: Grb = Grb::new(0, 0, 255);

pub const YELLOW: Grb = Grb::new(255, 255, 0);
pub const CYAN: Grb = Grb::new(255, 0, 255);
pub const MAGENTA: Grb = Grb::new(0, 255, 255);
pub const WHITE: Grb = Grb::new(255, 255, 255);
pub const BLACK: Grb = Grb::new(0, 0, 0);

// extras
pub const VIOLET: Grb = Grb::new(0, 128, 128);
pub const OLIVE: Grb = Grb::new(128, 128, 0);
pub const LIGHT_BLUE: Grb = Grb::new(0, 0, 200);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Colors {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
    Black,
    Violet,
    Olive,
    LightBlue,
}

impl Colors {
    pub const ALL: [Colors; 11] = [
        Colors::Red,
        Colors::Green,
        Colors::Blue,
        Colors::Yellow,
        Colors::Cyan,
        Colors::Magenta,
        Colors::White,
        Colors::Black,
        Colors::Violet,
        Colors::Olive,
        Colors::LightBlue,
    ];

    pub const fn as_grb(&self) -> Grb {
        match *self {
            Colors::Red => RED,
            Colors::Green => GREEN,
            Colors::Blue => BLUE,
            Colors::Yellow => YELLOW,
            Colors::Cyan => CYAN,
            Colors::Magenta => MAGENTA,
            Colors::White => WHITE,
            Colors::Black => BLACK,
            Colors::Violet => VIOLET,
            Colors::Olive => OLIVE,
            Colors::LightBlue => LIGHT_BLUE,
        }
    }

    /// Logical color for `smart_leds` writers, which reorder to GRB themselves.
    pub const fn as_rgb(&self) -> RGB8 {
        self.as_grb().as_rgb()
    }

    pub const fn name(&self) -> &'static str {
        match *self {
            Colors::Red => "RED",
            Colors::Green => "GREEN",
            Colors::Blue => "BLUE",
            Colors::Yellow => "YELLOW",
            Colors::Cyan => "CYAN",
            Colors::Magenta => "MAGENTA",
            Colors::White => "WHITE",
            Colors::Black => "BLACK",
            Colors::Violet => "VIOLET",
            Colors::Olive => "OLIVE",
            Colors::LightBlue => "LIGHT_BLUE",
        }
    }

    /// Resolves a color by name.
    ///
    /// Case is ignored and `-`, `_` or a space may separate words, so
    /// `"light-blue"`, `"LIGHT_BLUE"` and `"Light Blue"` all match.
    pub fn from_name(name: &str) -> Result<Self, UnknownColorName> {
        let found = Self::ALL
            .iter()
            .copied()
            .find(|color| names_match(color.name(), name));

        match found {
            Some(color) => Ok(color),
            None => {
                #[cfg(feature = "rtt")]
                rprintln!("unknown color name: {:?}", name);
                Err(UnknownColorName)
            }
        }
    }
}

fn names_match(canonical: &str, candidate: &str) -> bool {
    let canonical = canonical.as_bytes();
    let candidate = candidate.as_bytes();
    if canonical.len() != candidate.len() {
        return false;
    }

    canonical.iter().zip(candidate).all(|(&want, &got)| match want {
        b'_' => matches!(got, b'_' | b'-' | b' '),
        _ => want.eq_ignore_ascii_case(&got),
    })
}

impl From<Colors> for Grb {
    fn from(color: Colors) -> Self {
        color.as_grb()
    }
}

impl From<Colors> for RGB8 {
    fn from(color: Colors) -> Self {
        color.as_rgb()
    }
}

impl FromStr for Colors {
    type Err = UnknownColorName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Colors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name any color in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownColorName;

impl fmt::Display for UnknownColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown color name")
    }
}

impl core::error::Error for UnknownColorName {}
