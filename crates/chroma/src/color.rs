//! Color types for chat markup.
//!
//! The legacy palette is the fixed 16-color set addressed by the single code
//! characters `0-9a-f`. RGB values outside it are either emitted as
//! true-color sequences or quantized to the nearest palette entry.

use bitflags::bitflags;

use crate::error::ColorError;

/// The marker character rendered output places before a code letter.
pub const MARKER: char = '§';

/// The alternate marker accepted in authored text.
pub const ALT_MARKER: char = '&';

/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse exactly six hex digits (no `#` prefix, case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("FF5733").unwrap(), Rgb::new(255, 87, 51));
    /// assert!(Rgb::from_hex("12345").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }
        let value =
            u32::from_str_radix(hex, 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))?;
        Ok(Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }

    /// Convert an HSB triple to RGB.
    ///
    /// All components are fractions in `0.0..=1.0`; hue wraps around.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        let scale = |v: f32| (v * 255.0 + 0.5) as u8;
        if saturation <= 0.0 {
            let v = scale(brightness);
            return Self::new(v, v, v);
        }
        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));
        let (r, g, b) = match h as u32 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };
        Self::new(scale(r), scale(g), scale(b))
    }

    /// Lowercase hex digits of this color, `rrggbb`.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One of the 16 fixed legacy palette colors, in palette order `0..f`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegacyColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl LegacyColor {
    /// Palette iteration order. Quantizer ties resolve to the earliest entry.
    pub const ALL: [LegacyColor; 16] = [
        LegacyColor::Black,
        LegacyColor::DarkBlue,
        LegacyColor::DarkGreen,
        LegacyColor::DarkAqua,
        LegacyColor::DarkRed,
        LegacyColor::DarkPurple,
        LegacyColor::Gold,
        LegacyColor::Gray,
        LegacyColor::DarkGray,
        LegacyColor::Blue,
        LegacyColor::Green,
        LegacyColor::Aqua,
        LegacyColor::Red,
        LegacyColor::LightPurple,
        LegacyColor::Yellow,
        LegacyColor::White,
    ];

    /// The single-character code for this color.
    pub const fn code(self) -> char {
        match self {
            LegacyColor::Black => '0',
            LegacyColor::DarkBlue => '1',
            LegacyColor::DarkGreen => '2',
            LegacyColor::DarkAqua => '3',
            LegacyColor::DarkRed => '4',
            LegacyColor::DarkPurple => '5',
            LegacyColor::Gold => '6',
            LegacyColor::Gray => '7',
            LegacyColor::DarkGray => '8',
            LegacyColor::Blue => '9',
            LegacyColor::Green => 'a',
            LegacyColor::Aqua => 'b',
            LegacyColor::Red => 'c',
            LegacyColor::LightPurple => 'd',
            LegacyColor::Yellow => 'e',
            LegacyColor::White => 'f',
        }
    }

    /// The RGB value this palette entry renders as.
    pub const fn rgb(self) -> Rgb {
        match self {
            LegacyColor::Black => Rgb::new(0x00, 0x00, 0x00),
            LegacyColor::DarkBlue => Rgb::new(0x00, 0x00, 0xaa),
            LegacyColor::DarkGreen => Rgb::new(0x00, 0xaa, 0x00),
            LegacyColor::DarkAqua => Rgb::new(0x00, 0xaa, 0xaa),
            LegacyColor::DarkRed => Rgb::new(0xaa, 0x00, 0x00),
            LegacyColor::DarkPurple => Rgb::new(0xaa, 0x00, 0xaa),
            LegacyColor::Gold => Rgb::new(0xff, 0xaa, 0x00),
            LegacyColor::Gray => Rgb::new(0xaa, 0xaa, 0xaa),
            LegacyColor::DarkGray => Rgb::new(0x55, 0x55, 0x55),
            LegacyColor::Blue => Rgb::new(0x55, 0x55, 0xff),
            LegacyColor::Green => Rgb::new(0x55, 0xff, 0x55),
            LegacyColor::Aqua => Rgb::new(0x55, 0xff, 0xff),
            LegacyColor::Red => Rgb::new(0xff, 0x55, 0x55),
            LegacyColor::LightPurple => Rgb::new(0xff, 0x55, 0xff),
            LegacyColor::Yellow => Rgb::new(0xff, 0xff, 0x55),
            LegacyColor::White => Rgb::new(0xff, 0xff, 0xff),
        }
    }

    /// Look up a palette entry by its code character (case-insensitive).
    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        LegacyColor::ALL.into_iter().find(|c| c.code() == code)
    }
}

/// Map an arbitrary RGB triple to the nearest legacy palette entry.
///
/// Distance is squared Euclidean in RGB space. The first minimum in palette
/// order wins, so the result is deterministic for any 24-bit input.
///
/// # Examples
///
/// ```
/// use chroma::{nearest, LegacyColor, Rgb};
///
/// assert_eq!(nearest(Rgb::new(250, 80, 80)), LegacyColor::Red);
/// ```
pub fn nearest(color: Rgb) -> LegacyColor {
    let mut best = LegacyColor::Black;
    let mut best_distance = u32::MAX;
    for candidate in LegacyColor::ALL {
        let entry = candidate.rgb();
        let dr = i32::from(color.r) - i32::from(entry.r);
        let dg = i32::from(color.g) - i32::from(entry.g);
        let db = i32::from(color.b) - i32::from(entry.b);
        let distance = (dr * dr + dg * dg + db * db) as u32;
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

bitflags! {
    /// Legacy special-formatting codes (`k`-`o`).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Format: u8 {
        const OBFUSCATED = 1;
        const BOLD = 1 << 1;
        const STRIKETHROUGH = 1 << 2;
        const UNDERLINE = 1 << 3;
        const ITALIC = 1 << 4;
    }
}

impl Format {
    const CODES: [(Format, char); 5] = [
        (Format::OBFUSCATED, 'k'),
        (Format::BOLD, 'l'),
        (Format::STRIKETHROUGH, 'm'),
        (Format::UNDERLINE, 'n'),
        (Format::ITALIC, 'o'),
    ];

    /// Look up a formatting flag by code character (case-insensitive).
    pub fn from_code(code: char) -> Option<Format> {
        let code = code.to_ascii_lowercase();
        Format::CODES
            .into_iter()
            .find(|(_, c)| *c == code)
            .map(|(flag, _)| flag)
    }

    /// Append the `§x` code pair of every set flag to `out`.
    pub fn write_codes(self, out: &mut String) {
        for (flag, code) in Format::CODES {
            if self.contains(flag) {
                out.push(MARKER);
                out.push(code);
            }
        }
    }
}
