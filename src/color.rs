//! Stroke colors: hex (#RGB, #RGBA, #RRGGBB, #RRGGBBAA) and a few names.

use core::fmt;

/// sRGB color with alpha, 8 bits per channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Default minor-line color of the reference grid.
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Default major-spoke color of the reference grid.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Parse a stroke color.
    ///
    /// Hex digits with or without a leading `#`, in 3, 4, 6 or 8 digit
    /// form (short forms repeat each digit, missing alpha is opaque), or
    /// one of the names in [`NAMED`], case-insensitive.
    ///
    /// ```
    /// use mandala_layout::Color;
    ///
    /// assert_eq!(Color::parse("cyan"), Some(Color::CYAN));
    /// assert_eq!(Color::parse("#00f"), Some(Color::BLUE));
    /// assert_eq!(Color::parse("ff000080"), Some(Color::rgba(255, 0, 0, 128)));
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        from_hex(hex).or_else(|| from_name(s))
    }
}

/// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Color names accepted by [`Color::parse`]. The grid's stroke names plus
/// the common ones whose Tk and CSS values agree.
pub const NAMED: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("red", Color::rgb(255, 0, 0)),
    ("blue", Color::BLUE),
    ("cyan", Color::CYAN),
    ("magenta", Color::rgb(255, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("orange", Color::rgb(255, 165, 0)),
    ("gold", Color::rgb(255, 215, 0)),
    ("pink", Color::rgb(255, 192, 203)),
    ("navy", Color::rgb(0, 0, 128)),
];

fn from_name(name: &str) -> Option<Color> {
    NAMED
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, c)| c)
}

fn from_hex(hex: &str) -> Option<Color> {
    // from_str_radix alone would also take a sign
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let v = u32::from_str_radix(hex, 16).ok()?;
    let digit = |i: u32| ((v >> (4 * i)) & 0xf) as u8 * 0x11;
    let [r, g, b, a] = match hex.len() {
        3 => [digit(2), digit(1), digit(0), 0xff],
        4 => [digit(3), digit(2), digit(1), digit(0)],
        6 => {
            let [_, r, g, b] = v.to_be_bytes();
            [r, g, b, 0xff]
        }
        8 => v.to_be_bytes(),
        _ => return None,
    };
    Some(Color::rgba(r, g, b, a))
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn grid_defaults_resolve_by_name() {
        assert_eq!(Color::parse("cyan"), Some(Color::CYAN));
        assert_eq!(Color::parse("blue"), Some(Color::BLUE));
        assert_eq!(Color::parse("Black"), Some(Color::BLACK));
        assert_eq!(Color::parse(" NAVY "), Some(Color::rgb(0, 0, 128)));
    }

    #[test]
    fn hex_forms() {
        assert_eq!(Color::parse("#0af"), Some(Color::rgb(0, 170, 255)));
        assert_eq!(Color::parse("f008"), Some(Color::rgba(255, 0, 0, 136)));
        assert_eq!(Color::parse("#FF8000"), Some(Color::rgb(255, 128, 0)));
        assert_eq!(Color::parse("ff000080"), Some(Color::rgba(255, 0, 0, 128)));
    }

    #[test]
    fn names_are_unique_and_lowercase() {
        for (i, (name, _)) in NAMED.iter().enumerate() {
            assert_eq!(*name, name.to_ascii_lowercase());
            assert!(NAMED[i + 1..].iter().all(|(other, _)| other != name), "{name}");
        }
    }

    #[test]
    fn invalid_returns_none() {
        assert_eq!(Color::parse(""), None);
        assert_eq!(Color::parse("#"), None);
        assert_eq!(Color::parse("notacolor"), None);
        assert_eq!(Color::parse("zzz"), None);
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("+fff"), None);
        assert_eq!(Color::parse("#123456789"), None);
    }

    #[test]
    fn display_as_hex() {
        assert_eq!(Color::CYAN.to_string(), "#00ffff");
        assert_eq!(Color::rgba(255, 0, 0, 128).to_string(), "#ff000080");
    }

    #[test]
    fn display_parses_back() {
        for c in [Color::rgb(18, 52, 86), Color::rgba(1, 2, 3, 4)] {
            assert_eq!(Color::parse(&c.to_string()), Some(c));
        }
    }
}
