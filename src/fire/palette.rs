//! Fixed color ramp indexed by intensity

use super::MAX_INTENSITY;
use crate::error::FireError;
use std::ops::Index;

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(s: &str) -> Result<Self, FireError> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FireError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| FireError::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

const fn hex(v: u32) -> Rgb {
    Rgb::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// Number of entries a palette must hold
pub const PALETTE_LEN: usize = MAX_INTENSITY as usize + 1;

// Black through red, orange and yellow to white.
#[rustfmt::skip]
const DOOM: [Rgb; PALETTE_LEN] = [
    hex(0x070707), hex(0x1f0707), hex(0x2f0f07), hex(0x470f07),
    hex(0x571707), hex(0x671f07), hex(0x771f07), hex(0x8f2707),
    hex(0x9f2f07), hex(0xaf3f07), hex(0xbf4707), hex(0xc74707),
    hex(0xdf4f07), hex(0xdf5707), hex(0xdf5707), hex(0xd75f07),
    hex(0xd7670f), hex(0xcf6f0f), hex(0xcf770f), hex(0xcf7f0f),
    hex(0xcf8717), hex(0xc78717), hex(0xc78f17), hex(0xc7971f),
    hex(0xbf9f1f), hex(0xbf9f1f), hex(0xbfa727), hex(0xbfa727),
    hex(0xbfaf2f), hex(0xb7af2f), hex(0xb7b72f), hex(0xb7b737),
    hex(0xcfcf6f), hex(0xdfdf9f), hex(0xefefc7), hex(0xffffff),
];

/// Ordered colors, index 0 coolest, index `MAX_INTENSITY` hottest.
///
/// Always holds exactly `MAX_INTENSITY + 1` entries, so any in-range
/// intensity is a valid index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_LEN],
}

impl Palette {
    /// The classic doom fire ramp
    pub fn doom() -> Self {
        Self { colors: DOOM }
    }

    pub fn from_colors(colors: Vec<Rgb>) -> Result<Self, FireError> {
        let actual = colors.len();
        let colors: [Rgb; PALETTE_LEN] = colors
            .try_into()
            .map_err(|_| FireError::PaletteLength { expected: PALETTE_LEN, actual })?;
        Ok(Self { colors })
    }

    /// Build a palette from `#rrggbb` strings, coolest first
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, FireError> {
        let parsed = colors
            .iter()
            .map(|c| Rgb::from_hex(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_colors(parsed)
    }

    pub fn color(&self, intensity: u8) -> Rgb {
        self.colors[intensity as usize]
    }

}

impl Default for Palette {
    fn default() -> Self {
        Self::doom()
    }
}

impl Index<u8> for Palette {
    type Output = Rgb;

    fn index(&self, intensity: u8) -> &Rgb {
        &self.colors[intensity as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doom_palette_runs_from_near_black_to_white() {
        let palette = Palette::doom();
        assert_eq!(palette.colors.len(), PALETTE_LEN);
        assert_eq!(palette[0], Rgb::new(0x07, 0x07, 0x07));
        assert_eq!(palette[MAX_INTENSITY], Rgb::new(0xff, 0xff, 0xff));
        assert_eq!(palette.color(12), Rgb::new(0xdf, 0x4f, 0x07));
    }

    #[test]
    fn parse_hex_colors() {
        assert_eq!(Rgb::from_hex("#DF4F07").unwrap(), Rgb::new(0xdf, 0x4f, 0x07));
        assert_eq!(Rgb::from_hex("ffffff").unwrap(), Rgb::new(255, 255, 255));
        assert!(matches!(Rgb::from_hex("#fff"), Err(FireError::InvalidColor(_))));
        assert!(matches!(Rgb::from_hex("#gg0000"), Err(FireError::InvalidColor(_))));
    }

    #[test]
    fn palette_length_is_enforced() {
        let short = vec!["#000000"; 12];
        assert_eq!(
            Palette::from_hex(&short),
            Err(FireError::PaletteLength { expected: 36, actual: 12 })
        );

        let gray: Vec<String> = (0..36).map(|i| format!("#{0:02x}{0:02x}{0:02x}", i * 7)).collect();
        let palette = Palette::from_hex(&gray).unwrap();
        assert_eq!(palette[35], Rgb::new(245, 245, 245));
    }
}
