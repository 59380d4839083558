//! Intensity-to-shade quantization.
//!
//! Samples arrive on a scale where 0 is the lightest value. A sample is
//! inverted around 16 and clamped so that 0 still lands on the lightest of
//! the sixteen gray levels, then rendered as a three-digit hex color.

use std::fmt;

use serde::Serialize;

const INVERSION_PIVOT: u64 = 16;
const MAX_SHADE: u64 = 15;

/// Gray level after inversion. Nominally 0..=15; samples outside the
/// nominal range produce larger values and are carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shade(u64);

impl Shade {
    pub const BLACK: Shade = Shade(0);
    pub const WHITE: Shade = Shade(MAX_SHADE);

    pub fn from_sample(sample: i64) -> Self {
        let inverted = sample.abs_diff(INVERSION_PIVOT as i64);
        if inverted == INVERSION_PIVOT {
            Shade(MAX_SHADE)
        } else {
            Shade(inverted)
        }
    }

    pub fn level(self) -> u64 {
        self.0
    }

    pub fn is_nominal(self) -> bool {
        self.0 <= MAX_SHADE
    }

    pub fn color(self) -> Color {
        let digit = format!("{:x}", self.0);
        Color(format!("#{digit}{digit}{digit}"))
    }
}

/// CSS-style color text, e.g. `#888`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the color the way a CSS parser would: `#rgb` and `#rrggbb`
    /// are accepted, anything else is not a color.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.0.strip_prefix('#')?;
        match hex.len() {
            3 => {
                let mut channels = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some((channels.next()??, channels.next()??, channels.next()??))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
                Some((channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
