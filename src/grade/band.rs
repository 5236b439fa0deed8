#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    /// 90 and above.
    A,
    /// 80 and above.
    B,
    /// 70 and above.
    C,
    /// 60 and above.
    D,
    /// Everything below 60.
    E,
}

impl Letter {
    /// The letter as a string slice.
    pub fn as_str(self) -> &'static str {
        match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
        }
    }

    /// Grade points on a 4.0 scale.
    pub fn points(self) -> f64 {
        match self {
            Letter::A => 4.0,
            Letter::B => 3.0,
            Letter::C => 2.0,
            Letter::D => 1.0,
            Letter::E => 0.0,
        }
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display color attached to a grade band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandColor {
    /// Used for A.
    Green,
    /// Used for B.
    Blue,
    /// Used for C.
    Yellow,
    /// Used for D.
    Orange,
    /// Used for E.
    Red,
}

impl BandColor {
    /// Literal color string, eg. `#00FF00`.
    pub fn hex(self) -> &'static str {
        match self {
            BandColor::Green => "#00FF00",
            BandColor::Blue => "#4246FF",
            BandColor::Yellow => "#FFFF00",
            BandColor::Orange => "#FF5A00",
            BandColor::Red => "#FF0000",
        }
    }

    /// Style class name, eg. `greenA`.
    pub fn style_class(self) -> &'static str {
        match self {
            BandColor::Green => "greenA",
            BandColor::Blue => "blueB",
            BandColor::Yellow => "yellowC",
            BandColor::Orange => "orangeD",
            BandColor::Red => "redE",
        }
    }

    /// RGB components of [`BandColor::hex`].
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            BandColor::Green => (0x00, 0xFF, 0x00),
            BandColor::Blue => (0x42, 0x46, 0xFF),
            BandColor::Yellow => (0xFF, 0xFF, 0x00),
            BandColor::Orange => (0xFF, 0x5A, 0x00),
            BandColor::Red => (0xFF, 0x00, 0x00),
        }
    }
}

/// One tier of the grading scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    /// Smallest percentage that falls in this tier.
    pub lower_bound: f64,
    /// Letter awarded for this tier.
    pub letter:      Letter,
    /// Color used to display this tier.
    pub color:       BandColor,
}

/// The grading scale, highest tier first. The last row is the catch-all.
pub const GRADE_BANDS: [GradeBand; 5] = [
    GradeBand {
        lower_bound: 90.0,
        letter:      Letter::A,
        color:       BandColor::Green,
    },
    GradeBand {
        lower_bound: 80.0,
        letter:      Letter::B,
        color:       BandColor::Blue,
    },
    GradeBand {
        lower_bound: 70.0,
        letter:      Letter::C,
        color:       BandColor::Yellow,
    },
    GradeBand {
        lower_bound: 60.0,
        letter:      Letter::D,
        color:       BandColor::Orange,
    },
    GradeBand {
        lower_bound: f64::NEG_INFINITY,
        letter:      Letter::E,
        color:       BandColor::Red,
    },
];

/// Letter and color resolved for a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Band {
    /// The letter grade.
    pub letter: Letter,
    /// The display color.
    pub color:  BandColor,
}

/// Finds the first tier, top-down, whose lower bound is at most `pct`.
///
/// Percentages are not clamped: `150.0` is an A and `-5.0` an E. `NaN`
/// compares false against every bound and lands in the catch-all.
fn lookup(pct: f64) -> &'static GradeBand {
    let catch_all = &GRADE_BANDS[GRADE_BANDS.len() - 1];
    GRADE_BANDS
        .iter()
        .find(|band| pct >= band.lower_bound)
        .unwrap_or(catch_all)
}

/// Maps a percentage to a letter grade.
pub fn letter_for_percentage(pct: f64) -> Letter {
    lookup(pct).letter
}

/// Maps a percentage to its letter and display color.
pub fn band_for_percentage(pct: f64) -> Band {
    let band = lookup(pct);
    Band {
        letter: band.letter,
        color:  band.color,
    }
}
