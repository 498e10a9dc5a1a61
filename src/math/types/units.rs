// src/math/types/units.rs

use serde::{Deserialize, Serialize};

/// Zentimeter pro Zoll.
pub const CM_PER_INCH: f64 = 2.54;

/// Standard-Auflösung für die Umrechnung physikalischer Einheiten in Pixel.
pub const DEFAULT_PIXELS_PER_INCH: f64 = 96.0;

/// Physikalische Einheiten, in denen externe Daten geliefert werden.
/// Intern wird immer in Zentimetern gerechnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Units {
    #[default]
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "in")]
    Inches,
}

impl Units {
    pub fn to_centimeters(self, value: f64) -> f64 {
        match self {
            Units::Centimeters => value,
            Units::Inches => value * CM_PER_INCH,
        }
    }

    pub fn from_centimeters(self, value_cm: f64) -> f64 {
        match self {
            Units::Centimeters => value_cm,
            Units::Inches => value_cm / CM_PER_INCH,
        }
    }

    /// Parst die Kurzform ("cm", "in").
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "cm" | "centimeters" => Some(Units::Centimeters),
            "in" | "inch" | "inches" => Some(Units::Inches),
            _ => None,
        }
    }
}

/// Umrechnung cm -> px bei gegebener Auflösung.
pub fn cm_to_px(value_cm: f64, pixels_per_inch: f64) -> f64 {
    value_cm / CM_PER_INCH * pixels_per_inch
}

/// Umrechnung px -> cm bei gegebener Auflösung.
pub fn px_to_cm(value_px: f64, pixels_per_inch: f64) -> f64 {
    value_px / pixels_per_inch * CM_PER_INCH
}
