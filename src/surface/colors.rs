//! Stroke colors for surface cells.
//!
//! Hue carries the sign of the dominant elevation in a cell (red for
//! positive-dominant, blue otherwise) and intensity carries its magnitude
//! relative to the global extrema on an exponential scale.

use std::fmt;

use super::Extrema;

/// A single-channel stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeColor {
    /// `#rr0000`
    Red(u8),
    /// `#0000bb`
    Blue(u8),
}

impl fmt::Display for StrokeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrokeColor::Red(v) => write!(f, "#{:02x}0000", v),
            StrokeColor::Blue(v) => write!(f, "#0000{:02x}", v),
        }
    }
}

/// Pick the stroke color for a cell.
///
/// The red branch is taken only when `|cell.max| > |cell.min|`; a tie goes
/// to blue. Intensity is `exp(|local|) / exp(|global|) * 255`, clamped to 255
/// and truncated.
pub fn stroke_color(cell: Extrema, global: Extrema) -> StrokeColor {
    if cell.max.abs() > cell.min.abs() {
        StrokeColor::Red(intensity(cell.max, global.max))
    } else {
        StrokeColor::Blue(intensity(cell.min, global.min))
    }
}

fn intensity(local: f64, global: f64) -> u8 {
    (local.abs().exp() / global.abs().exp() * 255.0).min(255.0) as u8
}
