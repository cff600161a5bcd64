use serde::{Deserialize, Serialize};

use crate::css::{format_number, round_to};
use crate::text::StyleWarning;

/// RGB colors with every channel below this are rendered as pure black.
pub const DARK_GRAY_THRESHOLD: u8 = 36;

/// Fill of a text range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum FillColor {
    Rgb {
        red: u8,
        green: u8,
        blue: u8,
    },
    /// Ink percentage, 0 is white and 100 is black.
    Gray { gray: f64 },
    /// A named spot color wrapping its process equivalent.
    Spot { color: Box<FillColor> },
    /// No fill at all.
    #[default]
    None,
    /// Any color model with no CSS conversion, e.g. CMYK or pattern fills.
    Other { kind: String },
}

/// A fill converted to CSS, plus what went wrong converting it.
#[derive(Debug, Clone, PartialEq)]
pub struct CssFill {
    pub color: String,
    pub warning: Option<StyleWarning>,
}

impl CssFill {
    fn clean(color: String) -> Self {
        Self {
            color,
            warning: None,
        }
    }
}

/// `rgb(r,g,b)`, or `rgba(r,g,b,a)` when `opacity` (0–100) is partial.
pub fn format_css_color(red: u8, green: u8, blue: u8, opacity: Option<f64>) -> String {
    match opacity {
        Some(opacity) if opacity > 0.0 && opacity < 100.0 => format!(
            "rgba({red},{green},{blue},{})",
            format_number(round_to(opacity * 0.01, 2))
        ),
        _ => format!("rgb({red},{green},{blue})"),
    }
}

pub fn dark_gray_to_black(red: u8, green: u8, blue: u8) -> (u8, u8, u8) {
    if red < DARK_GRAY_THRESHOLD && green < DARK_GRAY_THRESHOLD && blue < DARK_GRAY_THRESHOLD {
        (0, 0, 0)
    } else {
        (red, green, blue)
    }
}

fn gray_level(gray: f64) -> u8 {
    round_to((100.0 - gray) / 100.0 * 255.0, 0).clamp(0.0, 255.0) as u8
}

/// Convert `fill` at `opacity` (0–100) to a CSS color.
///
/// Unfilled text becomes bright green so it stands out in the output.
pub fn fill_to_css(fill: &FillColor, opacity: f64) -> CssFill {
    match fill {
        FillColor::Spot { color } => fill_to_css(color, opacity),
        FillColor::Rgb { red, green, blue } => {
            let (r, g, b) = dark_gray_to_black(*red, *green, *blue);
            CssFill::clean(format_css_color(r, g, b, Some(opacity)))
        }
        FillColor::Gray { gray } => {
            let v = gray_level(*gray);
            CssFill::clean(format_css_color(v, v, v, Some(opacity)))
        }
        FillColor::None => CssFill {
            color: format_css_color(0, 255, 0, None),
            warning: Some(StyleWarning::NoFill),
        },
        FillColor::Other { kind } => CssFill {
            color: format_css_color(0, 0, 0, Some(opacity)),
            warning: Some(StyleWarning::UnsupportedFill { fill: kind.clone() }),
        },
    }
}
