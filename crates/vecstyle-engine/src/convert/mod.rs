//! Conversion of design-document text attributes into CSS-styled
//! [`Paragraph`](crate::text::Paragraph)s ready for the text compiler.
//!
//! The input side ([`RawTextFrame`] and friends) mirrors what an exporter can
//! read from a vector document: one attribute record per character, one per
//! paragraph, and the computed opacity and blend mode of the frame.

pub mod attributes;
pub mod color;
pub mod font;
pub mod runs;
pub mod text_style;

use serde::{Deserialize, Serialize};

pub use attributes::{
    BaselinePosition, BlendMode, Capitalization, CharacterAttributes, FrameKind, Justification,
    ParagraphAttributes, RawCharacter, RawParagraph, RawTextFrame, TextFrameAttributes,
};
pub use color::{CssFill, FillColor, fill_to_css, format_css_color};
pub use font::{FontRule, default_fonts, extend_font_list, find_font_info};
pub use runs::{FrameMargins, html_width, import_paragraph, import_paragraphs, split_runs};
pub use text_style::{TextStyle, text_style_css};

/// Decimal places kept for opacity and letter-spacing.
pub const DEFAULT_CSS_PRECISION: u32 = 4;
/// Extra width given to point text boxes.
pub const DEFAULT_POINT_TEXT_EXTRA_WIDTH: f64 = 22.0;
/// Share of `leading - size` placed above the first line and below the last.
pub const DEFAULT_MARGIN_LEADING_SHARE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub css_precision: u32,
    pub fonts: Vec<FontRule>,
    pub point_text_extra_width: f64,
    pub margin_leading_share: f64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            css_precision: DEFAULT_CSS_PRECISION,
            fonts: default_fonts(),
            point_text_extra_width: DEFAULT_POINT_TEXT_EXTRA_WIDTH,
            margin_leading_share: DEFAULT_MARGIN_LEADING_SHARE,
        }
    }
}
