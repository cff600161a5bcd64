use crate::css::{format_number, round_to};
use crate::style::{StyleAttributes, StyleValue};
use crate::text::StyleWarning;

use super::ConvertOptions;
use super::attributes::{
    BaselinePosition, BlendMode, Capitalization, CharacterAttributes, FrameKind, Justification,
    ParagraphAttributes, TextFrameAttributes,
};
use super::color::fill_to_css;
use super::font::find_font_info;

/// Font size multiplier for superscript and subscript text.
pub const SCRIPT_SIZE_SCALE: f64 = 0.7;

/// Document-side text formatting, before conversion to CSS.
///
/// Character styles leave the paragraph fields unset and vice versa; a
/// paragraph's style is its own attributes plus its dominant character style.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStyle {
    pub font: Option<String>,
    /// Rounded to whole points; 0 when unknown.
    pub size: f64,
    pub color: Option<String>,
    pub capitalization: Capitalization,
    pub tracking: Option<f64>,
    pub baseline: BaselinePosition,
    pub leading: Option<f64>,
    pub space_before: f64,
    pub space_after: f64,
    pub justification: Option<Justification>,
    /// 0–100.
    pub opacity: Option<f64>,
    pub blend_mode: BlendMode,
    pub rotated: bool,
    pub frame_kind: Option<FrameKind>,
}

impl TextStyle {
    /// Character style, plus the warning raised converting its fill.
    pub fn from_character(attributes: &CharacterAttributes) -> (Self, Option<StyleWarning>) {
        let fill = fill_to_css(&attributes.fill, 100.0);
        let style = Self {
            font: attributes.font.clone(),
            size: round_to(attributes.size, 0),
            color: Some(fill.color),
            capitalization: attributes.capitalization,
            tracking: Some(attributes.tracking),
            baseline: attributes.baseline,
            ..Self::default()
        };
        (style, fill.warning)
    }

    pub fn from_paragraph(attributes: &ParagraphAttributes, frame: &TextFrameAttributes) -> Self {
        Self {
            leading: Some(round_to(attributes.leading, 0)),
            space_before: round_to(attributes.space_before, 0),
            space_after: round_to(attributes.space_after, 0),
            justification: Some(attributes.justification),
            opacity: Some(frame.opacity),
            blend_mode: frame.blend_mode.clone(),
            rotated: frame.rotated,
            frame_kind: Some(frame.kind),
            ..Self::default()
        }
    }

    /// Layer the character fields of `character` over this style.
    pub fn with_character(mut self, character: &TextStyle) -> Self {
        self.font = character.font.clone();
        self.size = character.size;
        self.color = character.color.clone();
        self.capitalization = character.capitalization;
        self.tracking = character.tracking;
        self.baseline = character.baseline;
        self
    }

    fn is_point_text(&self) -> bool {
        self.frame_kind == Some(FrameKind::Point)
    }
}

fn px(value: f64) -> StyleValue {
    StyleValue::Text(format!("{}px", format_number(value)))
}

/// Convert a font rule's percentage baseline shift to pixels at `font_size`.
pub fn vshift_to_pixels(vshift: &str, font_size: f64) -> String {
    if !vshift.contains('%') {
        return "0".to_string();
    }
    let pct = vshift
        .trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .unwrap_or(0.0);
    let shift = font_size * pct / 100.0;
    if shift == 0.0 || !shift.is_finite() {
        return "0".to_string();
    }
    format!("{}px", format_number(round_to(shift, 1)))
}

/// CSS declarations for `style`.
pub fn text_style_css(style: &TextStyle, options: &ConvertOptions) -> StyleAttributes {
    let mut css = StyleAttributes::new();
    let font_info = style
        .font
        .as_deref()
        .map(|font| find_font_info(font, &options.fonts));

    if let Some(info) = &font_info {
        if !info.family.is_empty() {
            css.insert("font-family", info.family.as_str());
        }
        if !info.weight.is_empty() {
            css.insert("font-weight", info.weight.as_str());
        }
        if !info.style.is_empty() {
            css.insert("font-style", info.style.as_str());
        }
    }
    if let Some(leading) = style.leading {
        css.insert("line-height", px(leading));
        // point text renders at the wrong height in some browsers without this
        if style.is_point_text() {
            css.insert("height", px(leading));
        }
    }
    if let Some(opacity) = style.opacity {
        css.insert("opacity", round_to(opacity / 100.0, options.css_precision));
    }
    if let Some(mode) = style.blend_mode.css() {
        css.insert("mix-blend-mode", mode);
    }
    if style.space_before > 0.0 {
        css.insert("padding-top", px(style.space_before));
    }
    if style.space_after > 0.0 {
        css.insert("padding-bottom", px(style.space_after));
    }
    if let Some(tracking) = style.tracking {
        let em = round_to(tracking / 1000.0, options.css_precision);
        css.insert("letter-spacing", format!("{}em", format_number(em)));
    }

    let mut font_size = style.size;
    if let Some(align) = style.baseline.vertical_align() {
        font_size = round_to(font_size * SCRIPT_SIZE_SCALE, 1);
        css.insert("vertical-align", align);
    }
    if font_size > 0.0 {
        css.insert("font-size", px(font_size));
    }

    if style.rotated && style.is_point_text() {
        css.insert("text-align", "center");
    } else if let Some(justification) = style.justification {
        css.insert("text-align", justification.css());
    }
    if let Some(transform) = style.capitalization.css() {
        css.insert("text-transform", transform);
    }
    if let Some(color) = &style.color {
        css.insert("color", color.as_str());
    }
    if style.size > 0.0
        && style.is_point_text()
        && let Some(vshift) = font_info.as_ref().and_then(|info| info.vshift.as_deref())
    {
        css.insert("top", vshift_to_pixels(vshift, style.size));
        css.insert("position", "relative");
    }
    css
}
