use crate::style::{TEXT_STYLE_PROPERTIES, encode_style_key};
use crate::text::{Paragraph, Run, StyleWarning};

use super::ConvertOptions;
use super::attributes::{
    CharacterAttributes, FrameKind, RawParagraph, RawTextFrame, TextFrameAttributes,
};
use super::text_style::{TextStyle, text_style_css};

/// Consecutive characters with identical attributes, concatenated.
fn character_groups(paragraph: &RawParagraph) -> Vec<(String, &CharacterAttributes)> {
    let mut groups: Vec<(String, &CharacterAttributes)> = Vec::new();
    for character in &paragraph.characters {
        match groups.last_mut() {
            Some((text, attributes)) if **attributes == character.attributes => {
                text.push_str(&character.contents)
            }
            _ => groups.push((character.contents.clone(), &character.attributes)),
        }
    }
    groups
}

struct ConvertedRun {
    run: Run,
    style: TextStyle,
}

fn convert_runs(paragraph: &RawParagraph, options: &ConvertOptions) -> Vec<ConvertedRun> {
    character_groups(paragraph)
        .into_iter()
        .map(|(text, attributes)| {
            let (style, fill_warning) = TextStyle::from_character(attributes);
            let mut run = Run::new(text, text_style_css(&style, options));
            run.warnings.extend(fill_warning);
            if let Some(font) = &attributes.font
                && !run.style.contains_key("font-family")
            {
                run.warnings.push(StyleWarning::UnmappedFont { font: font.clone() });
            }
            ConvertedRun { run, style }
        })
        .collect()
}

/// The character style covering most of the paragraph's text. Ties go to the
/// style seen first.
fn dominant_character_style(runs: &[ConvertedRun]) -> Option<&TextStyle> {
    let mut counts: Vec<(String, usize, &TextStyle)> = Vec::new();
    for converted in runs {
        let chars = converted.run.char_count();
        if chars == 0 {
            continue;
        }
        let key = encode_style_key(&converted.run.style, TEXT_STYLE_PROPERTIES);
        match counts.iter_mut().find(|(k, _, _)| *k == key) {
            Some((_, count, _)) => *count += chars,
            None => counts.push((key, chars, &converted.style)),
        }
    }
    counts
        .into_iter()
        .fold(None::<(usize, &TextStyle)>, |best, (_, count, style)| match best {
            Some((best_count, _)) if best_count >= count => best,
            _ => Some((count, style)),
        })
        .map(|(_, style)| style)
}

fn paragraph_text_style(
    paragraph: &RawParagraph,
    frame: &TextFrameAttributes,
    runs: &[ConvertedRun],
) -> TextStyle {
    let style = TextStyle::from_paragraph(&paragraph.attributes, frame);
    match dominant_character_style(runs) {
        Some(character) => style.with_character(character),
        None => style,
    }
}

/// Split a paragraph into runs of identically formatted characters.
pub fn split_runs(paragraph: &RawParagraph, options: &ConvertOptions) -> Vec<Run> {
    convert_runs(paragraph, options)
        .into_iter()
        .map(|converted| converted.run)
        .collect()
}

/// Convert one paragraph of `frame` into a styled [`Paragraph`].
///
/// The paragraph's style already includes its dominant character style.
pub fn import_paragraph(
    paragraph: &RawParagraph,
    frame: &TextFrameAttributes,
    options: &ConvertOptions,
) -> Paragraph {
    if paragraph.characters.is_empty() {
        return Paragraph::empty();
    }
    let runs = convert_runs(paragraph, options);
    let style = text_style_css(&paragraph_text_style(paragraph, frame, &runs), options);
    let mut imported =
        Paragraph::from_runs(runs.into_iter().map(|converted| converted.run).collect(), style);
    if !frame.blend_mode.is_normal() && !imported.style.contains_key("mix-blend-mode") {
        imported.warnings.push(StyleWarning::UnmappedBlendMode {
            mode: frame.blend_mode.to_string(),
        });
    }
    imported
}

pub fn import_paragraphs(frame: &RawTextFrame, options: &ConvertOptions) -> Vec<Paragraph> {
    frame
        .paragraphs
        .iter()
        .map(|paragraph| import_paragraph(paragraph, &frame.attributes, options))
        .collect()
}

/// Estimated space between a frame's HTML box and its first and last lines
/// of glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameMargins {
    pub top: f64,
    pub bottom: f64,
}

impl FrameMargins {
    pub fn estimate(frame: &RawTextFrame, options: &ConvertOptions) -> Self {
        let (Some(first), Some(last)) = (frame.paragraphs.first(), frame.paragraphs.last()) else {
            return Self::default();
        };
        let margin = |paragraph: &RawParagraph| {
            let runs = convert_runs(paragraph, options);
            let style = paragraph_text_style(paragraph, &frame.attributes, &runs);
            let leading = style.leading.unwrap_or(0.0);
            ((leading - style.size) * options.margin_leading_share, style)
        };
        let (top, first_style) = margin(first);
        let (bottom, last_style) = margin(last);
        Self {
            top: top + first_style.space_before,
            bottom: bottom + last_style.space_after,
        }
    }
}

/// Width of the HTML box for a frame measured at `measured_width`. Point text
/// gets extra room so that font substitution doesn't wrap it.
pub fn html_width(measured_width: f64, kind: FrameKind, options: &ConvertOptions) -> f64 {
    match kind {
        FrameKind::Point => measured_width + options.point_text_extra_width,
        FrameKind::Area => measured_width,
    }
}
