use serde::{Deserialize, Serialize};

use super::markup::{clean_html_tags, clean_html_text};
use super::model::Paragraph;
use super::tally::StyleTally;
use super::warnings::WarningSink;
use crate::css::format_css_rule;
use crate::style::{StyleAttributes, StyleClassRegistry, TEXT_STYLE_PROPERTIES, style_diff};

/// Placeholder for a paragraph with no text. The real height of an empty
/// paragraph isn't known, so a non-breaking space stands in for it.
pub const EMPTY_PARAGRAPH_HTML: &str = "<p>&nbsp;</p>";

pub const PARAGRAPH_CLASS_NAME: &str = "pstyle";
pub const CHARACTER_CLASS_NAME: &str = "cstyle";

/// Values forced onto the base `<p>` style whatever the majority style says.
pub fn default_base_overrides() -> StyleAttributes {
    crate::style! {
        "text-align" => "left",
        "text-transform" => "none",
        "padding-bottom" => 0,
        "padding-top" => 0,
        "mix-blend-mode" => "normal",
        "font-style" => "normal",
        "font-weight" => "regular",
        "height" => "auto",
        "opacity" => 1,
        // `relative` is also used, to correct baseline misalignment
        "position" => "static",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerOptions {
    /// Prepended to every generated class name.
    pub namespace: String,
    /// Properties that decide whether two styles are the same.
    pub known_properties: Vec<String>,
    pub base_overrides: StyleAttributes,
    pub empty_paragraph_html: String,
    /// Escape `<`, `>` and `&` in run text instead of passing typed markup
    /// through.
    pub escape_markup: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            namespace: "g-".to_string(),
            known_properties: TEXT_STYLE_PROPERTIES.iter().map(|p| p.to_string()).collect(),
            base_overrides: default_base_overrides(),
            empty_paragraph_html: EMPTY_PARAGRAPH_HTML.to_string(),
            escape_markup: false,
        }
    }
}

/// HTML and CSS for a single list of paragraphs.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledText {
    pub html: String,
    /// `p {…}` first whenever there is at least one paragraph, then paragraph
    /// classes, then character classes.
    pub css_rules: Vec<String>,
    pub base_style: StyleAttributes,
}

/// HTML for several text frames sharing one base style and one set of classes.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFrames {
    pub html: Vec<String>,
    pub css_rules: Vec<String>,
    pub base_style: StyleAttributes,
}

impl CompiledText {
    /// All rules concatenated, each prefixed with `scope` (e.g. an artboard id).
    pub fn scoped_css(&self, scope: &str) -> String {
        scope_rules(&self.css_rules, scope)
    }
}

impl CompiledFrames {
    pub fn scoped_css(&self, scope: &str) -> String {
        scope_rules(&self.css_rules, scope)
    }
}

fn scope_rules(rules: &[String], scope: &str) -> String {
    rules.iter().map(|rule| format!("{scope} {rule}")).collect()
}

/// Compiles styled paragraphs into markup plus the fewest CSS rules needed.
///
/// The most common paragraph style (by character count) becomes the plain
/// `<p>` rule. A paragraph only gets a class where it differs from that base,
/// and a run only gets a `<span>` class where it differs from its paragraph.
#[derive(Debug, Clone, Default)]
pub struct TextStyleCompiler {
    options: CompilerOptions,
}

struct ClassRegistries {
    paragraphs: StyleClassRegistry,
    characters: StyleClassRegistry,
    paragraph_prefix: String,
    character_prefix: String,
}

impl TextStyleCompiler {
    pub fn new(options: CompilerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn compile(&self, paragraphs: &[Paragraph], warnings: &mut impl WarningSink) -> CompiledText {
        let CompiledFrames {
            mut html,
            css_rules,
            base_style,
        } = self.compile_frames(&[paragraphs], warnings);
        CompiledText {
            html: html.pop().unwrap_or_default(),
            css_rules,
            base_style,
        }
    }

    pub fn compile_frames<P: AsRef<[Paragraph]>>(
        &self,
        frames: &[P],
        warnings: &mut impl WarningSink,
    ) -> CompiledFrames {
        let known = &self.options.known_properties;

        let resolved: Vec<Vec<StyleAttributes>> = frames
            .iter()
            .map(|frame| frame.as_ref().iter().map(|p| self.resolve_paragraph(p)).collect())
            .collect();

        let mut tally = StyleTally::new(known);
        for (frame, styles) in frames.iter().zip(&resolved) {
            for (paragraph, style) in frame.as_ref().iter().zip(styles) {
                report_warnings(paragraph, warnings);
                tally.add(style, paragraph.char_count());
            }
        }

        let mut base_style = tally.dominant().cloned().unwrap_or_default();
        base_style.extend_from(&self.options.base_overrides);

        let mut registries = ClassRegistries {
            paragraphs: StyleClassRegistry::new(known),
            characters: StyleClassRegistry::new(known),
            paragraph_prefix: format!("{}{PARAGRAPH_CLASS_NAME}", self.options.namespace),
            character_prefix: format!("{}{CHARACTER_CLASS_NAME}", self.options.namespace),
        };

        let html: Vec<String> = frames
            .iter()
            .zip(&resolved)
            .map(|(frame, styles)| {
                frame
                    .as_ref()
                    .iter()
                    .zip(styles)
                    .map(|(paragraph, style)| {
                        self.paragraph_html(paragraph, style, &base_style, &mut registries, warnings)
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect();

        let has_paragraphs = frames.iter().any(|frame| !frame.as_ref().is_empty());
        let mut css_rules = Vec::new();
        if has_paragraphs {
            css_rules.push(format_css_rule("p", &base_style));
        }
        css_rules.extend(registries.paragraphs.css_rules());
        css_rules.extend(registries.characters.css_rules());

        log::debug!(
            "compiled {} text frames: {} paragraph classes, {} character classes",
            frames.len(),
            registries.paragraphs.len(),
            registries.characters.len()
        );

        CompiledFrames {
            html,
            css_rules,
            base_style,
        }
    }

    /// The paragraph's own properties with its dominant run style on top, so
    /// the most common run in a paragraph needs no `<span>`.
    fn resolve_paragraph(&self, paragraph: &Paragraph) -> StyleAttributes {
        let mut runs = StyleTally::new(&self.options.known_properties);
        for run in &paragraph.runs {
            runs.add(&run.style, run.char_count());
        }
        let mut style = paragraph.style.clone();
        if let Some(dominant) = runs.dominant() {
            style.extend_from(dominant);
        }
        style
    }

    fn paragraph_html(
        &self,
        paragraph: &Paragraph,
        style: &StyleAttributes,
        base_style: &StyleAttributes,
        registries: &mut ClassRegistries,
        warnings: &mut impl WarningSink,
    ) -> String {
        if paragraph.is_empty() {
            return self.options.empty_paragraph_html.clone();
        }

        let mut html = match style_diff(style, base_style) {
            Some(diff) => {
                let class = registries.paragraphs.class_for(
                    &diff,
                    &registries.paragraph_prefix,
                    paragraph.char_count(),
                );
                format!("<p class=\"{}\">", html_escape::encode_double_quoted_attribute(&class))
            }
            None => "<p>".to_string(),
        };

        if paragraph.runs.is_empty() {
            html.push_str(&self.run_text(&paragraph.text, warnings));
        }
        for run in paragraph.runs.iter().filter(|run| !run.text.is_empty()) {
            let text = self.run_text(&run.text, warnings);
            match style_diff(&run.style, style) {
                Some(diff) => {
                    let class = registries.characters.class_for(
                        &diff,
                        &registries.character_prefix,
                        run.char_count(),
                    );
                    html.push_str(&format!(
                        "<span class=\"{}\">{text}</span>",
                        html_escape::encode_double_quoted_attribute(&class)
                    ));
                }
                None => html.push_str(&text),
            }
        }
        html.push_str("</p>");
        html
    }

    fn run_text(&self, text: &str, warnings: &mut impl WarningSink) -> String {
        if self.options.escape_markup {
            clean_html_text(&html_escape::encode_text(text))
        } else {
            clean_html_text(&clean_html_tags(text, warnings))
        }
    }
}

fn report_warnings(paragraph: &Paragraph, warnings: &mut impl WarningSink) {
    if paragraph.is_empty() {
        return;
    }
    for run in paragraph.runs.iter().filter(|run| !run.text.is_empty()) {
        for warning in &run.warnings {
            warnings.report(warning, &run.text);
        }
    }
    for warning in &paragraph.warnings {
        warnings.report(warning, &paragraph.text);
    }
}
