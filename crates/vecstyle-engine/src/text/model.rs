use serde::{Deserialize, Serialize};

use super::warnings::StyleWarning;
use crate::style::StyleAttributes;

/// A maximal span of text sharing one style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub style: StyleAttributes,
    /// Problems found while resolving this run's style. Reported, never fatal.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<StyleWarning>,
}

impl Run {
    pub fn new(text: impl Into<String>, style: StyleAttributes) -> Self {
        Self {
            text: text.into(),
            style,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: StyleWarning) -> Self {
        self.warnings.push(warning);
        self
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// One paragraph of a text frame.
///
/// `style` carries the paragraph-level properties (alignment, spacing,
/// opacity). The compiler layers the paragraph's dominant run style on top of
/// it, so a style that already includes the dominant run is also accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    #[serde(default)]
    pub runs: Vec<Run>,
    #[serde(default)]
    pub style: StyleAttributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<StyleWarning>,
}

impl Paragraph {
    /// Build a paragraph from its runs, merging neighbours whose styles are
    /// identical so that no two consecutive runs share a style.
    pub fn from_runs(runs: Vec<Run>, style: StyleAttributes) -> Self {
        let mut merged: Vec<Run> = Vec::with_capacity(runs.len());
        for run in runs {
            match merged.last_mut() {
                Some(last) if last.style == run.style => {
                    last.text.push_str(&run.text);
                    last.warnings.extend(run.warnings);
                }
                _ => merged.push(run),
            }
        }
        let text = merged.iter().map(|r| r.text.as_str()).collect();
        Self {
            text,
            runs: merged,
            style,
            warnings: Vec::new(),
        }
    }

    /// A paragraph with no text. Renders as a placeholder.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_warning(mut self, warning: StyleWarning) -> Self {
        self.warnings.push(warning);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_runs_merges_identical_neighbours() {
        let red = style! { "color" => "red" };
        let blue = style! { "color" => "blue" };
        let p = Paragraph::from_runs(
            vec![
                Run::new("Hel", red.clone()),
                Run::new("lo ", red.clone()),
                Run::new("world", blue.clone()),
                Run::new("!", red.clone()),
            ],
            StyleAttributes::new(),
        );

        assert_eq!(p.text, "Hello world!");
        let texts: Vec<_> = p.runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello ", "world", "!"]);
    }

    #[test]
    fn char_count_counts_characters_not_bytes() {
        let run = Run::new("café", StyleAttributes::new());
        assert_eq!(run.char_count(), 4);
    }
}
