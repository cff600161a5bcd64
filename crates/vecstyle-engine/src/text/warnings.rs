use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Longest sample of the offending text quoted in a warning.
pub const WARNING_SAMPLE_CHARS: usize = 35;

/// A content problem found while resolving text styles.
///
/// These never stop compilation; the text is still emitted with a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StyleWarning {
    /// Text has no fill and was painted green.
    NoFill,
    /// Text is filled with a color model other than RGB, gray or spot.
    UnsupportedFill { fill: String },
    /// No font rule gives this font a CSS family.
    UnmappedFont { font: String },
    /// No CSS equivalent exists for this blend mode.
    UnmappedBlendMode { mode: String },
    /// Markup such as `<b>` was typed into the text.
    InlineMarkup { tag: String },
}

impl StyleWarning {
    /// Human-readable message quoting a truncated `sample` of the text.
    pub fn message(&self, sample: &str) -> String {
        let sample = truncate_chars(sample, WARNING_SAMPLE_CHARS);
        match self {
            StyleWarning::NoFill => format!(
                "The text \"{sample}\" has no fill. Please fill it with an RGB color. It has been filled with green."
            ),
            StyleWarning::UnsupportedFill { fill } => format!(
                "The text \"{sample}\" has {fill} fill. Please fill it with an RGB color."
            ),
            StyleWarning::UnmappedFont { font } => {
                format!("Missing a rule for converting font: {font}. Sample text: {sample}")
            }
            StyleWarning::UnmappedBlendMode { mode } => {
                format!("Missing a rule for converting {mode} to CSS.")
            }
            StyleWarning::InlineMarkup { tag } => {
                format!("Found a <{tag}> tag. Try using text formatting instead.")
            }
        }
    }

    /// Key under which this warning is reported only once, if any.
    ///
    /// Fill warnings repeat for every affected run so each can be found.
    pub fn dedupe_key(&self) -> Option<String> {
        match self {
            StyleWarning::NoFill | StyleWarning::UnsupportedFill { .. } => None,
            StyleWarning::UnmappedFont { font } => Some(format!("font:{font}")),
            StyleWarning::UnmappedBlendMode { mode } => Some(format!("blend:{mode}")),
            StyleWarning::InlineMarkup { tag } => Some(format!("tag:{}", tag.to_lowercase())),
        }
    }
}

/// Receives warnings raised during compilation.
///
/// A `dedupe_key` asks the sink to report the warning at most once per key.
pub trait WarningSink {
    fn warn(&mut self, message: &str, dedupe_key: Option<&str>);

    fn report(&mut self, warning: &StyleWarning, sample: &str) {
        let key = warning.dedupe_key();
        self.warn(&warning.message(sample), key.as_deref());
    }
}

impl<F> WarningSink for F
where
    F: FnMut(&str, Option<&str>),
{
    fn warn(&mut self, message: &str, dedupe_key: Option<&str>) {
        self(message, dedupe_key)
    }
}

/// Logs each warning through `log::warn!`, honouring dedupe keys, and keeps
/// the emitted messages for later inspection.
#[derive(Debug, Default)]
pub struct LogWarnings {
    seen: HashSet<String>,
    emitted: Vec<String>,
}

impl LogWarnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.emitted
    }
}

impl WarningSink for LogWarnings {
    fn warn(&mut self, message: &str, dedupe_key: Option<&str>) {
        if let Some(key) = dedupe_key
            && !self.seen.insert(key.to_string())
        {
            return;
        }
        log::warn!("{message}");
        self.emitted.push(message.to_string());
    }
}

/// First `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
