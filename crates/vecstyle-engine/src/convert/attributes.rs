use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::FillColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justification {
    #[default]
    Left,
    Right,
    Center,
    FullJustify,
    FullJustifyLastLineLeft,
    FullJustifyLastLineCenter,
    FullJustifyLastLineRight,
}

impl Justification {
    /// `text-align` value.
    pub fn css(self) -> &'static str {
        match self {
            Justification::Left => "left",
            Justification::Right => "right",
            Justification::Center => "center",
            Justification::FullJustify
            | Justification::FullJustifyLastLineLeft
            | Justification::FullJustifyLastLineCenter
            | Justification::FullJustifyLastLineRight => "justify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capitalization {
    #[default]
    Normal,
    AllCaps,
    SmallCaps,
}

impl Capitalization {
    /// `text-transform` value, if any needs emitting.
    pub fn css(self) -> Option<&'static str> {
        match self {
            Capitalization::Normal => None,
            // no small-caps equivalent that matches the rendered glyphs
            Capitalization::AllCaps | Capitalization::SmallCaps => Some("uppercase"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselinePosition {
    #[default]
    Normal,
    Superscript,
    Subscript,
}

impl BaselinePosition {
    pub fn vertical_align(self) -> Option<&'static str> {
        match self {
            BaselinePosition::Normal => None,
            BaselinePosition::Superscript => Some("super"),
            BaselinePosition::Subscript => Some("sub"),
        }
    }
}

/// How an object composites with what is beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Other(String),
}

impl BlendMode {
    pub fn is_normal(&self) -> bool {
        matches!(self, BlendMode::Normal)
    }

    /// `mix-blend-mode` value. `None` for normal and for modes CSS can't
    /// reproduce.
    pub fn css(&self) -> Option<&'static str> {
        match self {
            BlendMode::Multiply => Some("multiply"),
            BlendMode::Normal | BlendMode::Other(_) => None,
        }
    }
}

impl From<&str> for BlendMode {
    fn from(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "normal" => BlendMode::Normal,
            "multiply" => BlendMode::Multiply,
            _ => BlendMode::Other(name.to_string()),
        }
    }
}

impl From<String> for BlendMode {
    fn from(name: String) -> Self {
        BlendMode::from(name.as_str())
    }
}

impl From<BlendMode> for String {
    fn from(mode: BlendMode) -> Self {
        mode.to_string()
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlendMode::Normal => f.write_str("normal"),
            BlendMode::Multiply => f.write_str("multiply"),
            BlendMode::Other(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    /// Single-line text anchored at a point.
    #[default]
    Point,
    /// Text flowing inside a box.
    Area,
}

/// Per-character formatting as captured from the design document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterAttributes {
    /// Document font name, e.g. `Georgia-Bold`.
    pub font: Option<String>,
    pub size: f64,
    #[serde(default)]
    pub fill: FillColor,
    #[serde(default)]
    pub capitalization: Capitalization,
    /// Thousandths of an em.
    #[serde(default)]
    pub tracking: f64,
    #[serde(default)]
    pub baseline: BaselinePosition,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphAttributes {
    pub leading: f64,
    pub space_before: f64,
    pub space_after: f64,
    pub justification: Justification,
}

/// Attributes of the frame a paragraph lives in. `opacity` and `blend_mode`
/// are the computed values, already resolved through the object's ancestors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFrameAttributes {
    pub kind: FrameKind,
    /// 0–100.
    pub opacity: f64,
    pub blend_mode: BlendMode,
    pub rotated: bool,
}

impl Default for TextFrameAttributes {
    fn default() -> Self {
        Self {
            kind: FrameKind::default(),
            opacity: 100.0,
            blend_mode: BlendMode::Normal,
            rotated: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCharacter {
    pub contents: String,
    pub attributes: CharacterAttributes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawParagraph {
    #[serde(default)]
    pub characters: Vec<RawCharacter>,
    #[serde(default)]
    pub attributes: ParagraphAttributes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawTextFrame {
    #[serde(default)]
    pub attributes: TextFrameAttributes,
    pub paragraphs: Vec<RawParagraph>,
}
