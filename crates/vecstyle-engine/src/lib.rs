//! Turns text and artboards extracted from a vector design document into web
//! output.
//!
//! - [`text`]: compiles styled paragraphs into HTML and a minimal set of CSS
//!   classes, built on the style primitives in [`style`].
//! - [`convert`]: produces those paragraphs from raw per-character attributes,
//!   with inherited frame attributes resolved by [`scene`].
//! - [`layout`]: computes which artboard variant shows at which width and
//!   writes the container queries that switch between them.
//!
//! Everything here is pure and synchronous. Reading documents and writing
//! files belong to the host.

pub mod convert;
pub mod css;
pub mod layout;
pub mod scene;
pub mod style;
pub mod text;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::{ConvertOptions, FontRule, RawTextFrame, import_paragraphs};
pub use layout::{
    ArtboardDescriptor, ArtboardGroup, GroupError, LayoutOptions, ResponsiveCssGenerator,
    ResponsiveLayout, Responsiveness, VisibilityRange, WidthRange,
};
pub use scene::{NodeId, SceneTree};
pub use style::{StyleAttributes, StyleClassRegistry, StyleValue};
pub use text::{
    CompiledFrames, CompiledText, CompilerOptions, LogWarnings, Paragraph, Run, StyleWarning,
    TextStyleCompiler, WarningSink,
};
