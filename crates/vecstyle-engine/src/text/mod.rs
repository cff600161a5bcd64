//! # Text Style Compilation
//!
//! Turns styled paragraphs into HTML plus a small set of CSS rules.
//!
//! ## Pipeline
//!
//! 1. **Tally**: every paragraph's resolved style is weighted by its
//!    character count; inside each paragraph, runs are weighted the same way
//!    to pick the paragraph's dominant run style.
//! 2. **Base style**: the heaviest paragraph style becomes the plain `<p>`
//!    rule, with a fixed set of normalising overrides applied on top.
//! 3. **Emission**: paragraphs differing from the base get a `pstyleN` class,
//!    runs differing from their paragraph get a `<span>` with a `cstyleN`
//!    class. Everything else is bare text.
//!
//! ## Modules
//!
//! - **`model`**: `Run` and `Paragraph`
//! - **`tally`**: character-weighted style frequencies
//! - **`compiler`**: `TextStyleCompiler` and its options
//! - **`markup`**: cleaning of run text (entities, typed tags)
//! - **`warnings`**: `StyleWarning` and the `WarningSink` callback trait

pub mod compiler;
pub mod markup;
pub mod model;
pub mod tally;
pub mod warnings;

pub use compiler::{
    CompiledFrames, CompiledText, CompilerOptions, EMPTY_PARAGRAPH_HTML, TextStyleCompiler,
    default_base_overrides,
};
pub use model::{Paragraph, Run};
pub use tally::{StyleFrequency, StyleTally};
pub use warnings::{LogWarnings, StyleWarning, WarningSink};
