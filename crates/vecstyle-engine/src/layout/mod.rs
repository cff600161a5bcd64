//! # Responsive Layout
//!
//! Decides which artboard of a group is shown at which container width, how
//! wide each may render, and writes the container queries that switch
//! between them.
//!
//! - **`artboard`**: descriptors, name settings, sorting, groups
//! - **`range`**: visibility and width ranges
//! - **`css`**: breakpoint CSS

pub mod artboard;
pub mod css;
pub mod range;

use serde::{Deserialize, Serialize};

pub use artboard::{
    ArtboardDescriptor, ArtboardGroup, GroupError, ObjectNameSettings, Responsiveness,
    is_usable_artboard, make_keyword, parse_object_name, sort_artboards,
};
pub use css::{ResponsiveCssGenerator, data_attributes};
pub use range::{PixelRange, VisibilityRange, WidthRange, visibility_range, width_range};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub namespace: String,
    /// Emit the breakpoint CSS. When off, ranges are still computed.
    pub include_resizer_css: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            namespace: "g-".to_string(),
            include_resizer_css: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtboardLayout {
    pub id: String,
    pub visibility_range: VisibilityRange,
    pub width_range: WidthRange,
    /// Breakpoint CSS for this artboard, possibly empty.
    pub css: String,
}

/// Layout of every artboard in a group, narrowest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsiveLayout {
    pub container_id: String,
    pub container_css: String,
    pub artboards: Vec<ArtboardLayout>,
}

impl ResponsiveLayout {
    pub fn compute(group: &ArtboardGroup, options: &LayoutOptions) -> Self {
        let generator = ResponsiveCssGenerator::for_group(options.namespace.as_str(), group);
        let members = group.artboards();
        let artboards: Vec<ArtboardLayout> = members
            .iter()
            .map(|artboard| ArtboardLayout {
                id: artboard.id.clone(),
                visibility_range: visibility_range(artboard, members),
                width_range: width_range(artboard, members),
                css: if options.include_resizer_css {
                    generator.generate(artboard, members)
                } else {
                    String::new()
                },
            })
            .collect();
        let container_css = if options.include_resizer_css {
            generator.container_css(group)
        } else {
            String::new()
        };
        log::debug!(
            "Laid out {} artboards for group {}",
            artboards.len(),
            group.name()
        );

        Self {
            container_id: generator.container_name().to_string(),
            container_css,
            artboards,
        }
    }

    /// Container rule followed by every artboard's breakpoint rules.
    pub fn css(&self) -> String {
        std::iter::once(self.container_css.as_str())
            .chain(self.artboards.iter().map(|artboard| artboard.css.as_str()))
            .collect()
    }
}
