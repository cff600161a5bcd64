use crate::css::format_css_rule;
use crate::style;

use super::artboard::{ArtboardDescriptor, ArtboardGroup};
use super::range::{VisibilityRange, visibility_range};

/// Writes the container-query rules that switch between a group's artboards.
#[derive(Debug, Clone)]
pub struct ResponsiveCssGenerator {
    namespace: String,
    container_name: String,
}

impl ResponsiveCssGenerator {
    /// Generator for artboards inside the container named `container_name`.
    pub fn new(namespace: impl Into<String>, container_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            container_name: container_name.into(),
        }
    }

    /// Generator for the standard container of `group`.
    pub fn for_group(namespace: impl Into<String>, group: &ArtboardGroup) -> Self {
        let namespace = namespace.into();
        let container_name = group.container_id(&namespace);
        Self::new(namespace, container_name)
    }

    pub fn container_name(&self) -> &str {
        &self.container_name
    }

    pub fn artboard_selector(&self, artboard: &ArtboardDescriptor) -> String {
        format!("#{}{}", self.namespace, artboard.id)
    }

    /// Breakpoint CSS for `target`. Empty when `group` has a single artboard.
    ///
    /// The narrowest artboard is visible by default and its query says when
    /// to hide it; every other artboard is hidden by default and its query
    /// says when to show it.
    pub fn generate(&self, target: &ArtboardDescriptor, group: &[ArtboardDescriptor]) -> String {
        let range = visibility_range(target, group);
        let narrowest = range.min == 0;
        let widest = range.is_unbounded();
        if narrowest && widest {
            return String::new();
        }

        let selector = self.artboard_selector(target);
        let mut css = String::new();
        if !narrowest {
            css.push_str(&format_css_rule(&selector, &style! { "display" => "none" }));
        }
        let query = match range.max {
            Some(max) if narrowest => format!("(width >= {}px)", max + 1),
            Some(max) => format!("(width >= {}px) and (width < {}px)", range.min, max + 1),
            None => format!("(width >= {}px)", range.min),
        };
        let display = if narrowest { "none" } else { "block" };
        css.push_str(&format!("@container {} {query} {{\n", self.container_name));
        css.push_str(&format_css_rule(&selector, &style! { "display" => display }));
        css.push_str("}\n");
        css
    }

    /// Rule turning the group's wrapper into a size container. Empty for
    /// groups with a single artboard.
    pub fn container_css(&self, group: &ArtboardGroup) -> String {
        if group.len() < 2 {
            return String::new();
        }
        format_css_rule(
            &format!("#{}", self.container_name),
            &style! {
                "container-type" => "inline-size",
                "container-name" => self.container_name.as_str(),
            },
        )
    }
}

/// `data-min-width`/`data-max-width` attributes describing `range`.
pub fn data_attributes(range: &VisibilityRange) -> String {
    match range.max {
        Some(max) => format!("data-min-width=\"{}\" data-max-width=\"{max}\"", range.min),
        None => format!("data-min-width=\"{}\"", range.min),
    }
}
