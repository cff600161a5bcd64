use std::collections::HashMap;

use super::{StyleAttributes, TEXT_STYLE_PROPERTIES, encode_style_key};
use crate::css::format_css_rule;

/// A named, reusable style diff.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleClass {
    pub key: String,
    pub diff: StyleAttributes,
    pub class_name: String,
    /// Characters rendered with this class so far. Informational only.
    pub char_count: usize,
}

/// Deduplicates style diffs into numbered classes for one compilation pass.
///
/// Class names are `prefix + index` in creation order, so feeding the same
/// diffs in the same order always yields the same names. Don't share a
/// registry between unrelated documents or artboards.
#[derive(Debug)]
pub struct StyleClassRegistry {
    known_properties: Vec<String>,
    classes: Vec<StyleClass>,
    by_key: HashMap<String, usize>,
}

impl Default for StyleClassRegistry {
    fn default() -> Self {
        Self::new(TEXT_STYLE_PROPERTIES)
    }
}

impl StyleClassRegistry {
    pub fn new<S: AsRef<str>>(known_properties: &[S]) -> Self {
        Self {
            known_properties: known_properties
                .iter()
                .map(|p| p.as_ref().to_string())
                .collect(),
            classes: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    /// Name of the class for `diff`, creating it if no class has the same key.
    pub fn get_or_create_class_name(&mut self, diff: &StyleAttributes, name_prefix: &str) -> String {
        self.class_for(diff, name_prefix, 0)
    }

    /// Like [`Self::get_or_create_class_name`], also crediting `chars`
    /// characters to the class.
    pub fn class_for(&mut self, diff: &StyleAttributes, name_prefix: &str, chars: usize) -> String {
        let key = encode_style_key(diff, &self.known_properties);
        let index = match self.by_key.get(&key) {
            Some(&index) => index,
            None => {
                let index = self.classes.len();
                self.classes.push(StyleClass {
                    key: key.clone(),
                    diff: diff.clone(),
                    class_name: format!("{name_prefix}{index}"),
                    char_count: 0,
                });
                self.by_key.insert(key, index);
                index
            }
        };
        let class = &mut self.classes[index];
        class.char_count += chars;
        class.class_name.clone()
    }

    /// Name of an existing class matching `style`, without creating one.
    pub fn find_class_name(&self, style: &StyleAttributes) -> Option<&str> {
        let key = encode_style_key(style, &self.known_properties);
        self.by_key
            .get(&key)
            .map(|&index| self.classes[index].class_name.as_str())
    }

    pub fn classes(&self) -> &[StyleClass] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// One `.class {…}` rule per class, in creation order.
    pub fn css_rules(&self) -> impl Iterator<Item = String> + '_ {
        self.classes
            .iter()
            .map(|class| format_css_rule(&format!(".{}", class.class_name), &class.diff))
    }
}
