//! # Style Primitives
//!
//! Flat CSS property maps and the machinery for comparing and deduplicating
//! them.
//!
//! ## Modules
//!
//! - **`key`**: order-stable string keys built from a whitelist of properties
//! - **`diff`**: the properties in which one style overrides another
//! - **`registry`**: deduplicates diffs into reusable, numbered class names
//!
//! ## Value Equality
//!
//! [`StyleValue`] compares loosely: the number `1` and the text `"1"` are the
//! same value, because both end up as the same CSS declaration.

pub mod diff;
pub mod key;
pub mod registry;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::css::format_number;

pub use diff::style_diff;
pub use key::{TEXT_STYLE_PROPERTIES, encode_style_key};
pub use registry::{StyleClass, StyleClassRegistry};

/// A single CSS property value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => f.write_str(&format_number(*n)),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl StyleValue {
    /// The numeric value, parsing text such as `".5"` or `"1.0"`. Text with a
    /// unit (`"12px"`) is not a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

impl PartialEq for StyleValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StyleValue::Number(a), StyleValue::Number(b)) => a == b,
            (StyleValue::Text(a), StyleValue::Text(b)) => a == b,
            (StyleValue::Number(n), text) | (text, StyleValue::Number(n)) => {
                text.as_number() == Some(*n)
            }
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(value.into())
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        StyleValue::Number(value.into())
    }
}

/// An insertion-ordered map of CSS properties.
///
/// Overwriting a property keeps its original position, so a style extended
/// with overrides still prints its declarations in a stable order.
#[derive(Debug, Clone, Default)]
pub struct StyleAttributes {
    entries: Vec<(String, StyleValue)>,
}

impl StyleAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Set a property, returning the value it replaced.
    pub fn insert(
        &mut self,
        property: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == property) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((property, value));
                None
            }
        }
    }

    pub fn remove(&mut self, property: &str) -> Option<StyleValue> {
        let index = self.entries.iter().position(|(name, _)| name == property)?;
        Some(self.entries.remove(index).1)
    }

    /// Copy every property of `other` onto `self`, overriding shared ones.
    pub fn extend_from(&mut self, other: &StyleAttributes) {
        for (property, value) in other.iter() {
            self.insert(property, value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Two styles are equal when they hold the same properties with loosely equal
/// values, regardless of declaration order.
impl PartialEq for StyleAttributes {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(property, value)| other.get(property) == Some(value))
    }
}

impl<K, V> FromIterator<(K, V)> for StyleAttributes
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = StyleAttributes::new();
        for (property, value) in iter {
            style.insert(property, value);
        }
        style
    }
}

impl Serialize for StyleAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for StyleAttributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StyleVisitor;

        impl<'de> Visitor<'de> for StyleVisitor {
            type Value = StyleAttributes;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of CSS property names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut style = StyleAttributes::new();
                while let Some((property, value)) = map.next_entry::<String, StyleValue>()? {
                    style.insert(property, value);
                }
                Ok(style)
            }
        }

        deserializer.deserialize_map(StyleVisitor)
    }
}

/// Build a [`StyleAttributes`] from `"property" => value` pairs.
///
/// ```
/// use vecstyle_engine::style;
///
/// let s = style! { "color" => "red", "opacity" => 1 };
/// assert_eq!(s.get("opacity").unwrap().to_string(), "1");
/// ```
#[macro_export]
macro_rules! style {
    () => { $crate::style::StyleAttributes::new() };
    ($($property:expr => $value:expr),+ $(,)?) => {{
        let mut style = $crate::style::StyleAttributes::new();
        $( style.insert($property, $value); )+
        style
    }};
}
