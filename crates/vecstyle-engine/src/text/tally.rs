use std::collections::HashMap;

use crate::style::{StyleAttributes, encode_style_key};

/// A distinct style and the number of characters rendered with it.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleFrequency {
    pub key: String,
    pub style: StyleAttributes,
    pub char_count: usize,
}

/// Character-weighted frequency count of styles, in first-encounter order.
#[derive(Debug)]
pub struct StyleTally {
    known_properties: Vec<String>,
    buckets: Vec<StyleFrequency>,
    by_key: HashMap<String, usize>,
}

impl StyleTally {
    pub fn new<S: AsRef<str>>(known_properties: &[S]) -> Self {
        Self {
            known_properties: known_properties
                .iter()
                .map(|p| p.as_ref().to_string())
                .collect(),
            buckets: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    /// Credit `chars` characters to `style`. Empty text carries no weight and
    /// is not recorded at all.
    pub fn add(&mut self, style: &StyleAttributes, chars: usize) {
        if chars == 0 {
            return;
        }
        let key = encode_style_key(style, &self.known_properties);
        match self.by_key.get(&key) {
            Some(&index) => self.buckets[index].char_count += chars,
            None => {
                self.by_key.insert(key.clone(), self.buckets.len());
                self.buckets.push(StyleFrequency {
                    key,
                    style: style.clone(),
                    char_count: chars,
                });
            }
        }
    }

    /// The style covering the most characters. Ties go to the style seen first.
    pub fn dominant(&self) -> Option<&StyleAttributes> {
        self.buckets
            .iter()
            .fold(None::<&StyleFrequency>, |best, bucket| match best {
                Some(b) if b.char_count >= bucket.char_count => Some(b),
                _ => Some(bucket),
            })
            .map(|bucket| &bucket.style)
    }

    /// Buckets by descending character count, ties in encounter order.
    pub fn ranked(&self) -> Vec<&StyleFrequency> {
        let mut ranked: Vec<_> = self.buckets.iter().collect();
        ranked.sort_by(|a, b| b.char_count.cmp(&a.char_count));
        ranked
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;
    use crate::style::TEXT_STYLE_PROPERTIES;
    use pretty_assertions::assert_eq;

    #[test]
    fn dominant_style_has_most_characters() {
        let a = style! { "color" => "red" };
        let b = style! { "color" => "blue" };
        let mut tally = StyleTally::new(TEXT_STYLE_PROPERTIES);
        tally.add(&b, 5);
        tally.add(&a, 4);
        tally.add(&a, 4);

        assert_eq!(tally.dominant(), Some(&a));
    }

    #[test]
    fn ties_go_to_first_encountered() {
        let a = style! { "color" => "red" };
        let b = style! { "color" => "blue" };
        let mut tally = StyleTally::new(TEXT_STYLE_PROPERTIES);
        tally.add(&b, 3);
        tally.add(&a, 3);

        assert_eq!(tally.dominant(), Some(&b));
        let order: Vec<_> = tally.ranked().iter().map(|f| f.style.clone()).collect();
        assert_eq!(order, vec![b, a]);
    }

    #[test]
    fn empty_text_is_not_counted() {
        let mut tally = StyleTally::new(TEXT_STYLE_PROPERTIES);
        tally.add(&style! { "color" => "red" }, 0);

        assert!(tally.is_empty());
        assert_eq!(tally.dominant(), None);
    }

    #[test]
    fn keys_ignore_non_whitelisted_properties() {
        let mut tally = StyleTally::new(TEXT_STYLE_PROPERTIES);
        tally.add(&style! { "color" => "red", "top" => "1px" }, 2);
        tally.add(&style! { "color" => "red" }, 2);

        assert_eq!(tally.ranked().len(), 1);
        assert_eq!(tally.ranked()[0].char_count, 4);
    }
}
