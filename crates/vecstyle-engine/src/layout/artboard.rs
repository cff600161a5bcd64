use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether an artboard renders at its own width or stretches to fill its
/// visibility range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Responsiveness {
    #[default]
    Fixed,
    Dynamic,
}

impl fmt::Display for Responsiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Responsiveness::Fixed => f.write_str("fixed"),
            Responsiveness::Dynamic => f.write_str("dynamic"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtboardDescriptor {
    pub id: String,
    /// Whole pixels.
    pub effective_width: u32,
    #[serde(default)]
    pub responsiveness: Responsiveness,
}

impl ArtboardDescriptor {
    pub fn new(id: impl Into<String>, effective_width: u32, responsiveness: Responsiveness) -> Self {
        Self {
            id: id.into(),
            effective_width,
            responsiveness,
        }
    }

    /// Descriptor for an artboard spanning `left..right`, rounded to whole
    /// pixels.
    ///
    /// # Panics
    ///
    /// If the width is negative or not finite. Both mean the bounds were
    /// extracted wrongly.
    pub fn from_bounds(
        id: impl Into<String>,
        left: f64,
        right: f64,
        responsiveness: Responsiveness,
    ) -> Self {
        let width = right - left;
        assert!(
            width.is_finite() && width >= 0.0,
            "artboard width must be a non-negative number, got {width}"
        );
        Self::new(id, width.round() as u32, responsiveness)
    }

    /// Descriptor for an artboard named like `Desktop:900,dynamic`.
    ///
    /// The numeric setting overrides `measured_width`; `fixed` and `dynamic`
    /// flags override `default_responsiveness`. The id is the part of the name
    /// before the settings, made safe for use in HTML ids.
    pub fn from_artboard_name(
        name: &str,
        measured_width: u32,
        default_responsiveness: Responsiveness,
    ) -> Self {
        let settings = parse_object_name(name);
        let responsiveness = if settings.flag("dynamic") {
            Responsiveness::Dynamic
        } else if settings.flag("fixed") {
            Responsiveness::Fixed
        } else {
            default_responsiveness
        };
        let base_name = name.split(':').next().unwrap_or_default().trim();
        Self::new(
            make_keyword(base_name),
            settings.width.unwrap_or(measured_width),
            responsiveness,
        )
    }
}

/// Settings encoded after the first colon of a layer or artboard name, e.g.
/// `Artboard 1:600,fixed` or `Layer 2:png,quality=80`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectNameSettings {
    pub width: Option<u32>,
    /// Remaining `key=value` pairs and flags (stored with value `"true"`), in
    /// name order.
    pub values: Vec<(String, String)>,
}

impl ObjectNameSettings {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// True when `key` is set to `true` or `yes`.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some("true" | "yes"))
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

pub fn parse_object_name(name: &str) -> ObjectNameSettings {
    static COPY_SUFFIX: OnceLock<Regex> = OnceLock::new();
    let copy_suffix =
        COPY_SUFFIX.get_or_init(|| Regex::new(r"(?i) copy.*").expect("Invalid copy suffix regex"));

    let mut settings = ObjectNameSettings::default();
    let Some((_, encoded)) = name.split_once(':') else {
        return settings;
    };
    let encoded = copy_suffix.replace(encoded, "");

    for part in encoded.split(',') {
        if is_digits(part) {
            settings.width = part.parse().ok();
        } else if let Some((key, value)) = part.split_once('=')
            && !key.is_empty()
        {
            if !value.is_empty() {
                settings.values.push((key.to_string(), value.to_string()));
            }
        } else if !part.is_empty() {
            settings.values.push((part.to_string(), "true".to_string()));
        }
    }
    settings
}

/// Artboards whose names start with `-` are left out of the output.
pub fn is_usable_artboard(name: &str) -> bool {
    !name.starts_with('-')
}

/// Replace every run of characters not allowed in an id with `_`.
pub fn make_keyword(text: &str) -> String {
    static NON_KEYWORD: OnceLock<Regex> = OnceLock::new();
    let re =
        NON_KEYWORD.get_or_init(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("Invalid keyword regex"));
    re.replace_all(text, "_").into_owned()
}

/// Artboards in ascending width order. Equal widths keep their input order.
pub fn sort_artboards(descriptors: &[ArtboardDescriptor]) -> Vec<ArtboardDescriptor> {
    let mut sorted = descriptors.to_vec();
    sorted.sort_by_key(|artboard| artboard.effective_width);
    sorted
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    #[error("Artboard group {group} has no artboards")]
    Empty { group: String },

    #[error("Artboards {first} and {second} in group {group} are both {width}px wide")]
    DuplicateWidth {
        group: String,
        first: String,
        second: String,
        width: u32,
    },
}

/// Artboards showing the same content at different widths, sorted by width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtboardGroup {
    name: String,
    artboards: Vec<ArtboardDescriptor>,
}

impl ArtboardGroup {
    pub fn try_new(
        name: impl Into<String>,
        descriptors: Vec<ArtboardDescriptor>,
    ) -> Result<Self, GroupError> {
        let name = name.into();
        if descriptors.is_empty() {
            return Err(GroupError::Empty { group: name });
        }
        let artboards = sort_artboards(&descriptors);
        if let Some(pair) = artboards
            .windows(2)
            .find(|pair| pair[0].effective_width == pair[1].effective_width)
        {
            return Err(GroupError::DuplicateWidth {
                first: pair[0].id.clone(),
                second: pair[1].id.clone(),
                width: pair[0].effective_width,
                group: name,
            });
        }
        Ok(Self { name, artboards })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn artboards(&self) -> &[ArtboardDescriptor] {
        &self.artboards
    }

    pub fn len(&self) -> usize {
        self.artboards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artboards.is_empty()
    }

    /// Name of the CSS container wrapping the group's artboards.
    pub fn container_id(&self, namespace: &str) -> String {
        format!("{namespace}{}-box", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn artboard(id: &str, width: u32) -> ArtboardDescriptor {
        ArtboardDescriptor::new(id, width, Responsiveness::Fixed)
    }

    #[test]
    fn sorting_is_stable_and_leaves_input_alone() {
        let input = vec![artboard("c", 900), artboard("a", 300), artboard("b", 300)];
        let sorted = sort_artboards(&input);

        let ids: Vec<_> = sorted.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(input[0].id, "c");
    }

    #[test]
    fn bounds_are_rounded() {
        let descriptor = ArtboardDescriptor::from_bounds("ab", 10.0, 609.6, Responsiveness::Dynamic);
        assert_eq!(descriptor.effective_width, 600);
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn negative_widths_panic() {
        ArtboardDescriptor::from_bounds("ab", 100.0, 0.0, Responsiveness::Fixed);
    }

    #[rstest]
    #[case("Artboard 1", None, &[])]
    #[case("Artboard 1:300", Some(300), &[])]
    #[case("Artboard 1:600,fixed", Some(600), &[("fixed", "true")])]
    #[case("Layer 2:png,quality=80", None, &[("png", "true"), ("quality", "80")])]
    #[case("Artboard 1:600 copy 2", Some(600), &[])]
    #[case("Artboard 1:600,dynamic Copy", Some(600), &[("dynamic", "true")])]
    fn parses_settings_from_names(
        #[case] name: &str,
        #[case] width: Option<u32>,
        #[case] values: &[(&str, &str)],
    ) {
        let settings = parse_object_name(name);
        assert_eq!(settings.width, width);
        let expected: Vec<(String, String)> = values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(settings.values, expected);
    }

    #[rstest]
    #[case("Artboard 1:600,fixed", Responsiveness::Dynamic, 600, Responsiveness::Fixed)]
    #[case("Artboard 1:600,dynamic", Responsiveness::Fixed, 600, Responsiveness::Dynamic)]
    #[case("Artboard 1:600", Responsiveness::Fixed, 600, Responsiveness::Fixed)]
    #[case("Artboard 1", Responsiveness::Dynamic, 100, Responsiveness::Dynamic)]
    fn descriptors_from_names(
        #[case] name: &str,
        #[case] default: Responsiveness,
        #[case] width: u32,
        #[case] responsiveness: Responsiveness,
    ) {
        let descriptor = ArtboardDescriptor::from_artboard_name(name, 100, default);
        assert_eq!(descriptor.id, "Artboard_1");
        assert_eq!(descriptor.effective_width, width);
        assert_eq!(descriptor.responsiveness, responsiveness);
    }

    #[test]
    fn names_starting_with_a_dash_are_skipped() {
        let names = ["Artboard 1:600", "-Artboard 3", "Artboard 2:600"];
        let usable: Vec<_> = names.into_iter().filter(|n| is_usable_artboard(n)).collect();
        assert_eq!(usable, vec!["Artboard 1:600", "Artboard 2:600"]);
    }

    #[test]
    fn groups_sort_and_validate() {
        let group =
            ArtboardGroup::try_new("chart", vec![artboard("wide", 800), artboard("narrow", 400)])
                .unwrap();
        assert_eq!(group.artboards()[0].id, "narrow");
        assert_eq!(group.container_id("g-"), "g-chart-box");

        assert_eq!(
            ArtboardGroup::try_new("chart", vec![]),
            Err(GroupError::Empty {
                group: "chart".into()
            })
        );
        let err = ArtboardGroup::try_new("chart", vec![artboard("a", 400), artboard("b", 400)])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Artboards a and b in group chart are both 400px wide"
        );
    }
}
