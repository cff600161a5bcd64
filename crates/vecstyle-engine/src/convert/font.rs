use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Maps a document font name to CSS font properties.
///
/// Empty strings mean "emit nothing for this property".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRule {
    pub aifont: String,
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub style: String,
    /// Baseline shift for point text, as a percentage of the font size
    /// (e.g. `"8%"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vshift: Option<String>,
}

impl FontRule {
    pub fn new(
        aifont: impl Into<String>,
        family: impl Into<String>,
        weight: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            aifont: aifont.into(),
            family: family.into(),
            weight: weight.into(),
            style: style.into(),
            vshift: None,
        }
    }
}

const ARIAL: &str = "arial,helvetica,sans-serif";
const GEORGIA: &str = "georgia,'times new roman',times,serif";

pub fn default_fonts() -> Vec<FontRule> {
    vec![
        FontRule::new("ArialMT", ARIAL, "", ""),
        FontRule::new("Arial-BoldMT", ARIAL, "bold", ""),
        FontRule::new("Arial-ItalicMT", ARIAL, "", "italic"),
        FontRule::new("Arial-BoldItalicMT", ARIAL, "bold", "italic"),
        FontRule::new("Georgia", GEORGIA, "", ""),
        FontRule::new("Georgia-Bold", GEORGIA, "bold", ""),
        FontRule::new("Georgia-Italic", GEORGIA, "", "italic"),
        FontRule::new("Georgia-BoldItalic", GEORGIA, "bold", "italic"),
    ]
}

/// Look up `aifont` in `fonts`.
///
/// Unknown fonts get no family and a weight and style guessed from the name.
pub fn find_font_info<'a>(aifont: &str, fonts: &'a [FontRule]) -> Cow<'a, FontRule> {
    if let Some(rule) = fonts.iter().find(|rule| rule.aifont == aifont) {
        return Cow::Borrowed(rule);
    }
    let weight = if aifont.contains("Bold") { "700" } else { "500" };
    let style = if aifont.contains("Italic") { "italic" } else { "" };
    Cow::Owned(FontRule::new(aifont, "", weight, style))
}

/// `base` with each rule of `extra` replacing the rule for the same font in
/// place, or appended when the font is new.
pub fn extend_font_list(base: &[FontRule], extra: &[FontRule]) -> Vec<FontRule> {
    let mut fonts = base.to_vec();
    let mut index: HashMap<String, usize> = fonts
        .iter()
        .enumerate()
        .map(|(i, rule)| (rule.aifont.clone(), i))
        .collect();
    for rule in extra {
        match index.get(&rule.aifont) {
            Some(&i) => fonts[i] = rule.clone(),
            None => {
                index.insert(rule.aifont.clone(), fonts.len());
                fonts.push(rule.clone());
            }
        }
    }
    fonts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn known_fonts_come_from_the_table() {
        let fonts = default_fonts();
        let info = find_font_info("Georgia-Bold", &fonts);
        assert_eq!(info.family, GEORGIA);
        assert_eq!(info.weight, "bold");
        assert!(matches!(info, Cow::Borrowed(_)));
    }

    #[rstest]
    #[case("Helvetica-BoldOblique", "700", "")]
    #[case("Helvetica-LightItalic", "500", "italic")]
    #[case("Futura", "500", "")]
    fn unknown_fonts_are_guessed_from_their_name(
        #[case] aifont: &str,
        #[case] weight: &str,
        #[case] style: &str,
    ) {
        let info = find_font_info(aifont, &[]);
        assert_eq!(info.family, "");
        assert_eq!(info.weight, weight);
        assert_eq!(info.style, style);
    }

    #[test]
    fn extension_appends_new_fonts() {
        let base = vec![FontRule::new("ArialMT", ARIAL, "", "")];
        let extra = FontRule::new("Georgia", "georgia,'times new roman'", "", "");

        assert_eq!(
            extend_font_list(&base, std::slice::from_ref(&extra)),
            vec![base[0].clone(), extra]
        );
    }

    #[test]
    fn extension_replaces_in_place() {
        let base = vec![
            FontRule::new("ArialMT", ARIAL, "", ""),
            FontRule::new("Arial-BoldMT", ARIAL, "bold", ""),
        ];
        let replacement = FontRule::new("ArialMT", "Test", "", "");

        assert_eq!(
            extend_font_list(&base, std::slice::from_ref(&replacement)),
            vec![replacement, base[1].clone()]
        );
    }
}
