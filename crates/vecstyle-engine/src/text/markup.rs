//! Cleaning of run text before it is placed inside `<p>`/`<span>` tags.
//!
//! Markup characters (`<`, `>`, `&`, `"`) are passed through untouched so
//! that designers can type simple HTML into a text frame. Typographic
//! characters are replaced with named entities.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::warnings::{StyleWarning, WarningSink};

/// Tags that suggest formatting was typed rather than styled.
const FORMATTING_TAGS: &[&str] = &["i", "span", "b", "strong", "em"];

const ENTITY_REPLACEMENTS: &[(char, &str)] = &[
    ('\u{00A0}', "&nbsp;"),
    ('\u{00A9}', "&copy;"),
    ('\u{00AE}', "&reg;"),
    ('\u{00B0}', "&deg;"),
    ('\u{00B1}', "&plusmn;"),
    ('\u{00B7}', "&middot;"),
    ('\u{00BC}', "&frac14;"),
    ('\u{00BD}', "&frac12;"),
    ('\u{00BE}', "&frac34;"),
    ('\u{00D7}', "&times;"),
    ('\u{2013}', "&ndash;"),
    ('\u{2014}', "&mdash;"),
    ('\u{2018}', "&lsquo;"),
    ('\u{2019}', "&rsquo;"),
    ('\u{201C}', "&ldquo;"),
    ('\u{201D}', "&rdquo;"),
    ('\u{2022}', "&bull;"),
    ('\u{2026}', "&hellip;"),
    ('\u{2032}', "&prime;"),
    ('\u{2033}', "&Prime;"),
    ('\u{20AC}', "&euro;"),
    ('\u{2122}', "&trade;"),
];

/// Replace typographic characters with named entities.
pub fn clean_html_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match ENTITY_REPLACEMENTS.iter().find(|(from, _)| *from == c) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out
}

/// Name of the first HTML-looking tag in `text`.
///
/// Only good enough to decide whether to warn.
pub fn find_html_tag(text: &str) -> Option<&str> {
    if !text.contains('<') {
        return None;
    }
    static HTML_TAG: OnceLock<Regex> = OnceLock::new();
    let re = HTML_TAG.get_or_init(|| Regex::new(r"<(\w+)[^>]*>").expect("Invalid tag regex"));
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn straighten_curly_quotes(text: &str) -> String {
    text.replace(['\u{201C}', '\u{201D}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'")
}

/// Straighten curly quotes inside `<…>` so typed attributes stay valid.
pub fn straighten_curly_quotes_inside_tags(text: &str) -> String {
    static TAG_SPAN: OnceLock<Regex> = OnceLock::new();
    let re = TAG_SPAN.get_or_init(|| Regex::new(r"<[^\n]+?>").expect("Invalid tag span regex"));
    re.replace_all(text, |caps: &Captures<'_>| straighten_curly_quotes(&caps[0]))
        .into_owned()
}

/// Prepare typed markup in `text`, warning once about formatting tags.
pub fn clean_html_tags(text: &str, warnings: &mut impl WarningSink) -> String {
    let Some(tag) = find_html_tag(text) else {
        return text.to_string();
    };
    if FORMATTING_TAGS.contains(&tag.to_lowercase().as_str()) {
        warnings.report(&StyleWarning::InlineMarkup { tag: tag.to_string() }, text);
    }
    straighten_curly_quotes_inside_tags(text)
}
