use super::StyleAttributes;

/// Properties that identify a text style, in key order.
///
/// Anything else set on a style (`top`, bookkeeping fields) is ignored when
/// deciding whether two styles are the same. Appending a property changes every
/// key, so treat edits to this list as a format change.
///
/// Values are not escaped. A value containing `~` can collide with a
/// different style's key, so values are expected to be plain CSS without it.
pub const TEXT_STYLE_PROPERTIES: &[&str] = &[
    "position",
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "color",
    "line-height",
    "height",
    "letter-spacing",
    "opacity",
    "padding-top",
    "padding-bottom",
    "text-align",
    "text-transform",
    "mix-blend-mode",
    "vertical-align",
];

const KEY_SEPARATOR: char = '~';

/// Canonical key for `style`: each known property contributes `~` followed by
/// its value, or nothing after the separator when unset.
pub fn encode_style_key<S: AsRef<str>>(style: &StyleAttributes, known_properties: &[S]) -> String {
    let mut key = String::new();
    for property in known_properties {
        key.push(KEY_SEPARATOR);
        if let Some(value) = style.get(property.as_ref()) {
            key.push_str(&value.to_string());
        }
    }
    key
}
