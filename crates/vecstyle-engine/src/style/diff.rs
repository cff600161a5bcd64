use super::StyleAttributes;

/// Properties of `a` whose values differ from `b`, or `None` when `b` already
/// agrees with every property `a` sets.
///
/// A property missing from `b` counts as different. Properties only `b` sets
/// are not reported.
pub fn style_diff(a: &StyleAttributes, b: &StyleAttributes) -> Option<StyleAttributes> {
    let diff: StyleAttributes = a
        .iter()
        .filter(|(property, value)| b.get(property) != Some(*value))
        .map(|(property, value)| (property, value.clone()))
        .collect();

    (!diff.is_empty()).then_some(diff)
}
