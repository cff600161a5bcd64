//! Small formatting helpers shared by every module that writes CSS text.

use crate::style::StyleAttributes;

/// Round `value` to `precision` decimal places, rounding halves upward.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let d = 10f64.powi(precision as i32);
    (value * d + 0.5).floor() / d
}

/// Format a number the way it should appear in CSS: integral values lose
/// their fractional part, everything else uses the shortest exact form.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Format a rule block, one declaration per line, in the style's own order.
pub fn format_css_rule(selector: &str, style: &StyleAttributes) -> String {
    let mut css = format!("{selector} {{\n");
    for (property, value) in style.iter() {
        css.push_str(&format!("\t{property}:{value};\n"));
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;
    use pretty_assertions::assert_eq;

    #[test]
    fn round_to_matches_half_up_rounding() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-2.5, 0), -2.0);
        assert_eq!(round_to(0.05, 4), 0.05);
        assert_eq!(round_to(12.0, 0), 12.0);
    }

    #[test]
    fn format_number_drops_integral_fraction() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.025), "0.025");
    }

    #[test]
    fn formats_a_single_rule() {
        let css = format_css_rule(".selector", &style! { "color" => "red" });
        assert_eq!(css, ".selector {\n\tcolor:red;\n}\n");
    }

    #[test]
    fn formats_multiple_rules_in_insertion_order() {
        let css = format_css_rule(
            ".selector",
            &style! { "color" => "red", "font-size" => "2rem", "display" => "block" },
        );
        assert_eq!(
            css,
            ".selector {\n\tcolor:red;\n\tfont-size:2rem;\n\tdisplay:block;\n}\n"
        );
    }
}
