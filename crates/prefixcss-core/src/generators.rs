use crate::ast::Declaration;
use crate::tables::Generator;

/// Run one generator against a matched declaration, returning the extra
/// declarations to append after it. Generators never fail; an input they
/// cannot handle yields no output.
pub fn run(generator: Generator, property: &str, values: &[String]) -> Vec<Declaration> {
    match generator {
        Generator::BorderRadius => legacy_border_radius(property, values),
        Generator::LinearGradient => legacy_webkit_gradient(property, values),
    }
}

/// Old Gecko spelled the corner radius properties without the `top-left`
/// hyphenation: `-moz-border-radius-topleft` and friends.
fn legacy_border_radius(property: &str, values: &[String]) -> Vec<Declaration> {
    let legacy = match property {
        "border-top-right-radius" => "-moz-border-radius-topright",
        "border-top-left-radius" => "-moz-border-radius-topleft",
        "border-bottom-right-radius" => "-moz-border-radius-bottomright",
        "border-bottom-left-radius" => "-moz-border-radius-bottomleft",
        _ => return Vec::new(),
    };

    vec![Declaration {
        property: legacy.to_string(),
        values: values.to_vec(),
    }]
}

/// Rewrite `linear-gradient(...)` calls into the two-stop
/// `-webkit-gradient(linear, ...)` syntax that predates them.
///
/// Only the first two color stops survive; the legacy syntax cannot express
/// more, so extra stops are dropped. A call with fewer than two stops is left
/// unchanged. If nothing in the values was rewritten, no declaration is
/// emitted.
fn legacy_webkit_gradient(property: &str, values: &[String]) -> Vec<Declaration> {
    let mut rewrote = false;
    let mut new_values = Vec::with_capacity(values.len());

    for value in values {
        let mut sub_tokens = Vec::new();
        for sub in split_outside_parens(value, ' ') {
            if sub.contains("linear-gradient") {
                if let Some(converted) = convert_gradient_call(&sub) {
                    sub_tokens.push(converted);
                    rewrote = true;
                    continue;
                }
            }
            sub_tokens.push(sub);
        }
        new_values.push(sub_tokens.join(" "));
    }

    if !rewrote {
        return Vec::new();
    }

    vec![Declaration {
        property: property.to_string(),
        values: new_values,
    }]
}

/// Convert the first `linear-gradient(...)` call in `token` to the legacy
/// syntax. Returns `None` when the call is malformed (unbalanced parens,
/// fewer than two color stops).
fn convert_gradient_call(token: &str) -> Option<String> {
    let name_start = token.find("linear-gradient")?;
    let args_start = name_start + "linear-gradient".len();
    if token.as_bytes().get(args_start) != Some(&b'(') {
        return None;
    }

    let inner = &token[args_start + 1..];
    let close = matching_paren(inner)?;
    let mut args = split_outside_parens(&inner[..close], ',');

    let direction = if args.first().map_or(false, |a| is_direction(a)) {
        args.remove(0)
    } else {
        "top".to_string()
    };
    let (start, end) = direction_corners(&direction);

    if args.len() < 2 {
        return None;
    }

    Some(format!(
        "-webkit-gradient(linear, {}, {}, from({}), to({}))",
        start, end, args[0], args[1]
    ))
}

fn is_direction(arg: &str) -> bool {
    matches!(arg, "top" | "bottom" | "left" | "right") || arg.ends_with("deg")
}

/// Map a direction keyword or axis-aligned angle to the legacy start/end
/// corner pair. Directions the legacy syntax has no row for (diagonal angles)
/// use the `top` mapping.
fn direction_corners(direction: &str) -> (&'static str, &'static str) {
    match direction {
        "bottom" | "-90deg" => ("left bottom", "left top"),
        "left" | "180deg" | "-180deg" => ("left top", "right top"),
        "right" | "0deg" | "360deg" => ("right top", "left top"),
        _ => ("left top", "left bottom"),
    }
}

/// Index of the `)` closing the parenthesis group that `s` starts inside,
/// or `None` if unbalanced.
fn matching_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return Some(i);
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}

/// Split on `separator` occurrences outside parentheses, trimming each piece.
/// Keeps function calls like `rgba(0, 0, 0, 0.5)` intact.
fn split_outside_parens(s: &str, separator: char) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in s.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                if !current.trim().is_empty() {
                    pieces.push(current.trim().to_string());
                }
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }
    if !current.trim().is_empty() {
        pieces.push(current.trim().to_string());
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn border_radius_corners() {
        let cases = [
            ("border-top-right-radius", "-moz-border-radius-topright"),
            ("border-top-left-radius", "-moz-border-radius-topleft"),
            ("border-bottom-right-radius", "-moz-border-radius-bottomright"),
            ("border-bottom-left-radius", "-moz-border-radius-bottomleft"),
        ];
        for (property, legacy) in cases {
            let out = run(Generator::BorderRadius, property, &strings(&["4px"]));
            assert_eq!(out.len(), 1);
            assert_eq!(out[0].property, legacy);
            assert_eq!(out[0].values, strings(&["4px"]));
        }
    }

    #[test]
    fn border_radius_unknown_property_is_empty() {
        let out = run(Generator::BorderRadius, "border-radius", &strings(&["4px"]));
        assert!(out.is_empty());
    }

    #[test]
    fn gradient_default_direction_is_top() {
        let out = run(
            Generator::LinearGradient,
            "background",
            &strings(&["linear-gradient(#fff, #000)"]),
        );
        assert_eq!(
            out[0].values,
            strings(&["-webkit-gradient(linear, left top, left bottom, from(#fff), to(#000))"])
        );
        assert_eq!(out[0].property, "background");
    }

    #[test]
    fn gradient_direction_rows() {
        let cases = [
            ("top", "left top", "left bottom"),
            ("90deg", "left top", "left bottom"),
            ("bottom", "left bottom", "left top"),
            ("-90deg", "left bottom", "left top"),
            ("left", "left top", "right top"),
            ("180deg", "left top", "right top"),
            ("-180deg", "left top", "right top"),
            ("right", "right top", "left top"),
            ("0deg", "right top", "left top"),
            ("360deg", "right top", "left top"),
        ];
        for (direction, start, end) in cases {
            let value = format!("linear-gradient({}, #fff, #000)", direction);
            let out = run(Generator::LinearGradient, "background", &[value]);
            let expected = format!(
                "-webkit-gradient(linear, {}, {}, from(#fff), to(#000))",
                start, end
            );
            assert_eq!(out[0].values, vec![expected], "direction {}", direction);
        }
    }

    #[test]
    fn gradient_unmapped_angle_falls_back_to_top() {
        let out = run(
            Generator::LinearGradient,
            "background",
            &strings(&["linear-gradient(45deg, #fff, #000)"]),
        );
        assert_eq!(
            out[0].values,
            strings(&["-webkit-gradient(linear, left top, left bottom, from(#fff), to(#000))"])
        );
    }

    #[test]
    fn gradient_drops_extra_stops() {
        let out = run(
            Generator::LinearGradient,
            "background-image",
            &strings(&["linear-gradient(top, #fff, #888, #000)"]),
        );
        assert_eq!(
            out[0].values,
            strings(&["-webkit-gradient(linear, left top, left bottom, from(#fff), to(#888))"])
        );
    }

    #[test]
    fn gradient_with_one_stop_is_skipped() {
        let out = run(
            Generator::LinearGradient,
            "background",
            &strings(&["linear-gradient(#fff)"]),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn gradient_keeps_other_sub_tokens() {
        let out = run(
            Generator::LinearGradient,
            "background",
            &strings(&["url(stripe.png) linear-gradient(top, #fff, #000)"]),
        );
        assert_eq!(
            out[0].values,
            strings(&[
                "url(stripe.png) -webkit-gradient(linear, left top, left bottom, from(#fff), to(#000))"
            ])
        );
    }

    #[test]
    fn gradient_stops_may_nest_parens() {
        let out = run(
            Generator::LinearGradient,
            "background",
            &strings(&["linear-gradient(top, rgba(255, 255, 255, 0.5), rgb(0, 0, 0))"]),
        );
        assert_eq!(
            out[0].values,
            strings(&[
                "-webkit-gradient(linear, left top, left bottom, from(rgba(255, 255, 255, 0.5)), to(rgb(0, 0, 0)))"
            ])
        );
    }

    #[test]
    fn gradient_untouched_values_emit_nothing() {
        let out = run(
            Generator::LinearGradient,
            "background",
            &strings(&["url(plain.png)"]),
        );
        assert!(out.is_empty());
    }
}
