//! Shared utility functions.

/// Turns a free-form label into a file-name-safe fragment.
///
/// Alphanumerics, `-` and `_` are kept; every other character becomes `_`.
/// An empty label maps to `"unnamed"`.
pub fn slugify(input: &str) -> String {
    let slug: String = input
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if slug.is_empty() {
        "unnamed".to_string()
    } else {
        slug
    }
}

/// Converts seconds to milliseconds.
pub fn seconds_to_ms(seconds: f64) -> f64 {
    seconds * 1000.0
}

/// Parses a `#RRGGBB` color string.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Random"), "Random");
        assert_eq!(slugify("Quase Ordenado"), "Quase_Ordenado");
        assert_eq!(slugify("a/b"), "a_b");
        assert_eq!(slugify("  "), "unnamed");
        assert_eq!(slugify("reverse-sorted_1"), "reverse-sorted_1");
    }

    #[test]
    fn test_seconds_to_ms() {
        assert_eq!(seconds_to_ms(0.25), 250.0);
        assert_eq!(seconds_to_ms(1.0), 1000.0);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0000"), Some((255, 0, 0)));
        assert_eq!(parse_hex_color("#00ff7f"), Some((0, 255, 127)));
        assert_eq!(parse_hex_color("FF0000"), None);
        assert_eq!(parse_hex_color("#ZZ0000"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
    }
}
