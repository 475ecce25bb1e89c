//! Inline style string parsing.
//!
//! A style string is the textual value of a `style="..."` attribute:
//! semicolon-separated `property: value` pairs with kebab-case property
//! names. Parsing here is purely textual; values are never type-checked or
//! unit-inferred.

/// One `property: value` pair extracted from a style string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDeclaration {
    /// Property name as written (kebab-case, trimmed).
    pub property: String,
    /// Property value, trimmed, otherwise verbatim.
    pub value: String,
}

/// Splits a style string into declarations.
///
/// Segments are separated by `;`; blank segments are dropped. Each segment
/// splits on its first `:` so colons inside values (`url(http://...)`)
/// survive. A segment with no `:` yields an empty value.
pub fn parse_declarations(css: &str) -> Vec<StyleDeclaration> {
    css.split(';')
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| match segment.split_once(':') {
            Some((property, value)) => StyleDeclaration {
                property: property.trim().to_string(),
                value: value.trim().to_string(),
            },
            None => StyleDeclaration {
                property: segment.trim().to_string(),
                value: String::new(),
            },
        })
        .collect()
}

/// Converts a kebab-case property name to camelCase.
///
/// Every `-x` sequence where `x` is an ASCII lowercase letter becomes the
/// uppercased `x` with the hyphen removed; a hyphen followed by anything
/// else stays as written. `background-color` becomes `backgroundColor`,
/// `-webkit-transform` becomes `WebkitTransform`.
pub fn camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut chars = property.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            match chars.peek() {
                Some(&next) if next.is_ascii_lowercase() => {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                }
                _ => out.push('-'),
            }
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_two_declarations() {
        let decls = parse_declarations("background-color: red; padding: 4px;");
        assert_eq!(
            decls,
            vec![
                StyleDeclaration {
                    property: "background-color".to_string(),
                    value: "red".to_string(),
                },
                StyleDeclaration {
                    property: "padding".to_string(),
                    value: "4px".to_string(),
                },
            ]
        );
    }

    #[test]
    fn drops_blank_segments() {
        let decls = parse_declarations("color: red;;  ;");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].property, "color");
    }

    #[test]
    fn empty_string_yields_nothing() {
        assert!(parse_declarations("").is_empty());
        assert!(parse_declarations("   ").is_empty());
    }

    #[test]
    fn missing_colon_yields_empty_value() {
        let decls = parse_declarations("color");
        assert_eq!(decls[0].property, "color");
        assert_eq!(decls[0].value, "");
    }

    #[test]
    fn splits_on_first_colon_only() {
        let decls = parse_declarations("background: url(http://example.com/x.png)");
        assert_eq!(decls[0].property, "background");
        assert_eq!(decls[0].value, "url(http://example.com/x.png)");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let decls = parse_declarations("  font-size :  12px  ");
        assert_eq!(decls[0].property, "font-size");
        assert_eq!(decls[0].value, "12px");
    }

    /// Only a lowercase ASCII letter after a hyphen is uppercased.
    #[test]
    fn camel_case_parity() {
        let cases: Vec<(&str, &str)> = vec![
            ("background-color", "backgroundColor"),
            ("font-size", "fontSize"),
            ("border-top-left-radius", "borderTopLeftRadius"),
            ("padding", "padding"),
            ("-webkit-transform", "WebkitTransform"),
            // Hyphen followed by a non-lowercase character is kept literally.
            ("margin-2", "margin-2"),
            ("border--color", "border-Color"),
            ("color-", "color-"),
            ("", ""),
        ];

        for (input, expected) in &cases {
            let actual = camel_case(input);
            assert_eq!(
                &actual, expected,
                "Mismatch for {:?}: got {:?}, expected {:?}",
                input, actual, expected
            );
        }
    }
}
