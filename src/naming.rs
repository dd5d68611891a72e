//! Component name derivation
//!
//! Turns file stems like `arrow-right` or `chat_bubble.left` into
//! pascal-cased component names (`ArrowRight`, `ChatBubbleLeft`).

/// Names the generated module binds itself, so an icon may not use them
const RESERVED: &[&str] = &["React", "ForwardRef"];

/// Convert a file stem to a pascal-cased identifier
///
/// Words split on `-`, `_`, `.`, whitespace, and on a lower to upper case
/// transition. Each word is capitalized and the remainder lower-cased; a
/// letter right after a digit is upper-cased.
pub fn pascal_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for word in split_words(input) {
        let mut after_digit = false;
        for (i, c) in word.chars().enumerate() {
            if i == 0 || (after_digit && c.is_alphabetic()) {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            after_digit = c.is_ascii_digit();
        }
    }

    out
}

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '.') || c.is_whitespace()
}

fn split_words(input: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let mut prev: Option<char> = None;

    for (i, c) in input.char_indices() {
        if is_separator(c) {
            if let Some(s) = start.take() {
                words.push(&input[s..i]);
            }
            prev = None;
            continue;
        }

        match start {
            None => start = Some(i),
            Some(s) => {
                if prev.is_some_and(char::is_lowercase) && c.is_uppercase() {
                    words.push(&input[s..i]);
                    start = Some(i);
                }
            }
        }
        prev = Some(c);
    }

    if let Some(s) = start {
        words.push(&input[s..]);
    }

    words
}

/// Check that a derived name can be emitted as a JS binding
///
/// Returns the reason on failure.
pub fn validate_identifier(identifier: &str) -> Result<(), &'static str> {
    let mut chars = identifier.chars();
    let Some(first) = chars.next() else {
        return Err("file name has no usable characters");
    };

    if first.is_ascii_digit() {
        return Err("component names cannot start with a digit");
    }

    if !identifier
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '$')
    {
        return Err("component names may only contain letters, digits, '_' and '$'");
    }

    if RESERVED.contains(&identifier) {
        return Err("name is already bound inside the generated module");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case() {
        assert_eq!(pascal_case("arrow-right"), "ArrowRight");
        assert_eq!(pascal_case("x-mark"), "XMark");
        assert_eq!(pascal_case("academic-cap"), "AcademicCap");
    }

    #[test]
    fn mixed_separators() {
        assert_eq!(pascal_case("chat_bubble-left"), "ChatBubbleLeft");
        assert_eq!(pascal_case("chat.bubble  left"), "ChatBubbleLeft");
        assert_eq!(pascal_case("--arrow--"), "Arrow");
    }

    #[test]
    fn camel_case_input_splits_on_case_change() {
        assert_eq!(pascal_case("arrowRight"), "ArrowRight");
        assert_eq!(pascal_case("ARROW"), "Arrow");
    }

    #[test]
    fn digits() {
        assert_eq!(pascal_case("h1"), "H1");
        assert_eq!(pascal_case("arrow-2x"), "Arrow2X");
        assert_eq!(pascal_case("bars-3-bottom-left"), "Bars3BottomLeft");
    }

    #[test]
    fn empty_input() {
        assert_eq!(pascal_case(""), "");
        assert_eq!(pascal_case("-_."), "");
    }

    #[test]
    fn validate_accepts_normal_names() {
        assert!(validate_identifier("ArrowRight").is_ok());
        assert!(validate_identifier("H1").is_ok());
    }

    #[test]
    fn validate_rejects_bad_names() {
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("24Hours").is_err());
        assert!(validate_identifier("Arrow+").is_err());
        assert!(validate_identifier("React").is_err());
        assert!(validate_identifier("ForwardRef").is_err());
    }
}
