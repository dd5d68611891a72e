//! Escaping for generated JavaScript source
//!
//! Attribute values and text come from arbitrary SVG markup and must not be
//! able to break out of the string literal they are emitted into.

/// Escape a string for a double-quoted JS string literal
///
/// Escapes: backslash, double quotes, newlines, carriage returns, tabs,
/// the line/paragraph separators, and remaining control characters.
pub fn escape_js(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Quote a string as a JS string literal
pub fn js_string(s: &str) -> String {
    format!("\"{}\"", escape_js(s))
}

/// Format an object key, quoting it unless it is a plain identifier
pub fn js_key(key: &str) -> String {
    if is_plain_identifier(key) {
        key.to_string()
    } else {
        js_string(key)
    }
}

/// Whether `s` is an ASCII identifier usable as a bare object key
pub fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Whether an attribute value can be emitted as a bare JS number
///
/// Accepts plain decimals like `24`, `1.5` and `-2`. Leading zeros,
/// exponents and bare fractions (`.5`) stay strings.
pub fn is_numeric_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };

    let int_ok = !int.is_empty()
        && int.bytes().all(|b| b.is_ascii_digit())
        && (int == "0" || !int.starts_with('0'));
    let frac_ok = match frac {
        Some(f) => !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    };

    int_ok && frac_ok
}
