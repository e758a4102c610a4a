//! ECMA-262-ish regex translation shared by the `pattern`/`propertyNames` keywords and the
//! `regex` format (`crate::format::is_valid_regex`).
use std::ops::Index;

use once_cell::sync::Lazy;

// `regex::Regex` is used here (rather than `fancy_regex::Regex`) to take advantage of
// `replace_all`, which `fancy_regex` does not expose.
static CONTROL_GROUPS_RE: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"\\c[A-Za-z]").expect("valid regex"));

/// Translates a handful of ECMA-262 character classes (`\d \D \w \W \s \S`) and `\cX`
/// control-character escapes that `fancy_regex` does not understand on its own into
/// equivalent character classes, then compiles the result.
#[allow(clippy::result_large_err)]
pub(crate) fn convert_regex(pattern: &str) -> Result<fancy_regex::Regex, fancy_regex::Error> {
    let new_pattern = CONTROL_GROUPS_RE.replace_all(pattern, replace_control_group);
    let mut out = String::with_capacity(new_pattern.len());
    let mut chars = new_pattern.chars().peekable();
    while let Some(current) = chars.next() {
        if current == '\\' {
            if let Some(next) = chars.next() {
                match next {
                    'd' => out.push_str("[0-9]"),
                    'D' => out.push_str("[^0-9]"),
                    'w' => out.push_str("[A-Za-z0-9_]"),
                    'W' => out.push_str("[^A-Za-z0-9_]"),
                    's' => out.push_str("[ \t\n\r\u{000b}\u{000c}\u{2003}\u{feff}\u{2029}\u{00a0}]"),
                    'S' => out.push_str("[^ \t\n\r\u{000b}\u{000c}\u{2003}\u{feff}\u{2029}\u{00a0}]"),
                    _ => {
                        out.push(current);
                        out.push(next);
                    }
                }
            } else {
                out.push(current);
            }
        } else {
            out.push(current);
        }
    }
    fancy_regex::Regex::new(&out)
}

#[allow(clippy::arithmetic_side_effects)]
fn replace_control_group(captures: &regex::Captures) -> String {
    ((captures
        .index(0)
        .trim_start_matches(r"\c")
        .chars()
        .next()
        .expect("present per the [A-Za-z] rule in CONTROL_GROUPS_RE")
        .to_ascii_uppercase() as u8
        - 64) as char)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(r"^[\w\-\.\+]+$", "CC-BY-4.0", true)]
    #[test_case(r"^[\w\-\.\+]+$", "CC-BY-!", false)]
    #[test_case(r"^\W+$", "1_0", false)]
    #[test_case(r"\\w", r"\w", true)]
    fn regex_matches(pattern: &str, text: &str, is_matching: bool) {
        let compiled = convert_regex(pattern).expect("a valid regex");
        assert_eq!(compiled.is_match(text).expect("a valid pattern"), is_matching);
    }

    #[test_case(r"\")]
    #[test_case(r"\d\")]
    fn invalid_escape_sequences(pattern: &str) {
        assert!(convert_regex(pattern).is_err());
    }
}
