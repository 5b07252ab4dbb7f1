use std::sync::LazyLock;

use regex::Regex;

static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid regex pattern"));

/// Cap newline runs at one blank line and trim the ends.
///
/// Spacing inside lines is left alone.
pub fn normalize(raw: &str) -> String {
    NEWLINE_RUN
        .replace_all(raw, "\n\n")
        .trim_matches(is_whitespace)
        .to_string()
}

fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}
