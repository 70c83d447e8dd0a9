use std::sync::LazyLock;

use regex::Regex;

// Two or more word characters; single letters and punctuation never become terms.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("TOKEN regex is valid"));

/// Splits `text` into terms in document order, duplicates kept.
pub fn tokenize(text: &str, lowercase: bool) -> Vec<String> {
    if lowercase {
        let lowered = text.to_lowercase();
        TOKEN
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    } else {
        TOKEN.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }
}
