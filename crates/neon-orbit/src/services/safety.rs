//! Safety Filter - blunt blocklist redaction
//!
//! Terms match as literal, case-insensitive substrings with no word
//! boundaries, so parts of unrelated words get redacted too.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::domain::SafetyMode;

/// Blocked substrings
pub const BLOCKLIST: [&str; 6] = ["суиц", "убей", "убиться", "наркот", "дети", "несоверш"];

/// Symbol written once per character of a redacted term
pub const REDACTION_SYMBOL: char = '•';

static PATTERNS: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    BLOCKLIST
        .iter()
        .map(|term| {
            let pattern = RegexBuilder::new(&regex::escape(term))
                .case_insensitive(true)
                .build()
                .expect("escaped blocklist term is a valid pattern");
            let mask = REDACTION_SYMBOL.to_string().repeat(term.chars().count());
            (pattern, mask)
        })
        .collect()
});

/// Redact blocklisted terms when `mode` is `Safe`; identity when `Open`.
pub fn redact(text: &str, mode: SafetyMode) -> String {
    if mode == SafetyMode::Open {
        return text.to_string();
    }

    PATTERNS
        .iter()
        .fold(text.to_string(), |acc, (pattern, mask)| {
            pattern.replace_all(&acc, mask.as_str()).into_owned()
        })
}
