//! Wildcard pattern semantics: `*` matches any run of characters, `?`
//! exactly one, everything else literal; comparisons are case-insensitive
//! and anchored to the whole string.

use regex::RegexBuilder;

/// True iff the pattern contains an unescaped `*`.
pub fn is_wildcard(pattern: &str) -> bool {
    let bytes = pattern.as_bytes();
    for (index, byte) in bytes.iter().enumerate() {
        if *byte == b'*' && (index == 0 || bytes[index - 1] != b'\\') {
            return true;
        }
    }
    false
}

/// Case-insensitive whole-string wildcard match of `source` against
/// `pattern`. Without wildcards this degenerates to case-insensitive
/// equality.
pub fn wildcard_match(source: &str, pattern: &str) -> bool {
    RegexBuilder::new(&wildcard_to_regex(pattern))
        .case_insensitive(true)
        .build()
        .map(|re| re.is_match(source))
        .unwrap_or(false)
}

/// Case-insensitive equality; two empty strings are equal.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn wildcard_to_regex(pattern: &str) -> String {
    let escaped = regex::escape(pattern).replace("\\?", ".").replace("\\*", ".*");
    format!("^{escaped}$")
}
