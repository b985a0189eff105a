// Validation utilities
use once_cell::sync::Lazy;
use regex::Regex;

// Syntactic approximation only, not RFC 5322
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").expect("valid email regex")
});

/// Check an email address against a permissive `local@domain.tld` pattern.
///
/// False positives (`a@b.-`) and false negatives (quoted local parts, IDNs) are
/// accepted limitations of the pattern. The pattern must match the whole input, so a
/// trailing newline (`"a@b.co\n"`) is rejected; a Python-style `re.match` with `$`
/// would have let one through.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Check whether text contains an opening script tag, ignoring case
pub fn contains_script_tag(text: &str) -> bool {
    text.to_lowercase().contains("<script")
}

/// Check that text is at least `min` characters long
pub fn has_min_length(text: &str, min: usize) -> bool {
    text.chars().count() >= min
}
