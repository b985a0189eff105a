// Sanitization utilities
use once_cell::sync::Lazy;
use regex::Regex;

// Case-insensitive, spans newlines, non-greedy so adjacent blocks are removed one by one
static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script.*?>.*?</script>").expect("valid script regex"));

/// Make untrusted text safe to embed in HTML.
///
/// Strips `<script ...>...</script>` blocks, trims surrounding whitespace and then
/// escapes `&`, `<`, `>`, `"` and `'`. Absent input is represented by the empty
/// string and yields the empty string.
///
/// The regex pass does not catch obfuscated or unterminated tags; whatever it misses
/// is still neutralized by the escaping step. Escaping is not idempotent, so running
/// the output through this function again double-escapes `&`.
pub fn sanitize_input(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let stripped = SCRIPT_BLOCK.replace_all(text, "");
    escape_html(stripped.trim())
}

/// Escape HTML metacharacters, quotes included
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Truncate text to at most `max_chars` characters, appending "..." when cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize_input(""), "");
        assert_eq!(sanitize_input("   "), "");
    }

    #[test]
    fn test_sanitize_strips_script_blocks() {
        assert_eq!(sanitize_input("Hi<script>alert(1)</script> there"), "Hi there");
        assert_eq!(
            sanitize_input("<SCRIPT type=\"text/javascript\">\nalert('x');\n</ScRiPt>ok"),
            "ok"
        );

        // Non-greedy: text between two blocks survives
        assert_eq!(
            sanitize_input("<script>a</script>keep<script>b</script>"),
            "keep"
        );
    }

    #[test]
    fn test_sanitize_escapes_after_trimming() {
        assert_eq!(
            sanitize_input("  A & B < C > D \"quoted\" 'single'  "),
            "A &amp; B &lt; C &gt; D &quot;quoted&quot; &#x27;single&#x27;"
        );
    }

    #[test]
    fn test_sanitize_output_has_no_raw_markup() {
        let inputs = [
            "<script>x</script><b>bold</b>",
            "<scr<script>x</script>ipt>alert(1)</script>",
            "<img src=x onerror=alert(1)>",
            "Tom & Jerry",
        ];

        for input in inputs {
            let out = sanitize_input(input);
            assert!(!out.to_lowercase().contains("<script"), "{out}");
            assert!(!out.contains('<'), "{out}");
            assert!(!out.contains('>'), "{out}");
            assert!(
                out.match_indices('&').all(|(i, _)| {
                    let rest = &out[i..];
                    rest.starts_with("&amp;")
                        || rest.starts_with("&lt;")
                        || rest.starts_with("&gt;")
                        || rest.starts_with("&quot;")
                        || rest.starts_with("&#x27;")
                }),
                "{out}"
            );
        }
    }

    #[test]
    fn test_sanitize_is_not_idempotent() {
        let once = sanitize_input("a & b");
        assert_eq!(once, "a &amp; b");
        assert_eq!(sanitize_input(&once), "a &amp;amp; b");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }
}
