//! Markup entity escaping.

/// Replacement table, applied in order. `&` must stay first so the
/// ampersands of later entities are not escaped again.
pub const ESCAPES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
];

/// Replace `& < > " '` with their entities, one character class at a time.
/// Not idempotent: escaping twice re-escapes every `&`.
pub fn escape_markup(input: &str) -> String {
    ESCAPES
        .iter()
        .fold(input.to_owned(), |acc, (ch, entity)| {
            if acc.contains(*ch) {
                acc.replace(*ch, entity)
            } else {
                acc
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_markup_characters() {
        assert_eq!(
            escape_markup(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn output_contains_no_raw_markup() {
        let out = escape_markup(r#"&<>"'&&<<"#);
        for ch in ['<', '>', '"', '\''] {
            assert!(!out.contains(ch), "raw {ch} left in {out}");
        }
        // Every remaining ampersand opens an entity.
        for (idx, _) in out.match_indices('&') {
            let rest = &out[idx..];
            assert!(
                ESCAPES.iter().any(|(_, entity)| rest.starts_with(entity)),
                "stray ampersand in {out}"
            );
        }
    }

    #[test]
    fn ampersand_is_escaped_once() {
        assert_eq!(escape_markup("<"), "&lt;");
        assert_eq!(escape_markup("&lt;"), "&amp;lt;");
    }

    #[test]
    fn second_pass_double_encodes() {
        let once = escape_markup("a & b");
        let twice = escape_markup(&once);
        assert_eq!(once, "a &amp; b");
        assert_eq!(twice, "a &amp;amp; b");
        assert_ne!(once, twice);
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escape_markup("hello world 123"), "hello world 123");
    }
}
