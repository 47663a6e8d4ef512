//! Input Sanitization
//!
//! Escapes the five markup-significant characters so user input can be
//! echoed into HTML text or attribute values.

/// Replace `& < > " '` with their HTML entities
///
/// All other characters pass through unchanged; empty input yields an
/// empty string.
pub fn sanitize(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_script_tag() {
        assert_eq!(sanitize("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn test_all_entities() {
        assert_eq!(
            sanitize(r#"Tom & "Jerry" <b>'s</b>"#),
            "Tom &amp; &quot;Jerry&quot; &lt;b&gt;&#039;s&lt;/b&gt;"
        );
    }

    #[test]
    fn test_existing_entity_is_escaped_again() {
        assert_eq!(sanitize("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let text = "Transfer 100 USD to savings, café ☕";
        assert_eq!(sanitize(text), text);
    }

    fn assert_no_raw_markup(input: &str) {
        let out = sanitize(input);
        // '&' only appears as the start of an entity
        let without_entities = out
            .replace("&amp;", "")
            .replace("&lt;", "")
            .replace("&gt;", "")
            .replace("&quot;", "")
            .replace("&#039;", "");
        for ch in ['<', '>', '&', '"', '\''] {
            assert!(!without_entities.contains(ch), "{input:?} -> {out:?}");
        }
    }

    #[test]
    fn test_output_has_no_raw_markup() {
        let ascii: Vec<char> = (0u8..128).map(char::from).collect();
        for &ch in &ascii {
            assert_no_raw_markup(&ch.to_string());
        }

        // Every ordered pair drawn from the special characters and their
        // entity fragments, so escapes cannot combine into raw markup
        let pieces = ["<", ">", "&", "\"", "'", "a", ";", "#", "amp", "lt", "039"];
        for a in pieces {
            for b in pieces {
                for c in pieces {
                    assert_no_raw_markup(&format!("{a}{b}{c}"));
                }
            }
        }

        assert_no_raw_markup(&ascii.iter().collect::<String>());
        assert_no_raw_markup("<img src=x onerror=alert(1)> é ü 漢字 <<>>&&''");
    }
}
