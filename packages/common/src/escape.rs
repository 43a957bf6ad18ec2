/// Escape text for use as an HTML text node.
pub fn html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text for use inside a double-quoted HTML attribute value.
pub fn attr(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Sanitize text for use inside an HTML comment.
///
/// Comments must not contain `--`, otherwise the comment terminates early
/// and the remainder leaks into the document.
pub fn comment(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains("--") {
        out = out.replace("--", "- -");
    }
    if out.ends_with('-') {
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_text() {
        assert_eq!(html("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(html("plain"), "plain");
    }

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(attr(r#"say "hi" & 'bye'"#), "say &quot;hi&quot; &amp; &#39;bye&#39;");
    }

    #[test]
    fn test_comment_never_contains_terminator() {
        assert!(!comment("a -- b ---- c").contains("--"));
        assert!(!comment("trailing-").ends_with('-'));
    }
}
