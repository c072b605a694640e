//! Declaration escaping
//!
//! Scoped CSS ends up inside a `<style>` element verbatim, so angle brackets in
//! declaration bodies are replaced to keep them from closing the element.
//! This is not a general HTML sanitizer: every other character passes through.

/// Escape `<` and `>` in a declaration body.
pub fn escape_declaration_text(text: &str) -> String {
    if !text.contains(['<', '>']) {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(ch),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_angle_brackets() {
        assert_eq!(
            escape_declaration_text("content: \"<script>\";"),
            "content: \"&lt;script&gt;\";"
        );
    }

    #[test]
    fn test_other_characters_untouched() {
        assert_eq!(
            escape_declaration_text("content: \"&amp; 'x'\";"),
            "content: \"&amp; 'x'\";"
        );
    }
}
