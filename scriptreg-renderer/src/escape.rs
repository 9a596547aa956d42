//! LaTeX escaping for catalog-sourced text.
//!
//! The replacement set is `& % $ # _ { }`. A single left-to-right pass over
//! the input means substituted text is never re-examined, so the backslashes
//! introduced by the replacements cannot themselves be mangled.

/// Escape `text` for literal rendering inside the register document.
pub fn latex_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str(r"\&"),
            '%' => out.push_str(r"\%"),
            '$' => out.push_str(r"\$"),
            '#' => out.push_str(r"\#"),
            '_' => out.push_str(r"\_"),
            '{' => out.push_str(r"\{"),
            '}' => out.push_str(r"\}"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape an optional field; `None` renders as the empty string, never as a
/// literal "null" token.
pub fn latex_escape_opt(text: Option<&str>) -> String {
    text.map(latex_escape).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_is_unchanged() {
        assert_eq!(latex_escape("Intro to Computing"), "Intro to Computing");
    }

    #[test]
    fn all_special_characters_are_escaped() {
        assert_eq!(latex_escape("&%$#_{}"), r"\&\%\$\#\_\{\}");
    }

    #[test]
    fn escaped_output_is_not_reprocessed() {
        // A name like "A_B" must become "A\_B", not "A\\_B" or similar.
        assert_eq!(latex_escape("A_B"), r"A\_B");
        // Backslashes already in the input pass through untouched.
        assert_eq!(latex_escape(r"a\b"), r"a\b");
    }

    #[test]
    fn none_renders_as_empty_string() {
        assert_eq!(latex_escape_opt(None), "");
        assert_eq!(latex_escape_opt(Some("Final")), "Final");
    }
}
