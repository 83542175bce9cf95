// Output rendering: per-token fragments for the diff-annotated HTML
// and the plain corrected text, plus the document scaffolding around
// the annotated output.

use redpen_core::token::{CorrectionResult, Token};

/// Opening of the annotated HTML document.
pub const HTML_PROLOGUE: &str = "<html><body style='font-family:Arial; line-height:1.6;'>\n<h2 style='color:#2c3e50;'>Spell Correction Output</h2>\n";

/// Closing of the annotated HTML document.
pub const HTML_EPILOGUE: &str = "</body></html>\n";

/// Escape the characters with markup meaning in emitted HTML text.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Render one token for the annotated output.
///
/// Unchanged tokens pass through with their punctuation. Changed
/// tokens keep the surrounding punctuation and show the original and
/// its replacement joined by an arrow, each side in its own colored
/// span.
pub fn render_diff(token: &Token, result: &CorrectionResult) -> String {
    if result.changed {
        format!(
            "{}<span style='color:red'>{}</span> &rarr;<span style='color:green;'>{}</span>{}",
            escape_html(&token.prefix),
            escape_html(&result.core),
            escape_html(&result.corrected),
            escape_html(&token.suffix),
        )
    } else {
        escape_html(&format!(
            "{}{}{}",
            token.prefix, result.corrected, token.suffix
        ))
    }
}

/// Render one token for the plain corrected output. Always
/// `prefix + corrected + suffix`, whether or not anything changed.
pub fn render_plain(token: &Token, result: &CorrectionResult) -> String {
    format!("{}{}{}", token.prefix, result.corrected, token.suffix)
}

/// Join rendered fragments into one annotated line ending in a break.
pub fn join_diff_line(fragments: &[String]) -> String {
    format!("{}<br>\n", fragments.join(" "))
}

/// Join rendered fragments into one plain line.
pub fn join_plain_line(fragments: &[String]) -> String {
    format!("{}\n", fragments.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(prefix: &str, core: &str, suffix: &str) -> Token {
        Token::new(prefix, core, suffix)
    }

    // -- render_plain --

    #[test]
    fn plain_keeps_punctuation_around_unchanged_word() {
        let tok = token("(", "hello", "),");
        let res = CorrectionResult::unchanged("hello");
        assert_eq!(render_plain(&tok, &res), "(hello),");
    }

    #[test]
    fn plain_substitutes_the_correction() {
        let tok = token("", "helo", ".");
        let res = CorrectionResult::resolved("helo", "hello");
        assert_eq!(render_plain(&tok, &res), "hello.");
    }

    // -- render_diff --

    #[test]
    fn diff_of_unchanged_word_has_no_markup() {
        let tok = token("(", "hello", "),");
        let res = CorrectionResult::unchanged("hello");
        assert_eq!(render_diff(&tok, &res), "(hello),");
    }

    #[test]
    fn diff_of_changed_word_marks_both_sides() {
        let tok = token("", "helo", "");
        let res = CorrectionResult::resolved("helo", "hello");
        assert_eq!(
            render_diff(&tok, &res),
            "<span style='color:red'>helo</span> &rarr;<span style='color:green;'>hello</span>"
        );
    }

    #[test]
    fn diff_keeps_punctuation_outside_the_spans() {
        let tok = token("(", "helo", "),");
        let res = CorrectionResult::resolved("helo", "hello");
        let rendered = render_diff(&tok, &res);
        assert!(rendered.starts_with("("));
        assert!(rendered.ends_with("),"));
        assert!(rendered.contains("&rarr;"));
    }

    #[test]
    fn diff_escapes_markup_characters() {
        let tok = token("<", "a&b", ">");
        let res = CorrectionResult::unchanged("a&b");
        assert_eq!(render_diff(&tok, &res), "&lt;a&amp;b&gt;");
    }

    #[test]
    fn plain_output_is_not_escaped() {
        let tok = token("<", "a&b", ">");
        let res = CorrectionResult::unchanged("a&b");
        assert_eq!(render_plain(&tok, &res), "<a&b>");
    }

    // -- line joins --

    #[test]
    fn diff_line_ends_with_break() {
        let fragments = vec!["one".to_string(), "two".to_string()];
        assert_eq!(join_diff_line(&fragments), "one two<br>\n");
    }

    #[test]
    fn plain_line_ends_with_newline() {
        let fragments = vec!["one".to_string(), "two".to_string()];
        assert_eq!(join_plain_line(&fragments), "one two\n");
    }

    #[test]
    fn empty_line_still_terminates() {
        assert_eq!(join_diff_line(&[]), "<br>\n");
        assert_eq!(join_plain_line(&[]), "\n");
    }

    #[test]
    fn plain_line_token_count_matches_input() {
        let words = ["The", "dogs", "ran."];
        let fragments: Vec<String> = words
            .iter()
            .map(|w| {
                let tok = crate::tokenizer::split(w);
                let res = CorrectionResult::unchanged(tok.core.clone());
                render_plain(&tok, &res)
            })
            .collect();
        let line = join_plain_line(&fragments);
        assert_eq!(line.split_whitespace().count(), words.len());
    }
}
