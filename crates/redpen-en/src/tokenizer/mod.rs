// Token splitting for whitespace-delimited words.
//
// The caller has already split the line on whitespace; this module
// peels punctuation off both ends of a single word. Splitting is a
// pure function with no knowledge of dictionaries or engines.

use redpen_core::character::is_punctuation;
use redpen_core::token::Token;

/// Split one whitespace-delimited word into prefix, core and suffix.
///
/// `prefix` collects the maximal run of punctuation from the start,
/// `suffix` the maximal run from the end (original order preserved),
/// and `core` is everything between. Reassembling the three parts
/// always reproduces the input. A word made entirely of punctuation
/// yields an empty core.
pub fn split(word: &str) -> Token {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();

    let mut start = 0;
    while start < len && is_punctuation(chars[start]) {
        start += 1;
    }

    let mut end = len;
    while end > start && is_punctuation(chars[end - 1]) {
        end -= 1;
    }

    Token::new(
        chars[..start].iter().collect::<String>(),
        chars[start..end].iter().collect::<String>(),
        chars[end..].iter().collect::<String>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Basic splits --

    #[test]
    fn plain_word_has_no_punctuation() {
        let tok = split("hello");
        assert_eq!(tok, Token::new("", "hello", ""));
    }

    #[test]
    fn leading_punctuation_goes_to_prefix() {
        let tok = split("(hello");
        assert_eq!(tok, Token::new("(", "hello", ""));
    }

    #[test]
    fn trailing_punctuation_goes_to_suffix() {
        let tok = split("hello),");
        assert_eq!(tok, Token::new("", "hello", "),"));
    }

    #[test]
    fn punctuation_on_both_sides() {
        let tok = split("(hello),");
        assert_eq!(tok, Token::new("(", "hello", "),"));
    }

    #[test]
    fn suffix_preserves_original_order() {
        let tok = split("word!?\"");
        assert_eq!(tok.suffix, "!?\"");
    }

    // -- Degenerate inputs --

    #[test]
    fn all_punctuation_yields_empty_core() {
        let tok = split("...!");
        assert_eq!(tok, Token::new("...!", "", ""));
        assert!(tok.is_empty_core());
    }

    #[test]
    fn empty_word() {
        let tok = split("");
        assert_eq!(tok, Token::default());
    }

    #[test]
    fn single_character_word() {
        assert_eq!(split("a"), Token::new("", "a", ""));
        assert_eq!(split("."), Token::new(".", "", ""));
    }

    // -- Interior punctuation stays in the core --

    #[test]
    fn apostrophe_inside_word_stays_in_core() {
        let tok = split("don't");
        assert_eq!(tok, Token::new("", "don't", ""));
    }

    #[test]
    fn hyphenated_word_stays_whole() {
        let tok = split("well-known,");
        assert_eq!(tok, Token::new("", "well-known", ","));
    }

    // -- Digits and unicode --

    #[test]
    fn digits_count_as_core() {
        let tok = split("(123)");
        assert_eq!(tok, Token::new("(", "123", ")"));
    }

    #[test]
    fn curly_quotes_are_stripped() {
        let tok = split("\u{201C}word\u{201D}");
        assert_eq!(tok, Token::new("\u{201C}", "word", "\u{201D}"));
    }

    #[test]
    fn accented_word_is_core() {
        let tok = split("caf\u{00E9}!");
        assert_eq!(tok, Token::new("", "caf\u{00E9}", "!"));
    }

    // -- Properties --

    #[test]
    fn reassembly_reproduces_the_input() {
        let words = [
            "hello",
            "(hello),",
            "...",
            "",
            "don't!",
            "\u{201C}quoted.\u{201D}",
            "a",
            "?!x?!",
        ];
        for word in words {
            let tok = split(word);
            assert_eq!(tok.reassemble(), word, "failed for {word:?}");
        }
    }

    #[test]
    fn resplitting_the_core_is_a_fixpoint() {
        for word in ["(hello),", "!!why??", "plain", "--"] {
            let tok = split(word);
            let again = split(&tok.core);
            assert_eq!(again.prefix, "");
            assert_eq!(again.core, tok.core);
            assert_eq!(again.suffix, "");
        }
    }
}
