// Character classification for token splitting.

/// Check whether a character counts as punctuation when peeling prefix
/// and suffix runs off a whitespace-delimited word.
///
/// Covers the ASCII punctuation block plus the typographic marks that
/// show up in ordinary prose (curly quotes, dashes, ellipsis, inverted
/// question and exclamation marks).
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{00A1}' // INVERTED EXCLAMATION MARK
            | '\u{00BF}' // INVERTED QUESTION MARK
            | '\u{2018}' // LEFT SINGLE QUOTATION MARK
            | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
            | '\u{201C}' // LEFT DOUBLE QUOTATION MARK
            | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
            | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
            | '\u{2013}' // EN DASH
            | '\u{2014}' // EM DASH
            | '\u{2026}' // HORIZONTAL ELLIPSIS
        )
}
