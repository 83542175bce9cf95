// Suffix stripping used to normalize inflected forms before lookup.
//
// This is a deliberately small heuristic, not a full stemmer: exactly
// one rule fires per word, in a fixed priority order, and the result
// is used only for membership lookup, never substituted into output.

/// Words ending in "s" whose trailing "s" must not be stripped.
const KEEP_TRAILING_S: &[&str] = &["is", "his", "this", "was", "has", "as"];

/// Apply the first matching suffix rule to an already-lowercased word.
///
/// Priority order:
/// 1. `*ies` -> `*y`     (length > 3)
/// 2. `*ing` -> `*`      (length > 3)
/// 3. `*ed`, `*es`, `*ly` -> strip two characters (length > 3)
/// 4. `*s` -> strip one character (length > 1, unless the word is in
///    the keep list: is, his, this, was, has, as)
///
/// Anything else is returned unchanged. The rule order occasionally
/// produces non-words ("running" -> "runn"); that is accepted, since
/// the stem only feeds the membership lookup.
pub fn stem(word: &str) -> String {
    if word.len() > 3 {
        if let Some(base) = word.strip_suffix("ies") {
            return format!("{base}y");
        }
        if let Some(base) = word.strip_suffix("ing") {
            return base.to_string();
        }
        if word.ends_with("ed") || word.ends_with("es") || word.ends_with("ly") {
            return word[..word.len() - 2].to_string();
        }
    }

    if word.len() > 1 && word.ends_with('s') && !KEEP_TRAILING_S.contains(&word) {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}
