//! Masking of a target character inside a word.

/// The blank shown in place of the target character.
pub const BLANK_MARKER: &str = "___";

/// Replace every occurrence of `character` in `word` with `blank`.
///
/// The match is a plain substring comparison, so characters that would be
/// metacharacters in a pattern language (`.`, `*`, `(` ...) are matched
/// literally. An empty `character` leaves the word unchanged, and a word
/// without the character comes back as-is.
pub fn mask_character(word: &str, character: &str, blank: &str) -> String {
    if character.is_empty() {
        return word.to_string();
    }
    word.replace(character, blank)
}
