// Text normalization: punctuation stripping and case folding

use ortho_core::character::is_stripped_punctuation;

/// Produce the cleaned form of raw input text: every character of the
/// fixed punctuation set removed, the remainder case-folded to lowercase.
/// Whitespace is preserved so the cleaned text still splits into the same
/// token positions.
///
/// Cleaning is idempotent: the output contains no strippable characters
/// and is already lowercase, so a second pass returns it unchanged.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| !is_stripped_punctuation(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_punctuation() {
        assert_eq!(clean_text("dog!"), "dog");
    }

    #[test]
    fn strips_every_set_member() {
        assert_eq!(clean_text(".,!;:?%~+=-_*@#&()[]{}"), "");
    }

    #[test]
    fn lowercases_ascii() {
        assert_eq!(clean_text("The CAT Runs"), "the cat runs");
    }

    #[test]
    fn lowercases_unicode() {
        assert_eq!(clean_text("\u{00C9}T\u{00C9}"), "\u{00E9}t\u{00E9}");
        assert_eq!(clean_text("Gr\u{00FC}\u{00DF}e!"), "gr\u{00FC}\u{00DF}e");
    }

    #[test]
    fn preserves_whitespace() {
        assert_eq!(clean_text("the  cat\truns"), "the  cat\truns");
    }

    #[test]
    fn keeps_unlisted_symbols() {
        assert_eq!(clean_text("don't"), "don't");
        assert_eq!(clean_text("a/b"), "a/b");
    }

    #[test]
    fn is_idempotent() {
        for text in [
            "The cat runs.",
            "Henry doesnt eat vegetabos!",
            "mixed-CASE, (with) [all] {kinds}; of: punctuation?!",
            "Gr\u{00FC}\u{00DF}e aus M\u{00FC}nchen",
            "",
            "   ",
        ] {
            let once = clean_text(text);
            assert_eq!(clean_text(&once), once);
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_text(""), "");
    }
}
