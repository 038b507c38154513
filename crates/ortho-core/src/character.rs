// Character classification for text normalization

/// Check whether a character belongs to the fixed punctuation set removed
/// during normalization: period, comma, exclamation mark, semicolon,
/// colon, question mark, percent, tilde, plus, equals, hyphen, underscore,
/// asterisk, at sign, hash, ampersand, parentheses, brackets and braces.
///
/// Membership is an exact per-character test; anything outside this set
/// (letters, digits, whitespace, other symbols) is kept as-is.
pub fn is_stripped_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | '!'
            | ';'
            | ':'
            | '?'
            | '%'
            | '~'
            | '+'
            | '='
            | '-'
            | '_'
            | '*'
            | '@'
            | '#'
            | '&'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_member_of_the_set_matches() {
        for c in ".,!;:?%~+=-_*@#&()[]{}".chars() {
            assert!(is_stripped_punctuation(c), "expected {c:?} to match");
        }
    }

    #[test]
    fn letters_and_digits_do_not_match() {
        for c in "abcXYZ019".chars() {
            assert!(!is_stripped_punctuation(c), "expected {c:?} not to match");
        }
    }

    #[test]
    fn whitespace_does_not_match() {
        assert!(!is_stripped_punctuation(' '));
        assert!(!is_stripped_punctuation('\t'));
        assert!(!is_stripped_punctuation('\n'));
    }

    #[test]
    fn accented_letters_do_not_match() {
        for c in "\u{00E9}\u{00FC}\u{00DF}\u{00F1}".chars() {
            assert!(!is_stripped_punctuation(c), "expected {c:?} not to match");
        }
    }

    #[test]
    fn unlisted_symbols_do_not_match() {
        // Close relatives of set members stay untouched.
        for c in "\u{2013}\u{2014}'\"/\\<>$^".chars() {
            assert!(!is_stripped_punctuation(c), "expected {c:?} not to match");
        }
    }
}
