use crate::constants::STRIPPED_PUNCTUATION;
use crate::types::Token;

/// Whitespace plus the ASCII file, group, record and unit separators (`\x1c`..=`\x1f`),
/// which also delimit words.
fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tokenizer {
    stripped_punctuation: &'static [char],
}

impl Tokenizer {
    /// Configuration for word frequency counting.
    ///
    /// Lowercases the text and strips `,`, `.`, `!` and `?` before splitting on whitespace.
    pub const fn word_counter_parser() -> Self {
        Self {
            stripped_punctuation: &STRIPPED_PUNCTUATION,
        }
    }

    /// Lowercases the text and removes every occurrence of the stripped punctuation.
    ///
    /// Whitespace is left untouched, so token boundaries survive normalization.
    /// Applying this twice yields the same string as applying it once.
    pub fn normalize(self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .filter(|c| !self.stripped_punctuation.contains(c))
            .collect()
    }

    /// Splits the normalized text into tokens on runs of whitespace.
    ///
    /// The ASCII separator control characters `\x1c`..=`\x1f` count as whitespace.
    ///
    /// Characters outside of the stripped set (apostrophes, hyphens, digits, colons, ...)
    /// remain part of the token they appear in.
    pub fn tokenize(self, text: &str) -> Vec<Token> {
        self.normalize(text)
            .split(is_token_separator)
            .filter(|word| !word.is_empty())
            .map(|word| word.to_string())
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::word_counter_parser()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_only_fixed_punctuation() {
        let tokenizer = Tokenizer::word_counter_parser();

        assert_eq!(
            tokenizer.normalize("Hi, There. Yes! No? (a; b: c)"),
            "hi there yes no (a; b: c)"
        );
    }

    #[test]
    fn test_normalize_joins_words_around_stripped_punctuation() {
        let tokenizer = Tokenizer::word_counter_parser();

        // Punctuation is removed, not replaced with whitespace
        assert_eq!(tokenizer.normalize("end.start"), "endstart");
        assert_eq!(tokenizer.tokenize("end.start"), vec!["endstart"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let tokenizer = Tokenizer::word_counter_parser();
        let text = "Hello,, WORLD!?! It's... a Test-Case; 42.";

        let once = tokenizer.normalize(text);
        let twice = tokenizer.normalize(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_tokenize_only_punctuation() {
        let tokenizer = Tokenizer::word_counter_parser();

        assert!(tokenizer.tokenize(" , . ! ? \n\t").is_empty());
    }

    #[test]
    fn test_ascii_separators_split_tokens() {
        for separator in ['\x1c', '\x1d', '\x1e', '\x1f'] {
            assert!(is_token_separator(separator), "{:?}", separator);
        }
        assert!(!is_token_separator('\x1b'));
        assert!(!is_token_separator('-'));
    }

    #[test]
    fn test_default_matches_word_counter_parser() {
        assert_eq!(Tokenizer::default(), Tokenizer::word_counter_parser());
    }
}
