use word_counter::Tokenizer;

#[cfg(test)]
mod word_counter_tokenizer_tests {
    use super::*;

    #[test]
    fn test_lowercases_tokens() {
        let tokenizer = Tokenizer::word_counter_parser();

        let text = "These Are MIXED case Tokens";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["these", "are", "mixed", "case", "tokens"]);
    }

    #[test]
    fn test_tokenize_with_multiple_spaces() {
        let tokenizer = Tokenizer::word_counter_parser();

        let text = "This    is   a    test     string";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["this", "is", "a", "test", "string"]);
    }

    #[test]
    fn test_tokenize_with_tabs_and_line_breaks() {
        let tokenizer = Tokenizer::word_counter_parser();

        let text = "This\tis\na\r\ntest";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["this", "is", "a", "test"]);
    }

    #[test]
    fn test_strips_commas_periods_exclamation_and_question_marks() {
        let tokenizer = Tokenizer::word_counter_parser();

        let text = "Wait, what? Really! Yes.";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["wait", "what", "really", "yes"]);
    }

    #[test]
    fn test_keeps_other_punctuation() {
        let tokenizer = Tokenizer::word_counter_parser();

        let text = "semi;colon:test it's (well-known) \"quoted\" 3.14";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(
            tokens,
            vec!["semi;colon:test", "it's", "(well-known)", "\"quoted\"", "314"]
        );
    }

    #[test]
    fn test_drops_tokens_made_only_of_stripped_punctuation() {
        let tokenizer = Tokenizer::word_counter_parser();

        let text = "one ... two ?! three";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_unicode_lowercasing() {
        let tokenizer = Tokenizer::word_counter_parser();

        let text = "ÉCOLE école Straße";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["école", "école", "straße"]);
    }

    #[test]
    fn test_tokenize_with_ascii_separators() {
        let tokenizer = Tokenizer::word_counter_parser();

        let text = "a\x1cb\x1dc\x1e\x1fd \x1c e";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["a", "b", "c", "d", "e"]);
    }
}
