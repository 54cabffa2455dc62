use crate::models::Tokenizer;

/// Number of ranked entries reported when the caller does not ask for a specific amount.
pub const DEFAULT_TOP_N: usize = 5;

/// Characters removed from the text before it is split into tokens.
///
/// This is an exact list. Semicolons, colons, quotes and brackets are kept as part of a token.
pub const STRIPPED_PUNCTUATION: [char; 4] = [',', '.', '!', '?'];

pub const DEFAULT_TOKENIZER: Tokenizer = Tokenizer::word_counter_parser();
