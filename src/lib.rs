mod constants;
pub use constants::{DEFAULT_TOKENIZER, DEFAULT_TOP_N, STRIPPED_PUNCTUATION};
pub mod models;
pub use models::{Error, FrequencyCounter, OutputFormat, Tokenizer};
pub mod types;
mod utils;
pub use types::{RankedEntry, Token, TokenFrequency, TokenFrequencyMap, TokenRef};
pub use utils::{count_token_frequencies, sort_results};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Ranks the `top_n` most frequent words of `text`.
///
/// Words are compared case-insensitively, with `,`, `.`, `!` and `?` removed. Ties are
/// broken alphabetically.
///
/// ```
/// use word_counter::count_top;
///
/// let results = count_top("Hello, world! Hello world.", 5);
/// assert_eq!(results, vec![("hello".to_string(), 2), ("world".to_string(), 2)]);
/// ```
pub fn count_top(text: &str, top_n: usize) -> Vec<RankedEntry> {
    count_top_with_tokenizer(DEFAULT_TOKENIZER, text, top_n)
}

/// Same as [`count_top`], using the given `tokenizer` instead of `DEFAULT_TOKENIZER`.
pub fn count_top_with_tokenizer(
    tokenizer: Tokenizer,
    text: &str,
    top_n: usize,
) -> Vec<RankedEntry> {
    let frequency_counter = FrequencyCounter::new(tokenizer);

    frequency_counter.count_top(text, top_n)
}
