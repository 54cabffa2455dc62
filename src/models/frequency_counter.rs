use crate::types::{RankedEntry, TokenFrequencyMap};
use crate::utils::{count_token_frequencies, sort_results};
use crate::Tokenizer;

use log::debug;

pub struct FrequencyCounter {
    tokenizer: Tokenizer,
}

impl FrequencyCounter {
    pub fn new(tokenizer: Tokenizer) -> Self {
        FrequencyCounter { tokenizer }
    }

    /// Builds the unordered frequency table for the given text.
    pub fn count(&self, text: &str) -> TokenFrequencyMap {
        debug!("Tokenizing...");
        let tokens = self.tokenizer.tokenize(text);

        debug!("Counting {} tokens...", tokens.len());
        let token_frequency_map = count_token_frequencies(&tokens);

        debug!("Found {} distinct tokens", token_frequency_map.len());
        token_frequency_map
    }

    /// Returns at most `top_n` entries, ordered by descending frequency and then
    /// alphabetically. Empty text, or text made only of whitespace and stripped
    /// punctuation, produces an empty result.
    pub fn count_top(&self, text: &str, top_n: usize) -> Vec<RankedEntry> {
        if top_n == 0 {
            return Vec::new();
        }

        let token_frequency_map = self.count(text);

        debug!("Ranking tokens...");
        let mut ranked_entries = sort_results(token_frequency_map);
        ranked_entries.truncate(top_n);

        ranked_entries
    }
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::new(Tokenizer::default())
    }
}
