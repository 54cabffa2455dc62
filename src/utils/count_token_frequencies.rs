use crate::types::{Token, TokenFrequencyMap};

/// Counts the frequency of tokens in the given list.
///
/// # Arguments
/// * `tokens` - A slice of tokens to analyze.
///
/// # Returns
/// * A `TokenFrequencyMap` where the keys are tokens and the values are their
///   respective frequencies.
///
/// # Example
/// ```
/// use word_counter::count_token_frequencies;
///
/// let tokens = vec!["apple".to_string(), "pear".to_string(), "apple".to_string()];
/// let frequencies = count_token_frequencies(&tokens);
/// assert_eq!(frequencies.get("apple"), Some(&2));
/// assert_eq!(frequencies.get("pear"), Some(&1));
/// ```
pub fn count_token_frequencies(tokens: &[Token]) -> TokenFrequencyMap {
    let mut frequencies = TokenFrequencyMap::new();

    for token in tokens {
        // `get_mut` first so repeated tokens are not cloned
        match frequencies.get_mut(token) {
            Some(frequency) => *frequency += 1,
            None => {
                frequencies.insert(token.clone(), 1);
            }
        }
    }

    frequencies
}
