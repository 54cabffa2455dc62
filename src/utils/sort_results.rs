use crate::types::{RankedEntry, TokenFrequencyMap};

/// Sorts a mapping of tokens to their frequencies.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two tokens have the same frequency, sorts by token in
///   ascending lexicographical order for deterministic ordering.
///
/// ### Parameters:
/// - `results`: A `TokenFrequencyMap`, as produced by `count_token_frequencies`.
///
/// ### Returns:
/// - A `Vec` of `(Token, TokenFrequency)` tuples, sorted as described above.
///
/// ### Example:
/// ```rust
/// use word_counter::sort_results;
/// use word_counter::types::TokenFrequencyMap;
///
/// let mut results = TokenFrequencyMap::new();
/// results.insert("world".to_string(), 10);
/// results.insert("again".to_string(), 15);
/// results.insert("hello".to_string(), 10);
///
/// let sorted = sort_results(results);
/// assert_eq!(sorted, vec![
///     ("again".to_string(), 15),
///     ("hello".to_string(), 10),
///     ("world".to_string(), 10)
/// ]);
/// ```
pub fn sort_results(results: TokenFrequencyMap) -> Vec<RankedEntry> {
    let mut sorted_results: Vec<RankedEntry> = results.into_iter().collect();

    sorted_results.sort_unstable_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by token (ascending)
    });

    sorted_results
}
