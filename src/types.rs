use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are lowercase words with the stripped
/// punctuation removed.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the total number of occurrences of a token within a text document.
pub type TokenFrequency = usize;

/// Represents a map of tokens to their frequency counts within a text document.
/// The key is the `Token`, and the value is the `TokenFrequency`.
pub type TokenFrequencyMap = HashMap<Token, TokenFrequency>;

/// A `(Token, TokenFrequency)` pair as it appears in a ranked result.
pub type RankedEntry = (Token, TokenFrequency);
