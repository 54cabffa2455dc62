pub mod count_token_frequencies;
pub mod sort_results;

pub use count_token_frequencies::count_token_frequencies;
pub use sort_results::sort_results;
