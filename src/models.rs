pub mod error;
pub use error::Error;

pub mod frequency_counter;
pub use frequency_counter::FrequencyCounter;

pub mod output_format;
pub use output_format::OutputFormat;

pub mod tokenizer;
pub use tokenizer::Tokenizer;
