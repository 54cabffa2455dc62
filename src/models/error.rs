use std::fmt;

#[derive(Debug)]
pub enum Error {
    InputError(String),
    OutputError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputError(msg) => write!(f, "Input Error: {}", msg),
            Error::OutputError(msg) => write!(f, "Output Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::OutputError(err.to_string())
    }
}
