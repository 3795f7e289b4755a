use std::fmt;

#[derive(Debug)]
pub enum ShopError {
    SinkError(std::io::Error),
    InputError(std::io::Error),
    UnknownSelection(String),
}

impl From<std::io::Error> for ShopError {
    fn from(error: std::io::Error) -> Self {
        ShopError::SinkError(error)
    }
}

impl fmt::Display for ShopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopError::SinkError(error) => write!(f, "could not write to the log sink: {}", error),
            ShopError::InputError(error) => write!(f, "could not read the selection: {}", error),
            ShopError::UnknownSelection(code) => write!(f, "unknown selection {:?}", code),
        }
    }
}

impl std::error::Error for ShopError {}
