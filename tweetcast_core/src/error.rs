use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Relay disabled: {0}")]
    RelayDisabled(String),

    #[error("Cache file `{path}` is corrupt: {source}")]
    CorruptCache { path: String, source: serde_json::Error },
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] tweetcast_util::ParsingError),

    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Cannot encode/decode JSON: {0}")]
    JSONError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
