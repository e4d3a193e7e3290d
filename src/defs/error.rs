use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DefsError {
    #[error("Store at {path} is corrupt: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Input closed before the entry was complete")]
    InputClosed,

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DefsError>;
