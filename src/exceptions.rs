use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContribError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Contribution cache at {} is corrupt: {reason}", path.display())]
    CacheCorrupt { path: PathBuf, reason: String },

    #[error("Could not parse conversation file {}: {source}", path.display())]
    ConversationParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Profile error: {0}")]
    Profile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
