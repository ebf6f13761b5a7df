use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrubError {
    #[error("Please select a file before uploading.")]
    NoFileSelected,

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Chunk {index} of {total} failed to upload (status {status})")]
    ChunkUpload {
        index: usize,
        total: usize,
        status: u16,
    },

    #[error("{message}")]
    Merge { message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ScrubError>;
