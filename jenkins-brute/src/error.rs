use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read '{path}': {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open output '{path}': {source}")]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid hash '{token}' on line {line} of '{path}': expected 1-8 hex digits")]
    InvalidDigest { path: PathBuf, line: usize, token: String },

    #[error("Word depth must be at least 1 (got {0})")]
    InvalidDepth(usize),

    #[error("Word list is empty")]
    EmptyWordList,

    #[error(
        "Longest candidate would be {required} bytes, exceeding the {capacity}-byte buffer. \
         Lower --word-depth or shorten the word list."
    )]
    CandidateTooLong { required: usize, capacity: usize },

    #[error("Failed to spawn worker #{id}: {source}")]
    Spawn {
        id: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Worker #{id} panicked")]
    WorkerPanicked { id: usize },
}
