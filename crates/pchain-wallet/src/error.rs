use std::path::PathBuf;

/// Error types for wallet operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("malformed keypair import: {0}")]
    MalformedKeypair(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("keypair generation failed: {0}")]
    Generation(String),
}
