use thiserror::Error;

/// Errors surfaced by the store and the command dispatcher.
///
/// The in-memory engine never fails; the variants exist for I/O around it
/// (batch input, config files) and for engines that do touch the disk.
#[derive(Debug, Error)]
pub enum KvsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serde_json error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, KvsError>;
