use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcgError {
    #[error("No signal loaded")]
    EmptySignal,

    #[error("Signal has not been filtered; apply the low-pass filter before detecting peaks")]
    UnfilteredSignal,

    #[error("Insufficient peaks: need at least 2 to estimate heart rate, found {found}")]
    InsufficientPeaks { found: usize },

    #[error("Input is empty: missing header line")]
    EmptyInput,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EcgError>;
