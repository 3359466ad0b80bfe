use thiserror::Error;

/// Top-level error type used across the entire widget.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// The data view has no categorical binding or no category source.
    #[error("data not ready: {0}")]
    DataNotReady(&'static str),

    #[error("config error: {0}")]
    Config(String),

    #[error("filter error: {0}")]
    Filter(String),
}

pub type Result<T, E = TimelineError> = std::result::Result<T, E>;
