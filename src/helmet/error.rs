use thiserror::Error;

/// Errors raised while configuring a [`Helmet`](super::Helmet).
///
/// Building and writing headers never fails; these only come from parsing
/// tokens and loading configuration.
#[derive(Debug, Error)]
pub enum HelmetError {
    #[error("Unknown {header} value: {value:?}")]
    UnknownToken { header: &'static str, value: String },

    #[error("Invalid helmet configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to read helmet configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for helmet configuration.
pub type HelmetResult<T> = Result<T, HelmetError>;
