use thiserror::Error;

/// Errors produced by the overlay engine.
///
/// Nothing here is fatal to the frame loop; configuration validation is the
/// only operation that can refuse outright.
#[derive(Error, Debug)]
pub enum OverlayError {
    /// Configuration validation failure.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
