use thiserror::Error;

/// Errors originating from the color/placement core.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid hex color: {0:?} (expected #rrggbb)")]
    InvalidHex(String),
}
