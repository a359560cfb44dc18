use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// The stencil needs a one-cell border on every side, so both
    /// dimensions must be at least 3.
    #[error("grid must be at least 3x3, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("no model preset named '{0}'")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
