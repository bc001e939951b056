//! Crate error type

use thiserror::Error;

/// Errors surfaced to the driver
///
/// Geometry generation itself never fails; these cover wiring mistakes
/// between forms and the I/O done by the headless driver.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Projector and screen forms disagree on outline sizes: {projector:?} vs {screen:?}")]
    ShapeMismatch {
        projector: Vec<usize>,
        screen: Vec<usize>,
    },

    #[error("Failed to read or write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Settings(String),

    #[error("Failed to serialize frame data: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
