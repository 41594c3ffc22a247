//! FILENAME: core/cellset-engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CellsetError {
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("No element found for dimension '{dimension}' in {elements:?}")]
    DimensionNotFound {
        dimension: String,
        elements: Vec<String>,
    },

    #[error("Dimension '{dimension}' matched more than one element: {matches:?}")]
    AmbiguousDimension {
        dimension: String,
        matches: Vec<String>,
    },

    #[error("Malformed cellset: {0}")]
    StructureError(String),

    #[error("Invalid MDX: {0}")]
    InvalidMdx(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CellsetError>;
