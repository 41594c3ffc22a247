//! FILENAME: core/cellset-frame/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Coordinate {coordinate} has {found} components, expected {expected}")]
    InconsistentArity {
        expected: usize,
        found: usize,
        coordinate: String,
    },

    #[error("Not a [Dimension].[Element] unique name: {0}")]
    MalformedUniqueName(String),

    #[error("Cell {coordinate} has no property '{property}'")]
    MissingProperty { property: String, coordinate: String },
}
