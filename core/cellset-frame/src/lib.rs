//! FILENAME: core/cellset-frame/src/lib.rs
//! Tabular view over flattened cellsets.
//!
//! This crate sits on top of `cellset-engine` and turns its coordinate map
//! into something analysis tools can ingest: index level names, per-row
//! element names and one value column.
//!
//! Layers:
//! - `view`: The frame itself (WHAT analysis tools receive)
//! - `conversion`: Cellset -> frame mapping

pub mod conversion;
pub mod error;
pub mod view;

pub use conversion::build_frame_from_cellset;
pub use error::FrameError;
pub use view::{CellsetFrame, FrameRow};
