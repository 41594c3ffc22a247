//! FILENAME: core/cellset-engine/src/lib.rs
//! Cellset flattening for OLAP query results.
//!
//! An executed MDX query comes back as a "cellset": up to three axes of
//! member tuples and a flat array of cells over their cross product. This
//! crate turns that shape into an ordered map from dimension-ordered
//! coordinates to cell properties, with case and space insensitive lookups.
//!
//! Layers:
//! - `normalize`: Lookup-key folding (lower-case, no spaces)
//! - `insensitive_map`: Ordered map keyed by normalized labels or tuples
//! - `address`: Coordinates and dimension-order sorting of unique names
//! - `definition`: Deserialized cellset input (what the server SENDS)
//! - `config`: Flatten options
//! - `flatten`: Axis walk and cell extraction (HOW we flatten)
//! - `mdx`, `server`: Stateless helpers around the query text and adminhost

pub mod logging;

pub mod address;
pub mod config;
pub mod definition;
pub mod error;
pub mod flatten;
pub mod insensitive_map;
pub mod mdx;
pub mod normalize;
pub mod server;

pub use address::{dimension_name, element_name, sort_address_tuple, AddressSorter, Coordinate};
pub use config::{DuplicatePolicy, FlattenOptions};
pub use definition::{RawAxis, RawCell, RawCellset, RawCube, RawDimension, RawMember, RawTuple};
pub use error::{CellsetError, Result};
pub use flatten::{
    flatten_cellset, flatten_cellset_json, CellProperties, Cellset, GridPosition, GridPositions,
};
pub use insensitive_map::InsensitiveOrderedMap;
pub use mdx::read_cube_name_from_mdx;
pub use normalize::{normalize, normalize_tuple, KeyCodec, NormalizedLabel, NormalizedTuple};
pub use server::{parse_adminhost_servers, Server};
