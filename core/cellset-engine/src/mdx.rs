//! FILENAME: core/cellset-engine/src/mdx.rs
//! PURPOSE: Small text helpers over MDX query strings.

use crate::error::{CellsetError, Result};
use crate::logging::log_debug;

/// Reads the cube name out of an MDX `SELECT ... FROM [Cube] [WHERE ...]`.
///
/// Whitespace is removed and the query upper-cased before searching, so the
/// name comes back upper-case and without spaces ("Sales Plan" ->
/// "SALESPLAN"). The last `FROM [` wins, which skips sub-selects.
pub fn read_cube_name_from_mdx(mdx: &str) -> Result<String> {
    let compact = mdx.split_whitespace().collect::<String>().to_uppercase();

    let start = compact
        .rfind("FROM[")
        .map(|pos| pos + "FROM[".len())
        .ok_or_else(|| CellsetError::InvalidMdx("no FROM [cube] clause".to_string()))?;
    let rest = &compact[start..];

    // No WHERE: the cube name runs to the last closing bracket.
    let end = rest
        .find("]WHERE")
        .or_else(|| rest.rfind(']'))
        .ok_or_else(|| CellsetError::InvalidMdx("unterminated cube name".to_string()))?;

    let cube_name = &rest[..end];
    if cube_name.is_empty() {
        return Err(CellsetError::InvalidMdx("empty cube name".to_string()));
    }

    log_debug!("MDX", "cube name '{}'", cube_name);
    Ok(cube_name.to_string())
}
