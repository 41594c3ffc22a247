//! FILENAME: core/cellset-engine/src/flatten.rs
//! Cellset flattening - raw axes and cells to a coordinate map.
//!
//! The cellset is walked row-major (column fastest), which is the order the
//! server lays out `Cells`. For every grid position the column, title and row
//! members are concatenated, reordered into the cube's dimension order and
//! used as the key for that cell's requested properties.
//!
//! Positions come from a single counted iterator over the row x column cross
//! product, so the `top` limit is applied in exactly one place.

use serde_json::Value;

use crate::address::{AddressSorter, Coordinate};
use crate::config::FlattenOptions;
use crate::definition::{RawAxis, RawCell, RawCellset, RawTuple, COLUMN_AXIS, ROW_AXIS, TITLE_AXIS};
use crate::error::{CellsetError, Result};
use crate::insensitive_map::InsensitiveOrderedMap;
use crate::logging::{log_enter, log_exit, log_info};

/// Requested property name -> raw value for one cell.
pub type CellProperties = InsensitiveOrderedMap<String, Value>;

/// Flattened cellset: dimension-ordered coordinate -> cell properties.
pub type Cellset = InsensitiveOrderedMap<Coordinate, CellProperties>;

// ============================================================================
// GRID POSITIONS
// ============================================================================

/// One point of the row x column grid, with its index into `Cells`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
    pub ordinal: usize,
}

/// Row-major walk over a `rows x columns` grid, optionally cut off after
/// `top` positions.
#[derive(Debug, Clone)]
pub struct GridPositions {
    columns: usize,
    next: usize,
    end: usize,
}

impl GridPositions {
    pub fn new(rows: usize, columns: usize, top: Option<usize>) -> Self {
        let total = rows.saturating_mul(columns);
        GridPositions {
            columns,
            next: 0,
            end: top.map_or(total, |top| top.min(total)),
        }
    }

    /// Number of positions this walk yields in total.
    pub fn total(&self) -> usize {
        self.end
    }

    /// Rewinds to the first position.
    pub fn restart(&mut self) {
        self.next = 0;
    }
}

impl Iterator for GridPositions {
    type Item = GridPosition;

    fn next(&mut self) -> Option<GridPosition> {
        if self.next >= self.end {
            return None;
        }
        let ordinal = self.next;
        self.next += 1;
        Some(GridPosition {
            row: ordinal / self.columns,
            column: ordinal % self.columns,
            ordinal,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridPositions {}

// ============================================================================
// AXIS ACCESS
// ============================================================================

/// Row or column axis as seen by the walk. An axis that is absent from the
/// cellset behaves like a single tuple without members.
struct AxisLayout<'a> {
    label: &'static str,
    count: usize,
    tuples: Option<&'a [RawTuple]>,
}

impl<'a> AxisLayout<'a> {
    fn new(label: &'static str, axis: Option<&'a RawAxis>) -> Self {
        match axis {
            Some(axis) => AxisLayout {
                label,
                count: axis.cardinality(),
                tuples: Some(&axis.tuples),
            },
            None => AxisLayout {
                label,
                count: 1,
                tuples: None,
            },
        }
    }

    fn push_elements(&self, index: usize, out: &mut Vec<&'a str>) -> Result<()> {
        let Some(tuples) = self.tuples else {
            return Ok(());
        };
        let tuple = tuples.get(index).ok_or_else(|| {
            CellsetError::StructureError(format!(
                "{} axis has no tuple at index {} (cardinality {})",
                self.label, index, self.count
            ))
        })?;
        out.extend(tuple.unique_names());
        Ok(())
    }
}

fn title_elements(raw: &RawCellset) -> Result<Vec<&str>> {
    match raw.axis(TITLE_AXIS) {
        Some(axis) => {
            let tuple = axis.tuples.first().ok_or_else(|| {
                CellsetError::StructureError("title axis has no tuples".to_string())
            })?;
            Ok(tuple.unique_names().collect())
        }
        None => Ok(Vec::new()),
    }
}

fn read_properties(cell: &RawCell, names: &[String], ordinal: usize) -> Result<CellProperties> {
    let mut properties = CellProperties::with_capacity(names.len());
    for name in names {
        let value = cell.get(name).ok_or_else(|| {
            CellsetError::StructureError(format!("cell {} has no property '{}'", ordinal, name))
        })?;
        properties.set(name.clone(), value.clone());
    }
    Ok(properties)
}

// ============================================================================
// FLATTEN
// ============================================================================

/// Flattens `raw` into a map from dimension-ordered coordinates to the
/// requested cell properties.
///
/// Cells are consumed in row-major order. With `options.top` set, the walk
/// stops once that many cells have been read and the partial map is
/// returned.
pub fn flatten_cellset(raw: &RawCellset, options: &FlattenOptions) -> Result<Cellset> {
    log_enter!(
        "CELLSET",
        "flatten_cellset",
        "top={:?} properties={:?}",
        options.top,
        options.cell_properties
    );

    let cube = raw
        .cube
        .as_ref()
        .ok_or_else(|| CellsetError::StructureError("cellset has no Cube".to_string()))?;
    if raw.axes.len() > TITLE_AXIS + 1 {
        return Err(CellsetError::StructureError(format!(
            "cellset has {} axes, at most {} are supported",
            raw.axes.len(),
            TITLE_AXIS + 1
        )));
    }

    let sorter = AddressSorter::new(
        cube.dimensions.iter().map(|d| d.name.as_str()),
        options.duplicate_policy,
    );
    let columns = AxisLayout::new("column", raw.axis(COLUMN_AXIS));
    let rows = AxisLayout::new("row", raw.axis(ROW_AXIS));
    let titles = title_elements(raw)?;

    let positions = GridPositions::new(rows.count, columns.count, options.top);
    if positions.total() > raw.cells.len() {
        return Err(CellsetError::StructureError(format!(
            "{} rows x {} columns need {} cells, cellset has {}",
            rows.count,
            columns.count,
            positions.total(),
            raw.cells.len()
        )));
    }
    let mut result = Cellset::with_capacity(positions.total());
    let mut elements: Vec<&str> = Vec::with_capacity(sorter.dimensions().len());

    for position in positions {
        elements.clear();
        columns.push_elements(position.column, &mut elements)?;
        elements.extend_from_slice(&titles);
        rows.push_elements(position.row, &mut elements)?;

        let coordinate = sorter.sort(&elements)?;

        let cell = raw.cells.get(position.ordinal).ok_or_else(|| {
            CellsetError::StructureError(format!(
                "no cell at ordinal {} ({} cells in cellset)",
                position.ordinal,
                raw.cells.len()
            ))
        })?;
        let properties = read_properties(cell, &options.cell_properties, position.ordinal)?;
        result.set(coordinate, properties);
    }

    if let Some(top) = options.top {
        if top < rows.count.saturating_mul(columns.count) {
            log_info!("CELLSET", "stopped after top={} cells", top);
        }
    }
    log_exit!("CELLSET", "flatten_cellset", "entries={}", result.len());
    Ok(result)
}

/// Parses a cellset response body and flattens it.
pub fn flatten_cellset_json(json: &str, options: &FlattenOptions) -> Result<Cellset> {
    let raw = RawCellset::from_json_str(json)?;
    flatten_cellset(&raw, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_row_major() {
        let positions: Vec<(usize, usize, usize)> = GridPositions::new(2, 3, None)
            .map(|p| (p.row, p.column, p.ordinal))
            .collect();
        assert_eq!(
            positions,
            vec![(0, 0, 0), (0, 1, 1), (0, 2, 2), (1, 0, 3), (1, 1, 4), (1, 2, 5)]
        );
    }

    #[test]
    fn test_positions_truncated() {
        let positions = GridPositions::new(3, 2, Some(3));
        assert_eq!(positions.len(), 3);
        let last = positions.last().unwrap();
        assert_eq!((last.row, last.column, last.ordinal), (1, 0, 2));
    }

    #[test]
    fn test_positions_top_larger_than_grid() {
        assert_eq!(GridPositions::new(2, 2, Some(100)).count(), 4);
    }

    #[test]
    fn test_positions_empty_grid() {
        assert_eq!(GridPositions::new(0, 5, None).count(), 0);
        assert_eq!(GridPositions::new(5, 0, None).count(), 0);
        assert_eq!(GridPositions::new(5, 5, Some(0)).count(), 0);
    }

    #[test]
    fn test_positions_restart() {
        let mut positions = GridPositions::new(1, 2, None);
        assert_eq!(positions.by_ref().count(), 2);
        assert!(positions.next().is_none());
        positions.restart();
        assert_eq!(positions.next().map(|p| p.ordinal), Some(0));
    }
}
