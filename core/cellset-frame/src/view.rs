//! FILENAME: core/cellset-frame/src/view.rs
//! Cellset Frame - tabular output for analysis tools.
//!
//! One row per flattened cell: the element names of its coordinate (the
//! row index, one level per dimension) and a single value column.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use cellset_engine::normalize;

/// Borrowed view of one frame row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRow<'a> {
    /// Element names, one per dimension, in `dimension_names` order.
    pub elements: &'a [String],
    pub value: &'a Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellsetFrame {
    /// Index level names.
    pub dimension_names: Vec<String>,

    /// Element names per row. Every entry has `dimension_names.len()` items.
    pub index: Vec<Vec<String>>,

    /// Value per row, parallel to `index`.
    pub values: Vec<Value>,
}

impl CellsetFrame {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = FrameRow<'_>> + '_ {
        self.index
            .iter()
            .zip(&self.values)
            .map(|(elements, value)| FrameRow { elements, value })
    }

    /// Position of `dimension` among the index levels, ignoring case and
    /// spaces.
    pub fn level_of(&self, dimension: &str) -> Option<usize> {
        let wanted = normalize(dimension);
        self.dimension_names
            .iter()
            .position(|name| normalize(name) == wanted)
    }

    /// All element names of one index level, in row order.
    ///
    /// `None` if the level is unknown or some row is too short to have it.
    pub fn column(&self, dimension: &str) -> Option<Vec<&str>> {
        let level = self.level_of(dimension)?;
        self.index
            .iter()
            .map(|row| row.get(level).map(String::as_str))
            .collect()
    }

    /// Rows as JSON objects: one key per dimension plus `value_column`.
    pub fn to_records(&self, value_column: &str) -> Vec<Map<String, Value>> {
        self.rows()
            .map(|row| {
                let mut record: Map<String, Value> = self
                    .dimension_names
                    .iter()
                    .zip(row.elements)
                    .map(|(dimension, element)| (dimension.clone(), Value::String(element.clone())))
                    .collect();
                record.insert(value_column.to_string(), row.value.clone());
                record
            })
            .collect()
    }
}
