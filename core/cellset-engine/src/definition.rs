//! FILENAME: core/cellset-engine/src/definition.rs
//! Raw Cellset - the deserialized shape of an executed MDX query.
//!
//! These structures mirror the JSON returned by the server's cellset
//! endpoint. They are designed to be:
//! - Deserialized straight from the response body (unknown fields ignored)
//! - Read-only input to the flattener
//!
//! Axis 0 holds the columns, axis 1 the rows and the optional axis 2 the
//! title (slicer) members. Cells are stored row-major: for each row tuple,
//! every column tuple in order.

use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Index of the column axis in `Axes`.
pub const COLUMN_AXIS: usize = 0;
/// Index of the row axis in `Axes`.
pub const ROW_AXIS: usize = 1;
/// Index of the title (slicer) axis in `Axes`.
pub const TITLE_AXIS: usize = 2;

/// A single cell: property name -> raw value (`Value`, `FormattedValue`,
/// `Ordinal`, ...).
pub type RawCell = Map<String, Value>;

// ============================================================================
// CELLSET
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawCellset {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cube: Option<RawCube>,

    #[serde(default)]
    pub axes: Vec<RawAxis>,

    #[serde(default)]
    pub cells: Vec<RawCell>,
}

impl RawCellset {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Dimension names in the cube's declared order. Empty when the cube
    /// was not expanded.
    pub fn dimension_names(&self) -> Vec<&str> {
        self.cube
            .as_ref()
            .map(|cube| cube.dimensions.iter().map(|d| d.name.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn axis(&self, index: usize) -> Option<&RawAxis> {
        self.axes.get(index)
    }

    pub fn column_axis(&self) -> Option<&RawAxis> {
        self.axis(COLUMN_AXIS)
    }

    pub fn row_axis(&self) -> Option<&RawAxis> {
        self.axis(ROW_AXIS)
    }

    pub fn title_axis(&self) -> Option<&RawAxis> {
        self.axis(TITLE_AXIS)
    }
}

// ============================================================================
// CUBE
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawCube {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub dimensions: Vec<RawDimension>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawDimension {
    pub name: String,
}

// ============================================================================
// AXES
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawAxis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<usize>,

    /// Number of tuples on the axis as reported by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardinality: Option<usize>,

    #[serde(default)]
    pub tuples: Vec<RawTuple>,
}

impl RawAxis {
    /// Reported cardinality, or the tuple count when the server left it out.
    pub fn cardinality(&self) -> usize {
        self.cardinality.unwrap_or(self.tuples.len())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawTuple {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<usize>,

    #[serde(default)]
    pub members: Vec<RawMember>,
}

impl RawTuple {
    pub fn unique_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.iter().map(|m| m.unique_name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Qualified label, "[Dimension].[Element]".
    pub unique_name: String,
}

impl RawMember {
    pub fn new(unique_name: impl Into<String>) -> Self {
        RawMember {
            name: None,
            unique_name: unique_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_server_shape() {
        let raw = RawCellset::from_json_value(json!({
            "ID": "cs-1",
            "@odata.context": "$metadata#Cellsets",
            "Cube": {
                "Name": "Sales",
                "Dimensions": [{"Name": "Year"}, {"Name": "Region"}]
            },
            "Axes": [
                {
                    "Ordinal": 0,
                    "Cardinality": 1,
                    "Tuples": [{"Ordinal": 0, "Members": [{"Name": "2024", "UniqueName": "[Year].[2024]"}]}]
                },
                {
                    "Ordinal": 1,
                    "Cardinality": 1,
                    "Tuples": [{"Members": [{"UniqueName": "[Region].[Europe]"}]}]
                }
            ],
            "Cells": [{"Ordinal": 0, "Value": 12.5, "FormattedValue": "12.50"}]
        }))
        .unwrap();

        assert_eq!(raw.id.as_deref(), Some("cs-1"));
        assert_eq!(raw.dimension_names(), vec!["Year", "Region"]);
        assert_eq!(raw.axes.len(), 2);
        let columns = raw.column_axis().unwrap();
        assert_eq!(columns.cardinality(), 1);
        assert_eq!(columns.tuples[0].unique_names().collect::<Vec<_>>(), vec!["[Year].[2024]"]);
        assert_eq!(columns.tuples[0].members[0].name.as_deref(), Some("2024"));
        assert!(raw.title_axis().is_none());
        assert_eq!(raw.cells[0]["Value"], json!(12.5));
    }

    #[test]
    fn test_cardinality_falls_back_to_tuple_count() {
        let axis = RawAxis {
            ordinal: None,
            cardinality: None,
            tuples: vec![RawTuple::default(), RawTuple::default()],
        };
        assert_eq!(axis.cardinality(), 2);
    }

    #[test]
    fn test_missing_sections_default() {
        let raw = RawCellset::from_json_str("{}").unwrap();
        assert!(raw.cube.is_none());
        assert!(raw.axes.is_empty());
        assert!(raw.cells.is_empty());
        assert!(raw.dimension_names().is_empty());
    }

    #[test]
    fn test_member_requires_unique_name() {
        let result = RawCellset::from_json_str(
            r#"{"Axes": [{"Tuples": [{"Members": [{"Name": "x"}]}]}]}"#,
        );
        assert!(matches!(result, Err(crate::CellsetError::Json(_))));
    }
}
