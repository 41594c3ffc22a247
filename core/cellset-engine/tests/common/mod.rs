//! FILENAME: tests/common/mod.rs
//! Fixtures for cellset-engine integration tests.

#![allow(dead_code)]

use cellset_engine::{RawAxis, RawCell, RawCellset, RawCube, RawDimension, RawMember, RawTuple};
use serde_json::json;

/// Builder for synthetic cellsets.
pub struct CellsetFixture {
    dimensions: Vec<String>,
    axes: Vec<RawAxis>,
    cells: Vec<RawCell>,
}

impl CellsetFixture {
    pub fn new(dimensions: &[&str]) -> Self {
        CellsetFixture {
            dimensions: dimensions.iter().map(|d| d.to_string()).collect(),
            axes: Vec::new(),
            cells: Vec::new(),
        }
    }

    /// Appends an axis; each inner slice is one tuple of unique names.
    pub fn axis(mut self, tuples: &[&[&str]]) -> Self {
        let tuples: Vec<RawTuple> = tuples
            .iter()
            .enumerate()
            .map(|(i, members)| RawTuple {
                ordinal: Some(i),
                members: members.iter().map(|m| RawMember::new(*m)).collect(),
            })
            .collect();
        self.axes.push(RawAxis {
            ordinal: Some(self.axes.len()),
            cardinality: Some(tuples.len()),
            tuples,
        });
        self
    }

    /// Overrides the reported cardinality of the last axis.
    pub fn cardinality(mut self, cardinality: usize) -> Self {
        if let Some(axis) = self.axes.last_mut() {
            axis.cardinality = Some(cardinality);
        }
        self
    }

    /// Adds `count` cells whose `Value` and `Ordinal` equal their index.
    pub fn numbered_cells(mut self, count: usize) -> Self {
        for i in 0..count {
            let cell = json!({
                "Ordinal": i,
                "Value": i,
                "FormattedValue": format!("{:.2}", i as f64),
            });
            if let serde_json::Value::Object(map) = cell {
                self.cells.push(map);
            }
        }
        self
    }

    pub fn build(self) -> RawCellset {
        RawCellset {
            id: Some("fixture".to_string()),
            cube: Some(RawCube {
                name: Some("Sales".to_string()),
                dimensions: self
                    .dimensions
                    .into_iter()
                    .map(|name| RawDimension { name })
                    .collect(),
            }),
            axes: self.axes,
            cells: self.cells,
        }
    }
}

/// Cube dimensions `Region, Year`; years on columns (2), regions on rows (3),
/// no title axis, six cells numbered 0..5.
pub fn regions_by_years() -> RawCellset {
    CellsetFixture::new(&["Region", "Year"])
        .axis(&[&["[Year].[2023]"], &["[Year].[2024]"]])
        .axis(&[&["[Region].[Europe]"], &["[Region].[Asia]"], &["[Region].[North America]"]])
        .numbered_cells(6)
        .build()
}

/// Expected coordinates of [`regions_by_years`] in row-major order.
pub fn regions_by_years_coordinates() -> Vec<[&'static str; 2]> {
    vec![
        ["[Region].[Europe]", "[Year].[2023]"],
        ["[Region].[Europe]", "[Year].[2024]"],
        ["[Region].[Asia]", "[Year].[2023]"],
        ["[Region].[Asia]", "[Year].[2024]"],
        ["[Region].[North America]", "[Year].[2023]"],
        ["[Region].[North America]", "[Year].[2024]"],
    ]
}
