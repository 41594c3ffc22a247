//! FILENAME: core/cellset-frame/src/conversion.rs
//! Flattened cellset -> frame conversion.
//!
//! Coordinates carry qualified unique names ("[Region].[Europe]"). The frame
//! keeps only the element part per row and takes its level names from the
//! dimension part of the first coordinate.

use cellset_engine::{dimension_name, element_name, Cellset, Coordinate};

use crate::error::FrameError;
use crate::view::CellsetFrame;

fn dimension_names_of(coordinate: &Coordinate) -> Result<Vec<String>, FrameError> {
    coordinate
        .iter()
        .map(|unique_name| {
            dimension_name(unique_name)
                .map(str::to_string)
                .ok_or_else(|| FrameError::MalformedUniqueName(unique_name.clone()))
        })
        .collect()
}

fn element_names_of(coordinate: &Coordinate) -> Result<Vec<String>, FrameError> {
    coordinate
        .iter()
        .map(|unique_name| {
            element_name(unique_name)
                .map(str::to_string)
                .ok_or_else(|| FrameError::MalformedUniqueName(unique_name.clone()))
        })
        .collect()
}

/// Builds a frame from a flattened cellset, reading `value_property`
/// (usually "Value") from every cell.
///
/// All coordinates must have the arity of the first one.
pub fn build_frame_from_cellset(
    cellset: &Cellset,
    value_property: &str,
) -> Result<CellsetFrame, FrameError> {
    let mut frame = CellsetFrame {
        dimension_names: Vec::new(),
        index: Vec::with_capacity(cellset.len()),
        values: Vec::with_capacity(cellset.len()),
    };

    for (position, (coordinate, properties)) in cellset.iter().enumerate() {
        if position == 0 {
            frame.dimension_names = dimension_names_of(coordinate)?;
        } else if coordinate.len() != frame.dimension_names.len() {
            return Err(FrameError::InconsistentArity {
                expected: frame.dimension_names.len(),
                found: coordinate.len(),
                coordinate: coordinate.to_string(),
            });
        }

        let value = properties
            .get(value_property)
            .map_err(|_| FrameError::MissingProperty {
                property: value_property.to_string(),
                coordinate: coordinate.to_string(),
            })?;

        frame.index.push(element_names_of(coordinate)?);
        frame.values.push(value.clone());
    }

    Ok(frame)
}
