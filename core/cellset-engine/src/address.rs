//! FILENAME: core/cellset-engine/src/address.rs
//! PURPOSE: Coordinates and the dimension-order sorting of element addresses.
//! CONTEXT: A cell on a cellset is addressed by members spread over the
//! column, row and title axes. Their concatenation is in axis order; a
//! `Coordinate` is the same set of unique names reordered to follow the
//! cube's dimension order. A unique name belongs to a dimension when it
//! starts with "[<dimension>].".

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::DuplicatePolicy;
use crate::error::{CellsetError, Result};
use crate::logging::log_warn;
use crate::normalize::{normalize_tuple, KeyCodec, NormalizedTuple};

// ============================================================================
// COORDINATE
// ============================================================================

/// One qualified element label per cube dimension, in dimension order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinate(SmallVec<[String; 4]>);

impl Coordinate {
    pub fn new() -> Self {
        Coordinate(SmallVec::new())
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Coordinate(labels.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into_vec()
    }
}

impl Deref for Coordinate {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl FromIterator<String> for Coordinate {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Coordinate(iter.into_iter().collect())
    }
}

impl From<Vec<String>> for Coordinate {
    fn from(labels: Vec<String>) -> Self {
        Coordinate(SmallVec::from_vec(labels))
    }
}

impl KeyCodec for Coordinate {
    type Normalized = NormalizedTuple;

    fn normalize_key(&self) -> NormalizedTuple {
        normalize_tuple(self.0.iter())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(", "))
    }
}

// ============================================================================
// UNIQUE NAME PARTS
// ============================================================================

/// "[Region].[Europe]" -> "Region".
pub fn dimension_name(unique_name: &str) -> Option<&str> {
    let body = unique_name.strip_prefix('[')?;
    let end = body.find("].[")?;
    Some(&body[..end])
}

/// "[Region].[Europe]" -> "Europe". With hierarchies in the unique name
/// ("[Region].[Geo].[Europe]") the last part is returned.
pub fn element_name(unique_name: &str) -> Option<&str> {
    let start = unique_name.rfind("].[")? + 3;
    unique_name[start..].strip_suffix(']')
}

// ============================================================================
// SORTER
// ============================================================================

/// Reorders element addresses into dimension order.
///
/// The dimension prefixes are built once, so one sorter can be reused for
/// every cell of a cellset.
#[derive(Debug, Clone)]
pub struct AddressSorter {
    dimensions: Vec<String>,
    prefixes: Vec<String>,
    policy: DuplicatePolicy,
}

impl AddressSorter {
    pub fn new<I, S>(dimension_order: I, policy: DuplicatePolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dimensions: Vec<String> = dimension_order.into_iter().map(Into::into).collect();
        let prefixes = dimensions.iter().map(|d| format!("[{}].", d)).collect();
        AddressSorter {
            dimensions,
            prefixes,
            policy,
        }
    }

    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    /// Picks, for each dimension, the element whose unique name carries that
    /// dimension's prefix. The result always has one label per dimension.
    pub fn sort<L: AsRef<str>>(&self, unsorted: &[L]) -> Result<Coordinate> {
        let mut sorted = SmallVec::with_capacity(self.dimensions.len());

        for (dimension, prefix) in self.dimensions.iter().zip(&self.prefixes) {
            let mut matches = unsorted
                .iter()
                .map(|label| label.as_ref())
                .filter(|label| label.starts_with(prefix.as_str()));

            let first = matches.next().ok_or_else(|| CellsetError::DimensionNotFound {
                dimension: dimension.clone(),
                elements: unsorted.iter().map(|l| l.as_ref().to_string()).collect(),
            })?;

            if let Some(second) = matches.next() {
                match self.policy {
                    DuplicatePolicy::FirstMatch => {
                        log_warn!(
                            "ADDRESS",
                            "dimension '{}' matched '{}' and '{}', keeping the first",
                            dimension,
                            first,
                            second
                        );
                    }
                    DuplicatePolicy::Reject => {
                        return Err(CellsetError::AmbiguousDimension {
                            dimension: dimension.clone(),
                            matches: [first, second]
                                .into_iter()
                                .chain(matches)
                                .map(str::to_string)
                                .collect(),
                        });
                    }
                }
            }

            sorted.push(first.to_string());
        }

        Ok(Coordinate(sorted))
    }
}

/// One-off form of [`AddressSorter::sort`].
pub fn sort_address_tuple<D, L>(
    dimension_order: &[D],
    unsorted: &[L],
    policy: DuplicatePolicy,
) -> Result<Coordinate>
where
    D: AsRef<str>,
    L: AsRef<str>,
{
    AddressSorter::new(dimension_order.iter().map(|d| d.as_ref()), policy).sort(unsorted)
}
