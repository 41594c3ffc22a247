//! FILENAME: core/cellset-engine/src/config.rs
//! Flatten options - the serializable configuration of a flatten call.
//!
//! Hosts can build options in code or deserialize them from JSON; every
//! field has a default, so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};

/// What to do when several coordinate elements carry the same dimension
/// prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// Keep the first matching element in input order and log a warning.
    FirstMatch,
    /// Fail with `AmbiguousDimension`.
    Reject,
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        DuplicatePolicy::FirstMatch
    }
}

/// Options for [`crate::flatten_cellset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlattenOptions {
    /// Cell properties to copy into the result, in this order.
    pub cell_properties: Vec<String>,

    /// Stop after this many cells (row-major). `None` reads every cell.
    pub top: Option<usize>,

    pub duplicate_policy: DuplicatePolicy,
}

fn default_cell_properties() -> Vec<String> {
    vec!["Value".to_string()]
}

impl Default for FlattenOptions {
    fn default() -> Self {
        FlattenOptions {
            cell_properties: default_cell_properties(),
            top: None,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl FlattenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cell_properties = properties.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_top(mut self, top: usize) -> Self {
        self.top = Some(top);
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}
