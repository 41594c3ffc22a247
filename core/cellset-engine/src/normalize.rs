//! FILENAME: core/cellset-engine/src/normalize.rs
//! PURPOSE: Lookup-key normalization for labels and label tuples.
//! CONTEXT: OLAP servers treat object names as case and space insensitive,
//! so "[Business Unit].[UK]" and "[businessunit].[uk]" address the same
//! element. Normalization lower-cases and drops every space character;
//! tuples are normalized component by component, keeping arity.

use std::fmt;
use std::hash::Hash;

use smallvec::SmallVec;

/// A label after case folding and space removal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedLabel(String);

impl NormalizedLabel {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A label tuple normalized component-wise. Position and arity are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedTuple(SmallVec<[NormalizedLabel; 4]>);

impl NormalizedTuple {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[NormalizedLabel] {
        &self.0
    }
}

impl fmt::Display for NormalizedTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(label.as_str())?;
        }
        f.write_str(")")
    }
}

/// Lower-cases `label` and removes all space characters.
///
/// Only U+0020 is stripped; tabs and other whitespace are kept as-is.
pub fn normalize(label: &str) -> NormalizedLabel {
    NormalizedLabel(label.replace(' ', "").to_lowercase())
}

/// Applies [`normalize`] to every label, preserving order.
pub fn normalize_tuple<I, S>(labels: I) -> NormalizedTuple
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NormalizedTuple(labels.into_iter().map(|l| normalize(l.as_ref())).collect())
}

// ============================================================================
// KEY CODEC
// ============================================================================

/// Anything that can be turned into a normalized lookup key.
///
/// Owned keys (`String`, `Coordinate`) and their borrowed forms (`str`,
/// slices, arrays) share the same `Normalized` type, so a map keyed by
/// `String` can be queried with `&str` and a map keyed by coordinates can be
/// queried with a plain array of labels.
pub trait KeyCodec {
    type Normalized: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    fn normalize_key(&self) -> Self::Normalized;
}

impl KeyCodec for str {
    type Normalized = NormalizedLabel;

    fn normalize_key(&self) -> NormalizedLabel {
        normalize(self)
    }
}

impl KeyCodec for String {
    type Normalized = NormalizedLabel;

    fn normalize_key(&self) -> NormalizedLabel {
        normalize(self)
    }
}

impl<S: AsRef<str>> KeyCodec for [S] {
    type Normalized = NormalizedTuple;

    fn normalize_key(&self) -> NormalizedTuple {
        normalize_tuple(self)
    }
}

impl<S: AsRef<str>> KeyCodec for Vec<S> {
    type Normalized = NormalizedTuple;

    fn normalize_key(&self) -> NormalizedTuple {
        normalize_tuple(self)
    }
}

impl<S: AsRef<str>, const N: usize> KeyCodec for [S; N] {
    type Normalized = NormalizedTuple;

    fn normalize_key(&self) -> NormalizedTuple {
        normalize_tuple(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_case_and_spaces() {
        assert_eq!(normalize("Travel Expenses").as_str(), "travelexpenses");
        assert_eq!(normalize("  TRAVEL expenses ").as_str(), "travelexpenses");
        assert_eq!(normalize("[Business Unit].[UK]").as_str(), "[businessunit].[uk]");
    }

    #[test]
    fn test_normalize_is_total() {
        assert_eq!(normalize("").as_str(), "");
        assert_eq!(normalize("   ").as_str(), "");
        assert_eq!(normalize("Ärger Ü").as_str(), "ärgerü");
    }

    #[test]
    fn test_normalize_final_sigma() {
        assert_eq!(normalize("ΣΟΣ").as_str(), "σος");
        assert_eq!(normalize("ΣΟ Σ"), normalize("σος"));
    }

    #[test]
    fn test_normalize_keeps_other_whitespace() {
        assert_eq!(normalize("a\tB").as_str(), "a\tb");
    }

    #[test]
    fn test_normalize_tuple_preserves_position_and_arity() {
        let t = normalize_tuple(["[Scenario].[Worst Case]", "[Year].[2024]"]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.as_slice()[0].as_str(), "[scenario].[worstcase]");
        assert_eq!(t.as_slice()[1].as_str(), "[year].[2024]");

        let shorter = normalize_tuple(["[Scenario].[Worst Case]"]);
        assert_ne!(t, shorter);

        let swapped = normalize_tuple(["[Year].[2024]", "[Scenario].[Worst Case]"]);
        assert_ne!(t, swapped);
    }

    #[test]
    fn test_borrowed_and_owned_forms_agree() {
        let owned = vec!["[A].[x y]".to_string(), "[B].[Z]".to_string()];
        let borrowed: &[&str] = &["[a].[xy]", "[b].[z]"];
        assert_eq!(owned.normalize_key(), borrowed.normalize_key());
        assert_eq!("Foo Bar".normalize_key(), "foobar".to_string().normalize_key());
    }

    #[test]
    fn test_tuple_display() {
        let t = normalize_tuple(["[A].[X]", "[B].[Y]"]);
        assert_eq!(t.to_string(), "([a].[x], [b].[y])");
    }
}
