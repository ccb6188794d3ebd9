//! Dynamic parameter bag for boundary callers.
//!
//! [`ParameterBag`] gives the CLI and JSON inputs an untyped name/value
//! surface, while [`ModelParams::from_bag`](crate::ModelParams::from_bag)
//! converts it into the validated tagged union before any simulation runs.

use std::collections::BTreeMap;

use crate::error::ModelError;
use crate::kind::ModelKind;

/// An ordered name -> value map of numeric model parameters.
///
/// # Examples
///
/// ```rust
/// use pathcast_models::ParameterBag;
///
/// let bag = ParameterBag::new()
///     .with("S0", 100.0)
///     .with("mu", 0.05)
///     .with("sigma", 0.2);
/// assert_eq!(bag.get("sigma"), Some(0.2));
/// assert_eq!(bag.get("rho"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParameterBag {
    entries: BTreeMap<String, f64>,
}

impl ParameterBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, replacing any previous value under that name.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.entries.insert(name.into(), value);
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Looks up a parameter by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.get(name).copied()
    }

    /// Number of entries in the bag.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Fetches a required field for `model`, failing with a
    /// [`ModelError::MissingParameter`] that names the field.
    pub(crate) fn require(&self, model: ModelKind, name: &'static str) -> Result<f64, ModelError> {
        self.get(name)
            .ok_or(ModelError::MissingParameter { model, name })
    }
}

impl FromIterator<(String, f64)> for ParameterBag {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut bag = ParameterBag::new();
        bag.insert("mu", 0.05);
        assert_eq!(bag.get("mu"), Some(0.05));
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn later_insert_wins() {
        let bag = ParameterBag::new().with("mu", 0.05).with("mu", 0.08);
        assert_eq!(bag.get("mu"), Some(0.08));
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn require_names_the_missing_field() {
        let bag = ParameterBag::new();
        let err = bag.require(ModelKind::Heston, "kappa").unwrap_err();
        assert_eq!(
            err,
            ModelError::MissingParameter {
                model: ModelKind::Heston,
                name: "kappa",
            }
        );
    }

    #[test]
    fn collects_from_pairs() {
        let bag: ParameterBag = vec![("S0".to_string(), 100.0), ("mu".to_string(), 0.05)]
            .into_iter()
            .collect();
        assert_eq!(bag.get("S0"), Some(100.0));
        assert!(!bag.is_empty());
    }
}
