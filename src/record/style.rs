use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Display options handed unchanged to a plotting backend.
///
/// Keys follow matplotlib's `Line2D` keyword names (`color`, `marker`,
/// `markersize`, `linestyle`, ...). Nothing in this crate interprets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlotStyle(BTreeMap<String, Value>);

impl PlotStyle {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the style with one option set
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Set one option in place
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Look up one option
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Copy of this style with every option of `overrides` applied on top
    pub fn merged(&self, overrides: &PlotStyle) -> PlotStyle {
        let mut merged = self.clone();
        for (key, value) in &overrides.0 {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Iterate over options in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of options
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no option is set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
