//! Document cleanup: sweep empty values, then unwrap singleton lists.
//!
//! Both passes walk the whole value tree depth-first. A mapping or list that
//! becomes empty during the sweep is removed from its parent as well.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// String values treated as empty by the sweep. `null` is always swept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SweepPolicy {
    values: Vec<String>,
}

/// Placeholder strings that carry no information in the DGIdb dump.
pub const DEFAULT_SWEEP_VALUES: &[&str] =
    &["", ".", "-", "NA", "none", " ", "Not Available", "unknown"];

impl Default for SweepPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_SWEEP_VALUES.iter().map(|v| v.to_string()))
    }
}

impl SweepPolicy {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { values: values.into_iter().map(Into::into).collect() }
    }

    /// Only null and the empty string are swept.
    pub fn empty_only() -> Self {
        Self::new([""])
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    fn is_swept(&self, value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(s) => self.values.iter().any(|v| v == s),
            _ => false,
        }
    }
}

/// Runs [`sweep`] then [`unlist`].
pub fn clean_document(mut value: Value, policy: &SweepPolicy) -> Value {
    sweep(&mut value, policy);
    unlist(&mut value);
    value
}

/// Removes swept values, and containers left empty, from mappings and lists.
pub fn sweep(value: &mut Value, policy: &SweepPolicy) {
    match value {
        Value::Object(map) => map.retain(|_, v| keep_after_sweep(v, policy)),
        Value::Array(items) => items.retain_mut(|v| keep_after_sweep(v, policy)),
        _ => {}
    }
}

fn keep_after_sweep(value: &mut Value, policy: &SweepPolicy) -> bool {
    sweep(value, policy);
    !(policy.is_swept(value) || is_hollow(value))
}

fn is_hollow(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Replaces every single-element list nested in `value` with its element.
pub fn unlist(value: &mut Value) {
    match value {
        Value::Object(map) => map.values_mut().for_each(unlist_child),
        Value::Array(items) => items.iter_mut().for_each(unlist_child),
        _ => {}
    }
}

fn unlist_child(value: &mut Value) {
    unlist(value);
    if let Value::Array(items) = value {
        if items.len() == 1 {
            if let Some(only) = items.pop() {
                *value = only;
            }
        }
    }
}
