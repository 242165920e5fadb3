//! Field access seam used by the view pipeline

use std::collections::HashMap;

use super::Row;
use super::Value;

/// Read-only access to a row's fields by key.
///
/// This is the only way the [`view`](crate::view) pipeline looks into a row,
/// so hosts with their own row types can implement it instead of converting
/// to [`Row`].
pub trait FieldSource {
    /// Returns the raw value stored under `key`, if any.
    fn field(&self, key: &str) -> Option<&Value>;

    /// Returns the value under `key` unless it is missing or `Null`.
    fn present(&self, key: &str) -> Option<&Value> {
        self.field(key).filter(|value| !value.is_null())
    }
}

impl FieldSource for Row {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl FieldSource for HashMap<String, Value> {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, key: &str) -> Option<&Value> {
        (**self).field(key)
    }
}
