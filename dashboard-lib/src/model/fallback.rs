//! Ordered fallback extraction

use super::Row;
use super::Value;

/// Which values count as "found" when walking a [`Fallback`] chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    /// Skip only missing and `null` values.
    #[default]
    NonNull,
    /// Also skip `false`, `0` and `""`.
    Truthy,
}

impl Presence {
    fn accepts(self, value: &Value) -> bool {
        match self {
            Presence::NonNull => !value.is_null(),
            Presence::Truthy => value.is_truthy(),
        }
    }
}

/// An ordered list of field paths, evaluated in sequence.
///
/// API payloads name the same thing differently depending on the endpoint
/// (`_id`, `id`, `uuid`; `createdAt`, `created_at`). A `Fallback` captures the
/// lookup order once and resolves it against any row.
///
/// # Example
///
/// ```
/// use dashboard_lib::model::{Fallback, Row, Value};
///
/// let row = Row::new().set("views", 0).set("view_count", 12);
///
/// let non_null = Fallback::non_null(["views_count", "views", "view_count"]);
/// assert_eq!(non_null.resolve(&row), Some(&Value::Int(0)));
///
/// let truthy = Fallback::truthy(["views_count", "views", "view_count"]);
/// assert_eq!(truthy.resolve(&row), Some(&Value::Int(12)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    paths: Vec<String>,
    presence: Presence,
}

impl Fallback {
    /// Creates a chain with the given presence rule.
    pub fn new<I, S>(paths: I, presence: Presence) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            presence,
        }
    }

    /// Chain that takes the first value that is neither missing nor `null`.
    pub fn non_null<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(paths, Presence::NonNull)
    }

    /// Chain that takes the first truthy value.
    pub fn truthy<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(paths, Presence::Truthy)
    }

    /// Appends another path to the end of the chain.
    pub fn then(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Returns the paths in evaluation order.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Returns the first accepted value.
    pub fn resolve<'a>(&self, row: &'a Row) -> Option<&'a Value> {
        self.paths
            .iter()
            .filter_map(|path| row.get_path(path))
            .find(|value| self.presence.accepts(value))
    }

    /// Returns the first accepted value, stringified.
    pub fn resolve_string(&self, row: &Row) -> Option<String> {
        self.resolve(row).map(ToString::to_string)
    }

    /// Returns the first accepted value, or `default` when none is found.
    pub fn resolve_or(&self, row: &Row, default: impl Into<Value>) -> Value {
        self.resolve(row).cloned().unwrap_or_else(|| default.into())
    }
}
