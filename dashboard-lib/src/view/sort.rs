//! Sort configuration and value ordering

use std::cmp::Ordering;

use super::ColumnDescriptor;
use crate::model::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// `"asc"` or `"desc"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// The active sort of a table: an optional column key plus a direction.
///
/// # Example
///
/// ```
/// use dashboard_lib::model::Row;
/// use dashboard_lib::view::{ColumnDescriptor, Direction, SortConfig};
///
/// let name = ColumnDescriptor::<Row>::new("name", "Name");
/// let email = ColumnDescriptor::<Row>::new("email", "Email");
///
/// let sort = SortConfig::none().toggled(&name);
/// assert_eq!(sort, SortConfig::asc("name"));
///
/// let sort = sort.toggled(&name);
/// assert_eq!(sort.direction, Direction::Desc);
///
/// // A different column always starts ascending.
/// assert_eq!(sort.toggled(&email), SortConfig::asc("email"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortConfig {
    /// Column key to sort by; `None` keeps source order.
    pub key: Option<String>,
    /// Direction applied when `key` is set.
    pub direction: Direction,
}

impl SortConfig {
    /// No sorting.
    pub fn none() -> Self {
        Self::default()
    }

    /// Ascending on `key`.
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            direction: Direction::Asc,
        }
    }

    /// Descending on `key`.
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            direction: Direction::Desc,
        }
    }

    /// The key to sort by, ignoring blank keys.
    pub fn active_key(&self) -> Option<&str> {
        self.key.as_deref().filter(|key| !key.trim().is_empty())
    }

    /// Returns the direction if the table is sorted by `key`.
    pub fn direction_for(&self, key: &str) -> Option<Direction> {
        (self.active_key() == Some(key)).then_some(self.direction)
    }

    /// The config that results from activating `column`'s header.
    ///
    /// The same key flips direction, a new key starts ascending, and a column
    /// that is not sortable leaves the config unchanged. The cycle never goes
    /// back to unsorted.
    pub fn toggled<R>(&self, column: &ColumnDescriptor<R>) -> Self {
        if !column.is_sortable() {
            return self.clone();
        }
        match self.direction_for(column.key()) {
            Some(direction) => Self {
                key: Some(column.key().to_string()),
                direction: direction.reversed(),
            },
            None => Self::asc(column.key()),
        }
    }
}

/// Orders two raw field values for sorting.
///
/// Missing and `null` values go last whatever the direction. Strings compare
/// case-insensitively first, numbers numerically across `Int`, `Long` and
/// `Float`, and `false` sorts before `true`. Anything else, including mixed
/// kinds and `NaN`, compares as equal, which keeps source order for those rows.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>, direction: Direction) -> Ordering {
    let a = a.filter(|value| !value.is_null());
    let b = b.filter(|value| !value.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = compare_present(a, b);
            match direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        }
    }
}

fn compare_present(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => compare_text(a, b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => match (as_integer(a), as_integer(b)) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
        },
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(i64::from(*n)),
        Value::Long(n) => Some(*n),
        _ => None,
    }
}

/// Case-insensitive comparison; lowercase sorts first when only case differs.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Stable bottom-up merge sort.
///
/// Unlike `slice::sort_by`, this tolerates comparators that are not a total
/// order, which `compare_values` is not once mixed kinds are involved.
pub(crate) fn stable_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }

    let mut buffer = items.to_vec();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(&items[start..mid], &items[mid..end], &mut buffer[start..end], &mut compare);
            start = end;
        }
        items.copy_from_slice(&buffer);
        width *= 2;
    }
}

fn merge<T, F>(left: &[T], right: &[T], out: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        // Ties take from the left run.
        let take_left = j >= right.len()
            || (i < left.len() && compare(&right[j], &left[i]) != Ordering::Less);
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
