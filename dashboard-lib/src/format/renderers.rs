//! Ready-made cell renderers built on the format helpers.
//!
//! ```
//! use dashboard_lib::format::renderers;
//! use dashboard_lib::model::Row;
//! use dashboard_lib::view::ColumnDescriptor;
//!
//! let column = ColumnDescriptor::<Row>::new("views", "Views").render(renderers::compact());
//! assert_eq!(column.cell(&Row::new().set("views", 15300)).as_str(), "15.3K");
//! ```

use super::{
    capitalize, format_compact_number, format_currency, format_date, format_date_time, format_number,
    truncate_text,
};
use crate::model::Value;
use crate::view::{DisplayValue, Renderer};

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_null())
}

fn numeric(value: Option<&Value>, format: fn(Option<f64>) -> String) -> DisplayValue {
    match present(value) {
        None => DisplayValue::text(format(None)),
        Some(value) => match value.as_f64() {
            Some(n) => DisplayValue::text(format(Some(n))),
            None => DisplayValue::text(value.to_string()),
        },
    }
}

fn dated(value: Option<&Value>, format: fn(&str) -> String) -> DisplayValue {
    let text = present(value).map(ToString::to_string).unwrap_or_default();
    DisplayValue::text(format(&text))
}

/// `1,234`
pub fn number<R: ?Sized>() -> impl Renderer<R> {
    |value: Option<&Value>, _row: &R| numeric(value, format_number)
}

/// `1.2K`
pub fn compact<R: ?Sized>() -> impl Renderer<R> {
    |value: Option<&Value>, _row: &R| numeric(value, format_compact_number)
}

/// `$1,234`
pub fn currency<R: ?Sized>() -> impl Renderer<R> {
    |value: Option<&Value>, _row: &R| numeric(value, format_currency)
}

/// `Jan 15, 2024`
pub fn date<R: ?Sized>() -> impl Renderer<R> {
    |value: Option<&Value>, _row: &R| dated(value, format_date)
}

/// `Jan 15, 2024, 10:30 AM`
pub fn date_time<R: ?Sized>() -> impl Renderer<R> {
    |value: Option<&Value>, _row: &R| dated(value, format_date_time)
}

/// `pending` → `Pending`
pub fn capitalized<R: ?Sized>() -> impl Renderer<R> {
    |value: Option<&Value>, _row: &R| match present(value) {
        Some(value) => DisplayValue::text(capitalize(&value.to_string())),
        None => DisplayValue::Empty,
    }
}

/// Cuts text to `max_len` characters.
pub fn truncated<R: ?Sized>(max_len: usize) -> impl Renderer<R> {
    move |value: Option<&Value>, _row: &R| match present(value) {
        Some(value) => DisplayValue::text(truncate_text(&value.to_string(), max_len)),
        None => DisplayValue::Empty,
    }
}

/// `Yes` for truthy values, `No` otherwise.
pub fn yes_no<R: ?Sized>() -> impl Renderer<R> {
    |value: Option<&Value>, _row: &R| {
        let yes = value.is_some_and(Value::is_truthy);
        DisplayValue::text(if yes { "Yes" } else { "No" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    fn render(renderer: impl Renderer<Row>, value: Option<Value>) -> String {
        renderer.present(value.as_ref(), &Row::new()).to_string()
    }

    #[test]
    fn test_numeric_renderers() {
        assert_eq!(render(number(), Some(Value::from(1234))), "1,234");
        assert_eq!(render(number(), None), "0");
        assert_eq!(render(currency(), Some(Value::Null)), "$0");
        assert_eq!(render(compact(), Some(Value::from(2_500_000))), "2.5M");
        assert_eq!(render(number(), Some(Value::from("n/a"))), "n/a");
    }

    #[test]
    fn test_date_renderers() {
        assert_eq!(render(date(), Some(Value::from("2024-01-15T10:30:00Z"))), "Jan 15, 2024");
        assert_eq!(render(date_time(), None), "-");
    }

    #[test]
    fn test_text_renderers() {
        assert_eq!(render(capitalized(), Some(Value::from("active"))), "Active");
        assert_eq!(render(capitalized(), None), "");
        assert_eq!(render(truncated(3), Some(Value::from("abcdef"))), "abc...");
        assert_eq!(render(yes_no(), Some(Value::from(true))), "Yes");
        assert_eq!(render(yes_no(), Some(Value::from(0))), "No");
    }
}
