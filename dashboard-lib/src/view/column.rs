//! Column descriptors and cell renderers

use std::fmt;
use std::sync::Arc;

use crate::model::FieldSource;
use crate::model::Row;
use crate::model::Value;

/// What a renderer produced for one cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayValue {
    /// Nothing to show.
    #[default]
    Empty,
    /// Plain text.
    Text(String),
}

impl DisplayValue {
    /// Creates a text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the cell text (`""` for `Empty`).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Text(text) => text,
        }
    }

    /// Returns `true` for `Empty` and for blank text.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for DisplayValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for DisplayValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Turns a raw field value into presentation output.
///
/// Renderers only run when a cell is drawn. Search and sort always look at the
/// raw value, never at what a renderer returns.
///
/// Any `Fn(Option<&Value>, &R) -> DisplayValue` closure is a renderer.
pub trait Renderer<R: ?Sized = Row>: Send + Sync {
    /// Presents `value` (the raw field, `None` when absent) for `row`.
    fn present(&self, value: Option<&Value>, row: &R) -> DisplayValue;
}

impl<R: ?Sized, F> Renderer<R> for F
where
    F: Fn(Option<&Value>, &R) -> DisplayValue + Send + Sync,
{
    fn present(&self, value: Option<&Value>, row: &R) -> DisplayValue {
        self(value, row)
    }
}

/// Default renderer: shows the raw value, and nothing for null or missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl<R: ?Sized> Renderer<R> for PassThrough {
    fn present(&self, value: Option<&Value>, _row: &R) -> DisplayValue {
        match value {
            None | Some(Value::Null) => DisplayValue::Empty,
            Some(value) => DisplayValue::Text(value.to_string()),
        }
    }
}

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Pads `text` to `width` characters according to the alignment.
    ///
    /// Text already wider than `width` is returned unchanged.
    pub fn pad(self, text: &str, width: usize) -> String {
        let len = text.chars().count();
        if len >= width {
            return text.to_string();
        }
        let gap = width - len;
        let (left, right) = match self {
            Align::Left => (0, gap),
            Align::Right => (gap, 0),
            Align::Center => (gap / 2, gap - gap / 2),
        };
        format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
    }
}

/// Describes how one row field maps to a displayed column.
///
/// # Example
///
/// ```
/// use dashboard_lib::model::{Row, Value};
/// use dashboard_lib::view::{Align, ColumnDescriptor, DisplayValue};
///
/// let coins = ColumnDescriptor::<Row>::new("coins", "Coins")
///     .align(Align::Right)
///     .render(|value: Option<&Value>, _row: &Row| {
///         DisplayValue::text(format!("{} coins", value.map(ToString::to_string).unwrap_or_default()))
///     });
/// let actions = ColumnDescriptor::<Row>::new("actions", "Actions").sortable(false);
///
/// let row = Row::new().set("coins", 20);
/// assert_eq!(coins.cell(&row).as_str(), "20 coins");
/// assert!(!actions.is_sortable());
/// ```
pub struct ColumnDescriptor<R = Row> {
    key: String,
    title: String,
    sortable: bool,
    align: Align,
    width: Option<u16>,
    renderer: Arc<dyn Renderer<R>>,
}

impl<R> ColumnDescriptor<R> {
    /// Creates a sortable, left-aligned column that shows the raw value.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: true,
            align: Align::Left,
            width: None,
            renderer: Arc::new(PassThrough),
        }
    }

    /// Sets whether clicking the header may sort by this column.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets the cell alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Sets a preferred width in characters.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the renderer used for this column's cells.
    pub fn render(mut self, renderer: impl Renderer<R> + 'static) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }

    /// Sets a shared renderer.
    pub fn render_shared(mut self, renderer: Arc<dyn Renderer<R>>) -> Self {
        self.renderer = renderer;
        self
    }

    /// The row field this column reads.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The header label.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns `true` if this column can trigger sorting.
    pub fn is_sortable(&self) -> bool {
        self.sortable && self.is_usable()
    }

    /// The cell alignment.
    pub fn alignment(&self) -> Align {
        self.align
    }

    /// The preferred width, if one was set.
    pub fn preferred_width(&self) -> Option<u16> {
        self.width
    }

    /// Returns `false` when the key is blank.
    ///
    /// Such a column is still drawn but never searched or sorted on.
    pub fn is_usable(&self) -> bool {
        !self.key.trim().is_empty()
    }
}

impl<R: FieldSource> ColumnDescriptor<R> {
    /// Renders this column's cell for `row`.
    pub fn cell(&self, row: &R) -> DisplayValue {
        let value = if self.is_usable() {
            row.field(&self.key)
        } else {
            None
        };
        self.renderer.present(value, row)
    }
}

impl<R> Clone for ColumnDescriptor<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            sortable: self.sortable,
            align: self.align,
            width: self.width,
            renderer: Arc::clone(&self.renderer),
        }
    }
}

impl<R> fmt::Debug for ColumnDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_through() {
        let column = ColumnDescriptor::<Row>::new("name", "Name");
        assert_eq!(column.cell(&Row::new().set("name", "amy")), DisplayValue::text("amy"));
        assert_eq!(column.cell(&Row::new().set("name", Value::Null)), DisplayValue::Empty);
        assert_eq!(column.cell(&Row::new()), DisplayValue::Empty);
    }

    #[test]
    fn test_renderer_sees_row() {
        let column = ColumnDescriptor::<Row>::new("name", "User").render(|value: Option<&Value>, row: &Row| {
            let email = row.get("email").map(ToString::to_string).unwrap_or_default();
            DisplayValue::text(format!("{} <{}>", value.map(ToString::to_string).unwrap_or_default(), email))
        });
        let row = Row::new().set("name", "Amy").set("email", "amy@example.com");
        assert_eq!(column.cell(&row).as_str(), "Amy <amy@example.com>");
    }

    #[test]
    fn test_blank_key_is_unusable() {
        let column = ColumnDescriptor::<Row>::new("  ", "Actions");
        assert!(!column.is_usable());
        assert!(!column.is_sortable());
        assert_eq!(column.cell(&Row::new().set("  ", "x")), DisplayValue::Empty);
    }

    #[test]
    fn test_align_pad() {
        assert_eq!(Align::Left.pad("ab", 5), "ab   ");
        assert_eq!(Align::Right.pad("ab", 5), "   ab");
        assert_eq!(Align::Center.pad("ab", 5), " ab  ");
        assert_eq!(Align::Right.pad("abcdef", 3), "abcdef");
    }
}
