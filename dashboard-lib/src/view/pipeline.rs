//! Filter, sort, paginate.

use super::sort::stable_sort_by;
use super::{compare_values, ColumnDescriptor, RowMatcher, SearchMode, SortConfig};
use crate::model::FieldSource;

/// Which stages of the pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Apply the search term.
    pub searchable: bool,
    /// Apply the sort config.
    pub sortable: bool,
    /// Cut the result into pages.
    pub paginated: bool,
    /// How the search term matches.
    pub search_mode: SearchMode,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            searchable: true,
            sortable: true,
            paginated: true,
            search_mode: SearchMode::Substring,
        }
    }
}

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_number: usize,
    page_size: usize,
}

impl Pagination {
    /// Default rows per page.
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// Creates a page request. Zero page numbers and sizes become 1.
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.max(1),
        }
    }

    /// The first page of the given size.
    pub fn first(page_size: usize) -> Self {
        Self::new(1, page_size)
    }

    /// The 1-based page number.
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the page's first row in the filtered sequence.
    pub fn offset(&self) -> usize {
        (self.page_number - 1).saturating_mul(self.page_size)
    }

    /// Number of pages needed for `count` rows; at least 1.
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size).max(1)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::first(Self::DEFAULT_PAGE_SIZE)
    }
}

/// The visible slice of a table plus what the footer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<'a, R> {
    /// Rows on the current page, in display order.
    pub visible_rows: Vec<&'a R>,
    /// Rows that survived the search filter.
    pub filtered_count: usize,
    /// Pages in the filtered sequence; at least 1.
    pub total_pages: usize,
}

impl<'a, R> DerivedView<'a, R> {
    /// Returns `true` when the current page shows nothing.
    pub fn is_empty(&self) -> bool {
        self.visible_rows.is_empty()
    }

    /// Number of rows on the current page.
    pub fn len(&self) -> usize {
        self.visible_rows.len()
    }

    /// Iterates over the visible rows.
    pub fn rows(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.visible_rows.iter().copied()
    }
}

/// Derives the visible rows of a table.
///
/// Rows are filtered by `search_term` over the usable columns, stably sorted by
/// `sort`, then cut to the requested page. Each stage is skipped when `options`
/// disables it. The input is never modified, and a page past the end yields no
/// rows rather than being clamped.
///
/// # Example
///
/// ```
/// use dashboard_lib::model::Row;
/// use dashboard_lib::view::{compute, ColumnDescriptor, Pagination, SortConfig, ViewOptions};
///
/// let rows: Vec<Row> = (1..=12).map(|n| Row::new().set("n", n)).collect();
/// let columns = vec![ColumnDescriptor::new("n", "N")];
///
/// let view = compute(
///     &rows,
///     &columns,
///     "",
///     &SortConfig::desc("n"),
///     Pagination::new(2, 5),
///     &ViewOptions::default(),
/// );
/// assert_eq!(view.filtered_count, 12);
/// assert_eq!(view.total_pages, 3);
/// assert_eq!(view.visible_rows[0].get_int("n").unwrap(), Some(7));
/// ```
pub fn compute<'a, R: FieldSource>(
    rows: &'a [R],
    columns: &[ColumnDescriptor<R>],
    search_term: &str,
    sort: &SortConfig,
    pagination: Pagination,
    options: &ViewOptions,
) -> DerivedView<'a, R> {
    let matcher = if options.searchable {
        RowMatcher::new(search_term, options.search_mode)
    } else {
        None
    };

    let mut matched: Vec<&'a R> = match matcher {
        Some(mut matcher) => rows
            .iter()
            .filter(|row| matcher.matches_row(*row, columns))
            .collect(),
        None => rows.iter().collect(),
    };

    if options.sortable {
        if let Some(key) = sort.active_key() {
            stable_sort_by(&mut matched, |a, b| {
                compare_values(a.field(key), b.field(key), sort.direction)
            });
        }
    }

    let filtered_count = matched.len();
    if !options.paginated {
        return DerivedView {
            visible_rows: matched,
            filtered_count,
            total_pages: 1,
        };
    }

    let visible_rows = matched
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.page_size())
        .collect();

    DerivedView {
        visible_rows,
        filtered_count,
        total_pages: pagination.total_pages(filtered_count),
    }
}
