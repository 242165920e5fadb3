//! Interactive table state

use std::fmt;

use super::{compute, ColumnDescriptor, DerivedView, Pagination, SortConfig, ViewOptions};
use crate::model::FieldSource;

/// "Showing X to Y of Z results" footer numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSummary {
    /// 1-based index of the first visible row.
    pub first: usize,
    /// 1-based index of the last visible row.
    pub last: usize,
    /// Rows after filtering.
    pub total: usize,
}

impl fmt::Display for RangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} to {} of {} results", self.first, self.last, self.total)
    }
}

/// Why a table page has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The source has no rows at all.
    NoData,
    /// The search term filtered everything out.
    NoMatches,
    /// There are results, just not on this page.
    PageOutOfRange,
}

impl EmptyState {
    /// Built-in message for this state.
    pub fn default_message(self) -> &'static str {
        match self {
            EmptyState::NoData => "No data found",
            EmptyState::NoMatches => "No matching results",
            EmptyState::PageOutOfRange => "No rows on this page",
        }
    }
}

/// Search, sort and page state for one table.
///
/// Changing the search term, the sort or the page size sends the user back to
/// page 1. Paging helpers take the current `total_pages` from the last view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    search: String,
    sort: SortConfig,
    page: usize,
    page_size: usize,
    options: ViewOptions,
    empty_message: String,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(Pagination::DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    /// Creates state on page 1 with the given page size.
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            sort: SortConfig::none(),
            page: 1,
            page_size: page_size.max(1),
            options: ViewOptions::default(),
            empty_message: EmptyState::NoData.default_message().to_string(),
        }
    }

    /// Sets which pipeline stages run.
    pub fn with_options(mut self, options: ViewOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the message shown when the source has no rows.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Sets the initial sort without touching the page.
    pub fn with_sort(mut self, sort: SortConfig) -> Self {
        self.sort = sort;
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> &SortConfig {
        &self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// The current page request.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size)
    }

    /// Replaces the search term and returns to page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Replaces the sort; returns to page 1 if it changed.
    pub fn set_sort(&mut self, sort: SortConfig) {
        if sort != self.sort {
            self.sort = sort;
            self.page = 1;
        }
    }

    /// Activates a column header. Returns `true` if the sort changed.
    ///
    /// Does nothing when sorting is disabled or the column is not sortable.
    pub fn toggle_sort<R>(&mut self, column: &ColumnDescriptor<R>) -> bool {
        if !self.options.sortable {
            return false;
        }
        let next = self.sort.toggled(column);
        if next == self.sort {
            return false;
        }
        self.sort = next;
        self.page = 1;
        true
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Jumps to a page. Zero becomes 1; larger values are not clamped.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn first_page(&mut self) {
        self.page = 1;
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    pub fn last_page(&mut self, total_pages: usize) {
        self.page = total_pages.max(1);
    }

    /// Pulls the page back into range after the row count shrank.
    ///
    /// Returns `true` if the page moved.
    pub fn clamp_page(&mut self, total_pages: usize) -> bool {
        let clamped = self.page.min(total_pages.max(1));
        let moved = clamped != self.page;
        self.page = clamped;
        moved
    }

    /// Runs the pipeline over `rows` with the current state.
    pub fn view<'a, R: FieldSource>(
        &self,
        rows: &'a [R],
        columns: &[ColumnDescriptor<R>],
    ) -> DerivedView<'a, R> {
        compute(
            rows,
            columns,
            &self.search,
            &self.sort,
            self.pagination(),
            &self.options,
        )
    }

    /// Footer numbers for `view`.
    ///
    /// `None` when nothing is visible or pagination is off.
    pub fn range_summary<R>(&self, view: &DerivedView<'_, R>) -> Option<RangeSummary> {
        if view.is_empty() || !self.options.paginated {
            return None;
        }
        let first = self.pagination().offset() + 1;
        Some(RangeSummary {
            first,
            last: first + view.len() - 1,
            total: view.filtered_count,
        })
    }

    /// Classifies an empty page. `total_rows` is the unfiltered row count.
    pub fn empty_state<R>(&self, total_rows: usize, view: &DerivedView<'_, R>) -> Option<EmptyState> {
        if !view.is_empty() {
            None
        } else if total_rows == 0 {
            Some(EmptyState::NoData)
        } else if view.filtered_count == 0 {
            Some(EmptyState::NoMatches)
        } else {
            Some(EmptyState::PageOutOfRange)
        }
    }

    /// The text to show for `state`, using the configured no-data message.
    pub fn empty_message(&self, state: EmptyState) -> &str {
        match state {
            EmptyState::NoData => &self.empty_message,
            other => other.default_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    fn rows(n: i32) -> Vec<Row> {
        (1..=n).map(|i| Row::new().set("n", i).set("name", format!("row {}", i))).collect()
    }

    fn columns() -> Vec<ColumnDescriptor<Row>> {
        vec![ColumnDescriptor::new("n", "N"), ColumnDescriptor::new("name", "Name")]
    }

    #[test]
    fn test_changes_reset_page() {
        let mut state = TableState::new(5);
        state.set_page(3);
        state.set_search("row");
        assert_eq!(state.page(), 1);

        state.set_page(3);
        assert!(state.toggle_sort(&columns()[0]));
        assert_eq!(state.page(), 1);

        state.set_page(3);
        state.set_page_size(20);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_toggle_disabled() {
        let mut state = TableState::default().with_options(ViewOptions {
            sortable: false,
            ..ViewOptions::default()
        });
        state.set_page(2);
        assert!(!state.toggle_sort(&columns()[0]));
        assert_eq!(state.page(), 2);
        assert_eq!(state.sort(), &SortConfig::none());
    }

    #[test]
    fn test_paging() {
        let mut state = TableState::new(5);
        state.previous_page();
        assert_eq!(state.page(), 1);
        state.next_page(3);
        state.next_page(3);
        state.next_page(3);
        assert_eq!(state.page(), 3);
        state.first_page();
        state.last_page(4);
        assert_eq!(state.page(), 4);
        assert!(state.clamp_page(2));
        assert_eq!(state.page(), 2);
        assert!(state.clamp_page(0));
        assert_eq!(state.page(), 1);
        assert!(!state.clamp_page(1));
    }

    #[test]
    fn test_range_summary() {
        let data = rows(12);
        let mut state = TableState::new(5);
        state.set_page(3);
        let view = state.view(&data, &columns());
        let summary = state.range_summary(&view).unwrap();
        assert_eq!(summary, RangeSummary { first: 11, last: 12, total: 12 });
        assert_eq!(summary.to_string(), "Showing 11 to 12 of 12 results");
    }

    #[test]
    fn test_empty_states() {
        let columns = columns();
        let state = TableState::default().with_empty_message("No users yet");

        let none: Vec<Row> = Vec::new();
        let view = state.view(&none, &columns);
        let empty = state.empty_state(none.len(), &view).unwrap();
        assert_eq!(empty, EmptyState::NoData);
        assert_eq!(state.empty_message(empty), "No users yet");

        let data = rows(3);
        let mut state = state;
        state.set_search("zzz");
        let view = state.view(&data, &columns);
        assert_eq!(state.empty_state(data.len(), &view), Some(EmptyState::NoMatches));

        state.set_search("");
        state.set_page(4);
        let view = state.view(&data, &columns);
        let empty = state.empty_state(data.len(), &view).unwrap();
        assert_eq!(empty, EmptyState::PageOutOfRange);
        assert_eq!(state.empty_message(empty), "No rows on this page");
    }
}
