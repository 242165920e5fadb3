//! Row matching for the search box.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use super::ColumnDescriptor;
use crate::model::FieldSource;
use crate::model::Value;

/// How a search term is matched against cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Fuzzy subsequence match. Matching rows keep their source order.
    Fuzzy,
}

struct Fuzzy {
    matcher: Matcher,
    pattern: Pattern,
    buf: Vec<char>,
}

/// Matches rows against one search term.
///
/// A row matches when any usable column holds a present value whose string
/// form matches the term. Only raw values are looked at; renderer output is
/// never searched.
pub struct RowMatcher {
    needle: String,
    fuzzy: Option<Fuzzy>,
}

impl RowMatcher {
    /// Builds a matcher, or `None` when the trimmed term is empty.
    pub fn new(term: &str, mode: SearchMode) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }

        let fuzzy = match mode {
            SearchMode::Substring => None,
            SearchMode::Fuzzy => Some(Fuzzy {
                matcher: Matcher::new(Config::DEFAULT),
                pattern: Pattern::new(term, CaseMatching::Ignore, Normalization::Smart, AtomKind::Fuzzy),
                buf: Vec::new(),
            }),
        };

        Some(Self {
            needle: term.to_lowercase(),
            fuzzy,
        })
    }

    /// Returns `true` if `value`'s string form matches.
    pub fn matches_value(&mut self, value: &Value) -> bool {
        let text = value.to_search_string();
        match &mut self.fuzzy {
            None => text.to_lowercase().contains(&self.needle),
            Some(fuzzy) => {
                let haystack = Utf32Str::new(&text, &mut fuzzy.buf);
                fuzzy.pattern.score(haystack, &mut fuzzy.matcher).is_some()
            }
        }
    }

    /// Returns `true` if any searchable cell of `row` matches.
    pub fn matches_row<R: FieldSource>(&mut self, row: &R, columns: &[ColumnDescriptor<R>]) -> bool {
        columns
            .iter()
            .filter(|column| column.is_usable())
            .filter_map(|column| row.present(column.key()))
            .any(|value| self.matches_value(value))
    }
}
