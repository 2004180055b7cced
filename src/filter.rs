//! Matching core for the dialog filter box.
//!
//! A filter box sits above either a flat list or a table of rows with
//! checkboxes. Typing narrows the visible entries by case-insensitive
//! substring match; a count badge reports how many are selected. The DOM
//! wiring lives in [`crate::ui`]; this module is the pure part.

use std::fmt;

/// One filterable entry: a flat list item or a row of cell texts.
///
/// For rows, the caller passes the text of each data cell and leaves out
/// cells that hold the row's checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEntry {
    /// A flat list item with a single text.
    List(String),
    /// A table row; any one matching cell keeps the row visible.
    Row(Vec<String>),
}

impl FilterEntry {
    /// Whether this entry survives the query.
    ///
    /// The empty query matches everything; otherwise the match is a
    /// case-insensitive substring test.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        match self {
            Self::List(text) => text.to_lowercase().contains(&query),
            Self::Row(cells) => cells.iter().any(|c| c.to_lowercase().contains(&query)),
        }
    }
}

/// Visibility mask for a list of entries under a query.
#[must_use]
pub fn apply_query(entries: &[FilterEntry], query: &str) -> Vec<bool> {
    entries.iter().map(|e| e.matches(query)).collect()
}

/// Checked-vs-total tally shown next to the filter box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectedCount {
    pub checked: usize,
    pub total: usize,
}

impl SelectedCount {
    #[must_use]
    pub fn new(checked: usize, total: usize) -> Self {
        SelectedCount { checked, total }
    }
}

impl fmt::Display for SelectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} Selected", self.checked, self.total)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> FilterEntry {
        FilterEntry::Row(cells.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert!(FilterEntry::List("anything".to_string()).matches(""));
        assert!(row(&["a", "b"]).matches(""));
    }

    #[test]
    fn test_list_entry_case_insensitive() {
        let entry = FilterEntry::List("Pricing Rules".to_string());
        assert!(entry.matches("pricing"));
        assert!(entry.matches("RULES"));
        assert!(!entry.matches("shipping"));
    }

    #[test]
    fn test_row_matches_any_cell() {
        let entry = row(&["states", "OH, TX", "2024-01-01"]);
        assert!(entry.matches("tx"));
        assert!(entry.matches("2024"));
        assert!(!entry.matches("ca"));
    }

    #[test]
    fn test_apply_query_mask() {
        let entries = vec![
            FilterEntry::List("alpha".to_string()),
            FilterEntry::List("beta".to_string()),
            row(&["gamma", "alphabet"]),
        ];
        assert_eq!(apply_query(&entries, "alpha"), vec![true, false, true]);
        assert_eq!(apply_query(&entries, ""), vec![true, true, true]);
    }

    #[test]
    fn test_selected_count_text() {
        assert_eq!(SelectedCount::new(3, 10).to_string(), "3 of 10 Selected");
        assert_eq!(SelectedCount::default().to_string(), "0 of 0 Selected");
    }
}
