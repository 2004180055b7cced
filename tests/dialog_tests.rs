//! Tests for the dialog helpers: filter-box matching and drag constraints.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use gridclip::drag::{DragLimits, DragTracker};
use gridclip::filter::{apply_query, FilterEntry, SelectedCount};

// ============================================================================
// Filter box
// ============================================================================

mod filtering {
    use super::*;

    fn entries() -> Vec<FilterEntry> {
        vec![
            FilterEntry::List("Ohio auto rates".to_string()),
            FilterEntry::List("Texas auto rates".to_string()),
            FilterEntry::Row(vec!["claims".to_string(), "Ohio".to_string()]),
            FilterEntry::Row(vec!["claims".to_string(), "Indiana".to_string()]),
        ]
    }

    #[test]
    fn test_query_narrows_both_shapes() {
        assert_eq!(
            apply_query(&entries(), "ohio"),
            vec![true, false, true, false]
        );
    }

    #[test]
    fn test_clearing_query_shows_everything() {
        assert_eq!(apply_query(&entries(), ""), vec![true; 4]);
    }

    #[test]
    fn test_query_matching_no_entries_hides_all() {
        assert_eq!(apply_query(&entries(), "zebra"), vec![false; 4]);
    }

    #[test]
    fn test_count_badge_matches_selection() {
        let visible = apply_query(&entries(), "claims");
        let total = visible.iter().filter(|v| **v).count();
        // pretend the user checked one of the two visible rows
        assert_eq!(SelectedCount::new(1, total).to_string(), "1 of 2 Selected");
    }
}

// ============================================================================
// Drag constraints
// ============================================================================

mod dragging {
    use super::*;

    #[test]
    fn test_full_drag_path_clamps_at_edges() {
        let mut tracker = DragTracker::default();
        // drift right in steps; allowed until past max_x, then vetoed
        assert!(tracker.allows(200.0, 100.0));
        assert!(tracker.allows(500.0, 100.0));
        assert!(!tracker.allows(650.0, 100.0));
        // heading back left is allowed immediately
        assert!(tracker.allows(600.0, 100.0));
    }

    #[test]
    fn test_custom_limits() {
        let limits = DragLimits {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 100.0,
            max_y: 100.0,
        };
        let mut tracker = DragTracker::new(limits);
        assert!(tracker.allows(50.0, 50.0));
        assert!(!tracker.allows(120.0, 50.0));
        assert!(!tracker.allows(50.0, -10.0));
    }

    #[test]
    fn test_diagonal_veto_requires_only_one_axis() {
        let mut tracker = DragTracker::default();
        // x is fine, y is past the bottom bound and moving down
        assert!(!tracker.allows(100.0, 500.0));
    }
}
