//! Spreadsheet clipboard codec: tab/newline-delimited cell grids.
//!
//! [`parse`] turns the text a spreadsheet application puts on the clipboard
//! (tabs between cells, newlines between rows, quoted multi-line cells with
//! doubled internal quotes) back into a 2D grid of strings. [`stringify`] is
//! the companion serializer producing text that LibreOffice, Google Sheets,
//! and Excel all accept on paste.

/// State of the scan with respect to a quoted cell spanning physical lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    /// No quoted cell is open; the next fragment starts a fresh cell.
    Closed,
    /// The last cell of the last row is still open; the next line's first
    /// fragment continues it.
    OpenMultilineCell,
}

/// Number of double-quote characters in a cell fragment.
///
/// Odd parity means exactly one quote is unterminated, i.e. the quoted
/// region continues past this fragment.
fn count_quotes(fragment: &str) -> usize {
    fragment.matches('"').count()
}

/// Collapse doubled quotes to single quotes, left to right.
fn unescape_quotes(fragment: &str) -> String {
    fragment.replace("\"\"", "\"")
}

/// Parse clipboard text into rows of cells.
///
/// Never fails: malformed quoting degrades gracefully. An opened quote that
/// never closes before end of input leaves the final cell with its
/// accumulated fragments (embedded newlines included) and the stray quote
/// intact, with no unescaping applied.
///
/// `parse("")` yields a single row holding a single empty cell; a lone
/// trailing newline does not produce a trailing empty row.
#[must_use]
pub fn parse(text: &str) -> Vec<Vec<String>> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
        let _ = lines.pop();
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut state = QuoteState::Closed;
    // Output row cursor; only advances past a row once its quoting is closed.
    let mut current = 0usize;

    for line in lines {
        let fragments: Vec<&str> = line.split('\t').collect();
        let last_col = fragments.len() - 1;
        for (col, fragment) in fragments.iter().enumerate() {
            if rows.len() == current {
                rows.push(Vec::new());
            }

            if state == QuoteState::OpenMultilineCell && col == 0 {
                // Continuation of the still-open cell from the previous line.
                let Some(cell) = rows.last_mut().and_then(|row| row.last_mut()) else {
                    continue;
                };
                cell.push('\n');
                cell.push_str(fragment);
                if count_quotes(fragment) % 2 == 1 {
                    state = QuoteState::Closed;
                    let _ = cell.pop();
                    *cell = unescape_quotes(cell);
                }
            } else if col == last_col
                && fragment.starts_with('"')
                && count_quotes(fragment) % 2 == 1
            {
                // Line ends inside a quoted cell; the following newline
                // belongs to the cell, not to the grid.
                if let Some(row) = rows.last_mut() {
                    row.push(unescape_quotes(fragment.get(1..).unwrap_or_default()));
                }
                state = QuoteState::OpenMultilineCell;
            } else {
                if let Some(row) = rows.last_mut() {
                    row.push(unescape_quotes(fragment));
                }
                state = QuoteState::Closed;
            }
        }
        if state == QuoteState::Closed {
            current += 1;
        }
    }

    rows
}

/// Serialize rows of cells into clipboard text.
///
/// Cells are joined with tabs and every row ends with a newline. A cell
/// containing a newline is wrapped in double quotes with its internal quotes
/// doubled, which is exactly the form [`parse`] reassembles.
#[must_use]
pub fn stringify(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            if col > 0 {
                out.push('\t');
            }
            if cell.contains('\n') {
                out.push('"');
                out.push_str(&cell.replace('"', "\"\""));
                out.push('"');
            } else {
                out.push_str(cell);
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn grid(cells: &[&[&str]]) -> Vec<Vec<String>> {
        cells
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse(""), grid(&[&[""]]));
    }

    #[test]
    fn test_parse_single_row() {
        assert_eq!(parse("a\tb\tc"), grid(&[&["a", "b", "c"]]));
    }

    #[test]
    fn test_parse_trailing_newline_dropped() {
        assert_eq!(parse("a\tb\nc\td\n"), grid(&[&["a", "b"], &["c", "d"]]));
        assert_eq!(parse("a\tb\nc\td"), grid(&[&["a", "b"], &["c", "d"]]));
    }

    #[test]
    fn test_parse_lone_newline() {
        // One line of content plus the trailing newline: the empty tail is
        // stripped, leaving a single empty cell.
        assert_eq!(parse("\n"), grid(&[&[""]]));
    }

    #[test]
    fn test_parse_multiline_cell() {
        assert_eq!(
            parse("\"hello\nworld\"\tb"),
            grid(&[&["hello\nworld", "b"]])
        );
    }

    #[test]
    fn test_parse_multiline_cell_spanning_three_lines() {
        assert_eq!(
            parse("\"one\ntwo\nthree\"\tx"),
            grid(&[&["one\ntwo\nthree", "x"]])
        );
    }

    #[test]
    fn test_parse_doubled_quotes_unescape() {
        assert_eq!(
            parse("she said \"\"hi\"\"\tb"),
            grid(&[&["she said \"hi\"", "b"]])
        );
    }

    #[test]
    fn test_parse_quoted_cell_with_escaped_quotes_and_newline() {
        // Open fragment is unescaped when the cell opens, and the whole
        // accumulated value gets the doubled-quote pass again on close.
        assert_eq!(
            parse("\"say \"\"hi\"\"\nok\""),
            grid(&[&["say \"hi\"\nok"]])
        );
    }

    #[test]
    fn test_parse_quoted_single_line_cell_keeps_wrapping_quotes() {
        // Quote stripping only happens through the multiline path; a fully
        // quoted cell on one line keeps its outer quotes (minus the doubling).
        assert_eq!(
            parse("\"she said \"\"hi\"\"\"\tb"),
            grid(&[&["\"she said \"hi\"\"", "b"]])
        );
    }

    #[test]
    fn test_parse_unterminated_quote_at_eof() {
        // The open cell keeps accumulating and is never unescaped.
        assert_eq!(
            parse("\"left open\nmore \"\" text"),
            grid(&[&["left open\nmore \"\" text"]])
        );
    }

    #[test]
    fn test_parse_tab_inside_open_cell_starts_new_cells() {
        // A tab on a continuation line closes nothing; columns after the
        // first go through the normal path as fresh cells.
        assert_eq!(
            parse("\"open\nstill open\there"),
            grid(&[&["open\nstill open", "here"]])
        );
    }

    #[test]
    fn test_parse_multiline_cells_in_consecutive_rows() {
        let text = "\"a\nb\"\t1\n\"c\nd\"\t2";
        assert_eq!(parse(text), grid(&[&["a\nb", "1"], &["c\nd", "2"]]));
    }

    #[test]
    fn test_parse_empty_cells_preserved() {
        assert_eq!(parse("a\t\tb\n\t\t"), grid(&[&["a", "", "b"], &["", "", ""]]));
    }

    #[test]
    fn test_parse_is_pure() {
        let text = "a\tb\n\"c\nd\"\te";
        assert_eq!(parse(text), parse(text));
    }

    #[test]
    fn test_stringify_plain_grid() {
        assert_eq!(
            stringify(&grid(&[&["a", "b"], &["c", "d"]])),
            "a\tb\nc\td\n"
        );
    }

    #[test]
    fn test_stringify_quotes_multiline_cells_only() {
        assert_eq!(
            stringify(&grid(&[&["a\nb", "say \"hi\""]])),
            "\"a\nb\"\tsay \"hi\"\n"
        );
    }

    #[test]
    fn test_round_trip_plain() {
        let table = grid(&[&["a", "b", "c"], &["d", "e", "f"]]);
        assert_eq!(parse(&stringify(&table)), table);
    }

    #[test]
    fn test_round_trip_multiline_and_quotes() {
        let table = grid(&[&["x\ny", "plain"], &["say \"hi\"\nok", "z"]]);
        assert_eq!(parse(&stringify(&table)), table);
    }
}
