//! Loading instances from text files and rendering the packed items.
//!
//! # Input formats
//!
//! - **Items**: one `<weight>,<value>` record per line, base-10 integers.
//!   Whitespace around each field is ignored. Every line is a record, so a
//!   blank line is malformed. Line order defines item order.
//! - **Capacity**: the first line of the source, a single base-10 integer.
//!
//! Any malformed record aborts loading; there are no partial results.

use super::model::{Item, Knapsack};
use crate::error::{Error, Result};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parses item records.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::knapsack::io::parse_items;
/// use knapsack_metaheur::knapsack::Item;
///
/// let items = parse_items("2,3\n3,4\n").unwrap();
/// assert_eq!(items, vec![Item::new(2, 3), Item::new(3, 4)]);
/// ```
pub fn parse_items(text: &str) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let mut fields = raw.split(',');
        let (Some(weight), Some(value), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(Error::MalformedItem {
                line,
                content: raw.to_string(),
            });
        };

        items.push(Item::new(
            parse_field(line, weight)?,
            parse_field(line, value)?,
        ));
    }
    Ok(items)
}

/// Parses the capacity from the first line of `text`.
pub fn parse_capacity(text: &str) -> Result<u64> {
    let first = text.lines().next().ok_or(Error::MissingCapacity)?;
    parse_field(1, first)
}

fn parse_field(line: usize, field: &str) -> Result<u64> {
    let field = field.trim();
    field
        .parse()
        .map_err(|source| Error::invalid_integer(line, field, source))
}

/// Reads and parses an items file.
pub fn load_items(path: impl AsRef<Path>) -> Result<Vec<Item>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let items = parse_items(&text)?;
    debug!(path = %path.display(), items = items.len(), "items loaded");
    Ok(items)
}

/// Reads and parses a capacity file.
pub fn load_capacity(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let capacity = parse_capacity(&text)?;
    debug!(path = %path.display(), capacity, "capacity loaded");
    Ok(capacity)
}

/// Human-readable listing of the packed items.
///
/// A header line, then one line per packed item in ascending index order
/// with its 1-based number, weight and value.
///
/// ```
/// use knapsack_metaheur::knapsack::{io::SelectionReport, Item, Knapsack};
///
/// let knapsack = Knapsack::new(vec![Item::new(2, 3), Item::new(3, 4)], 5);
/// let report = SelectionReport::new(&knapsack, &[false, true]).to_string();
/// assert_eq!(report, "Selected items:\nItem 2: Weight = 3, Value = 4\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SelectionReport<'a> {
    knapsack: &'a Knapsack,
    solution: &'a [bool],
}

impl<'a> SelectionReport<'a> {
    /// # Panics
    /// Panics if `solution.len()` differs from the item count.
    pub fn new(knapsack: &'a Knapsack, solution: &'a [bool]) -> Self {
        assert_eq!(
            solution.len(),
            knapsack.len(),
            "solution length must equal the item count"
        );
        Self { knapsack, solution }
    }
}

impl fmt::Display for SelectionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Selected items:")?;
        for (i, item) in self.knapsack.selected(self.solution) {
            writeln!(
                f,
                "Item {}: Weight = {}, Value = {}",
                i + 1,
                item.weight,
                item.value
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_in_order() {
        let items = parse_items("2,3\n3,4\n4,5\n5,6").unwrap();
        assert_eq!(
            items,
            vec![
                Item::new(2, 3),
                Item::new(3, 4),
                Item::new(4, 5),
                Item::new(5, 6)
            ]
        );
    }

    #[test]
    fn test_parse_items_tolerates_crlf_and_spaces() {
        let items = parse_items("2, 3\r\n 10 ,60\r\n").unwrap();
        assert_eq!(items, vec![Item::new(2, 3), Item::new(10, 60)]);
    }

    #[test]
    fn test_parse_items_blank_line_is_malformed() {
        let err = parse_items("2,3\n\n4,5\n").unwrap_err();
        assert!(matches!(err, Error::MalformedItem { line: 2, .. }), "{err}");

        let err = parse_items("2,3\r\n   \r\n4,5").unwrap_err();
        assert!(matches!(err, Error::MalformedItem { line: 2, .. }), "{err}");
    }

    #[test]
    fn test_parse_items_trailing_newline_is_not_a_record() {
        assert_eq!(parse_items("2,3\n").unwrap(), vec![Item::new(2, 3)]);
        assert!(parse_items("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_items_missing_comma() {
        let err = parse_items("2,3\n45\n").unwrap_err();
        assert!(matches!(err, Error::MalformedItem { line: 2, .. }), "{err}");
    }

    #[test]
    fn test_parse_items_extra_field() {
        let err = parse_items("1,2,3\n").unwrap_err();
        assert!(matches!(err, Error::MalformedItem { line: 1, .. }), "{err}");
    }

    #[test]
    fn test_parse_items_non_numeric() {
        let err = parse_items("2,3\n4,five\n").unwrap_err();
        match err {
            Error::InvalidInteger { line, field, .. } => {
                assert_eq!(line, 2);
                assert_eq!(field, "five");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_items_rejects_negative() {
        assert!(parse_items("-1,3\n").is_err());
    }

    #[test]
    fn test_parse_capacity_first_line_only() {
        assert_eq!(parse_capacity("5").unwrap(), 5);
        assert_eq!(parse_capacity("15\n99\n").unwrap(), 15);
        assert_eq!(parse_capacity(" 7 \r\n").unwrap(), 7);
    }

    #[test]
    fn test_parse_capacity_errors() {
        assert!(matches!(parse_capacity(""), Err(Error::MissingCapacity)));
        assert!(matches!(
            parse_capacity("abc"),
            Err(Error::InvalidInteger { line: 1, .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_items("definitely/not/here/items.txt").unwrap_err();
        match err {
            Error::Io { path, .. } => assert!(path.ends_with("items.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_files() {
        let dir = std::env::temp_dir().join(format!("knapsack-io-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let items_path = dir.join("items.txt");
        let capacity_path = dir.join("capacity.txt");
        fs::write(&items_path, "2,3\n3,4\n4,5\n5,6\n").unwrap();
        fs::write(&capacity_path, "5").unwrap();

        let items = load_items(&items_path).unwrap();
        let capacity = load_capacity(&capacity_path).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(items.len(), 4);
        assert_eq!(capacity, 5);
    }

    #[test]
    fn test_report_lists_selected_items() {
        let knapsack = Knapsack::new(
            vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5)],
            5,
        );
        let report = SelectionReport::new(&knapsack, &[true, true, false]).to_string();
        assert_eq!(
            report,
            "Selected items:\nItem 1: Weight = 2, Value = 3\nItem 2: Weight = 3, Value = 4\n"
        );
    }

    #[test]
    fn test_report_empty_selection_is_header_only() {
        let knapsack = Knapsack::new(vec![Item::new(1, 1)], 5);
        let report = SelectionReport::new(&knapsack, &[false]).to_string();
        assert_eq!(report, "Selected items:\n");
    }
}
