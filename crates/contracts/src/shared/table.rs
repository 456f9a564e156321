//! Table body model.
//!
//! A record sequence is turned into a complete list of rows on every change.
//! Each row carries its record key so a click on the row resolves back to a
//! record without relying on the row position.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Record { key: String, cells: Vec<String> },
    /// Single "no records" row spanning every column.
    Placeholder { colspan: usize, message: String },
}

impl TableRow {
    pub fn key(&self) -> Option<&str> {
        match self {
            TableRow::Record { key, .. } => Some(key),
            TableRow::Placeholder { .. } => None,
        }
    }
}

/// Record kinds that can be shown in a table.
pub trait Tabular {
    /// All columns, including a trailing actions column when the table has one.
    fn columns() -> &'static [ColumnDef];

    /// Message of the placeholder row for an empty view.
    fn empty_message() -> &'static str;

    /// Identifier attached to the row.
    fn row_key(&self) -> String;

    /// Text of the data cells. Action cells are rendered by the page.
    fn cells(&self) -> Vec<String>;

    /// Display order. Input order unless a kind overrides it.
    fn sort_for_display(_records: &mut Vec<&Self>) {}
}

/// Rebuild the full table body for `records`.
pub fn render_rows<T: Tabular>(records: &[T]) -> Vec<TableRow> {
    if records.is_empty() {
        return vec![TableRow::Placeholder {
            colspan: T::columns().len(),
            message: T::empty_message().to_string(),
        }];
    }

    let mut ordered: Vec<&T> = records.iter().collect();
    T::sort_for_display(&mut ordered);
    ordered
        .into_iter()
        .map(|record| TableRow::Record {
            key: record.row_key(),
            cells: record.cells(),
        })
        .collect()
}

/// Text shown for an empty optional value.
pub fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

pub fn or_na(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(&'static str, u32);

    impl Tabular for Pair {
        fn columns() -> &'static [ColumnDef] {
            &[
                ColumnDef { key: "name", title: "Name" },
                ColumnDef { key: "n", title: "N" },
                ColumnDef { key: "actions", title: "Actions" },
            ]
        }

        fn empty_message() -> &'static str {
            "Nothing here."
        }

        fn row_key(&self) -> String {
            self.0.to_string()
        }

        fn cells(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_row_count_matches_input() {
        let rows = render_rows(&[Pair("a", 1), Pair("b", 2)]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].key(), Some("b"));
    }

    #[test]
    fn test_empty_renders_single_placeholder() {
        let rows = render_rows::<Pair>(&[]);
        assert_eq!(
            rows,
            vec![TableRow::Placeholder {
                colspan: 3,
                message: "Nothing here.".to_string()
            }]
        );
        assert_eq!(rows[0].key(), None);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let data = [Pair("a", 1), Pair("b", 2)];
        assert_eq!(render_rows(&data), render_rows(&data));
    }

    #[test]
    fn test_fallback_text() {
        assert_eq!(or_dash(""), "-");
        assert_eq!(or_na(""), "N/A");
        assert_eq!(or_na("x"), "x");
    }
}
