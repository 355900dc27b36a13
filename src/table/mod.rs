//! In-memory table of device models and the column references used to read it

pub mod columns;
pub mod loader;

use anyhow::Result;

pub use columns::{DetectedColumns, detect_columns};
pub use loader::{list_sheets, load_table};

/// A column that is known to exist in a specific table.
///
/// Only [`Table::column`] hands these out, so holding one means the name was
/// validated against the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    index: usize,
    name: String,
}

impl ColumnRef {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Loaded sheet: normalized headers plus rows in file order.
///
/// Empty cells are stored as `None`.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Build a table from raw headers and rows. Headers are normalized and
    /// empty cells become `None`; whitespace-only cells are kept as text.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let headers = headers.iter().map(|h| normalize_header(h)).collect();
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.filter(|value| !value.is_empty()))
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve a column by name. The lookup normalizes `name` the same way
    /// headers are normalized, so `" Model  Name"` finds `"model name"`.
    pub fn column(&self, name: &str) -> Result<ColumnRef> {
        let wanted = normalize_header(name);

        if let Some(index) = self.headers.iter().position(|h| *h == wanted) {
            return Ok(ColumnRef {
                index,
                name: wanted,
            });
        }

        match columns::closest_header(&wanted, &self.headers) {
            Some(suggestion) => anyhow::bail!(
                "Column '{}' not found. Did you mean '{}'? Available columns: {}",
                name,
                suggestion,
                self.headers.join(", ")
            ),
            None => anyhow::bail!(
                "Column '{}' not found. Available columns: {}",
                name,
                self.headers.join(", ")
            ),
        }
    }

    /// Reference for the column at `index`, if the table has one.
    pub fn column_at(&self, index: usize) -> Option<ColumnRef> {
        self.headers.get(index).map(|name| ColumnRef {
            index,
            name: name.clone(),
        })
    }

    pub fn cell(&self, row: usize, column: &ColumnRef) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column.index))
            .and_then(|cell| cell.as_deref())
    }

    /// Iterate rows projected onto the two given columns, in table order.
    pub fn project<'a>(
        &'a self,
        first: &'a ColumnRef,
        second: &'a ColumnRef,
    ) -> impl Iterator<Item = (Option<&'a str>, Option<&'a str>)> + 'a {
        (0..self.rows.len()).map(move |row| (self.cell(row, first), self.cell(row, second)))
    }

    /// First `limit` rows projected onto the two given columns.
    pub fn preview(
        &self,
        first: &ColumnRef,
        second: &ColumnRef,
        limit: usize,
    ) -> Vec<(Option<String>, Option<String>)> {
        self.project(first, second)
            .take(limit)
            .map(|(a, b)| (a.map(str::to_string), b.map(str::to_string)))
            .collect()
    }
}

/// Trim, lowercase and collapse inner whitespace of a header cell.
pub fn normalize_header(header: &str) -> String {
    header
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
