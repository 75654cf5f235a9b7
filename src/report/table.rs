//! Plain-text box table

use std::fmt;

use crate::models::{DisplayRow, CALL_TABLE_HEADERS};

/// Fixed-header table; every column is as wide as its widest cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Calls table with the standard header.
    pub fn for_calls(rows: &[DisplayRow]) -> Self {
        let mut table = Self::new(CALL_TABLE_HEADERS);
        for row in rows {
            table.push_row(row.cells());
        }
        table
    }

    /// Short rows are padded with empty cells, long rows are cut.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .map(Into::into)
            .take(self.headers.len())
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| cell_width(&row[i]))
                    .chain(std::iter::once(cell_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}

fn write_border(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    f.write_str("+")?;
    for width in widths {
        write!(f, "{}+", "-".repeat(width + 2))?;
    }
    f.write_str("\n")
}

fn write_row(f: &mut fmt::Formatter<'_>, widths: &[usize], cells: &[String]) -> fmt::Result {
    f.write_str("|")?;
    for (cell, width) in cells.iter().zip(widths) {
        let padding = width - cell_width(cell);
        write!(f, " {}{} |", cell, " ".repeat(padding))?;
    }
    f.write_str("\n")
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        write_border(f, &widths)?;
        write_row(f, &widths, &self.headers)?;
        write_border(f, &widths)?;

        if !self.rows.is_empty() {
            for row in &self.rows {
                write_row(f, &widths, row)?;
            }
            write_border(f, &widths)?;
        }

        Ok(())
    }
}
