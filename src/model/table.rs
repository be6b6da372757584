//! Table types.

use serde::{Deserialize, Serialize};

/// Per-column text justification parsed from a table separator line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left-aligned (the default for unspecified or out-of-range columns)
    #[default]
    Left,
    /// Center-aligned (`:---:`)
    Center,
    /// Right-aligned (`---:`)
    Right,
}

impl Alignment {
    /// The CSS `text-align` value for this alignment.
    pub fn css_value(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// A table extracted from a pipe-delimited region of a reply.
///
/// Rows are ragged on purpose: a data row keeps exactly the cells its
/// source line contained, with no padding or truncation against the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Header cells, in order
    pub headers: Vec<String>,

    /// Column alignments parsed from the separator line; may be shorter or
    /// longer than the header
    pub alignments: Vec<Alignment>,

    /// Data rows, each an ordered sequence of cell strings
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with headers and alignments and no data rows.
    pub fn new(headers: Vec<String>, alignments: Vec<Alignment>) -> Self {
        Self {
            headers,
            alignments,
            rows: Vec::new(),
        }
    }

    /// Add a data row.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Alignment for a column index.
    ///
    /// Indices beyond the parsed separator resolve to [`Alignment::Left`];
    /// this is the lookup every rendering site must use, so a ragged or
    /// malformed separator never causes an out-of-bounds access.
    pub fn alignment_for(&self, index: usize) -> Alignment {
        self.alignments.get(index).copied().unwrap_or_default()
    }

    /// Number of header cells.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no header cells and no rows.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Tab-separated plain text, header row first.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        if !self.headers.is_empty() {
            lines.push(self.headers.join("\t"));
        }
        for row in &self.rows {
            lines.push(row.join("\t"));
        }
        lines.join("\n")
    }
}
