//! Table block extraction.
//!
//! Scans raw reply text for contiguous pipe-delimited regions shaped like
//! header / separator / data rows and converts each into a typed
//! [`Table`], before any other transform runs. Text outside the matched
//! regions passes through unchanged for the substitution stages; extracted
//! tables are never re-scanned.

use regex::Regex;

use crate::model::{Alignment, Table};

/// A piece of the source text after table extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// A converted table region
    Table(Table),
    /// Text outside any table region
    Text(String),
}

impl Segment {
    /// Check if this segment is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Segment::Table(_))
    }
}

/// Extracts table-shaped regions from raw reply text.
///
/// Regions are found left-to-right, non-overlapping; matching restarts
/// after each consumed region. Anything that does not match the
/// header/separator/data shape is left as plain text; no error conditions
/// exist.
pub struct TableExtractor {
    region: Regex,
}

impl TableExtractor {
    /// Create a new extractor with the region pattern compiled.
    pub fn new() -> Self {
        Self {
            // A header line bounded by pipes, a separator of only
            // `| - : space`, then one or more pipe-bounded data lines with
            // no intervening blank line. Greedy through the last data line.
            region: Regex::new(r"(?m)^(\|.+\|\r?\n)(\|[-:| ]+\|\r?\n)((?:\|.+\|\r?\n?)+)")
                .unwrap(),
        }
    }

    /// Split `text` into table and text segments, in source order.
    pub fn extract(&self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in self.region.captures_iter(text) {
            let matched = caps.get(0).unwrap();
            if matched.start() > last {
                segments.push(Segment::Text(text[last..matched.start()].to_string()));
            }

            let table = parse_table(&caps[1], &caps[2], &caps[3]);
            log::debug!(
                "extracted table: {} columns, {} rows",
                table.column_count(),
                table.row_count()
            );
            segments.push(Segment::Table(table));
            last = matched.end();
        }

        if last < text.len() {
            segments.push(Segment::Text(text[last..].to_string()));
        }
        segments
    }
}

impl Default for TableExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a [`Table`] from the three captured region parts.
fn parse_table(header: &str, separator: &str, body: &str) -> Table {
    let headers = parse_boundary_cells(header);
    let alignments = parse_alignments(separator);

    let mut table = Table::new(headers, alignments);
    for line in body.trim().split('\n') {
        table.add_row(parse_row_cells(line));
    }
    table
}

/// Header fragments: the boundary pipes produce empty fragments, dropped
/// along with whitespace-only fragments after trimming.
fn parse_boundary_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

/// Separator fragments map colon placement to an alignment: bounded by `:`
/// on both ends is center, on the right only is right, anything else left.
fn parse_alignments(separator: &str) -> Vec<Alignment> {
    separator
        .split('|')
        .map(str::trim)
        .filter(|frag| !frag.is_empty())
        .map(|frag| {
            if frag.starts_with(':') && frag.ends_with(':') {
                Alignment::Center
            } else if frag.ends_with(':') {
                Alignment::Right
            } else {
                Alignment::Left
            }
        })
        .collect()
}

/// Data-row fragments: only fragments empty BEFORE trimming are dropped, so
/// a whitespace-only cell survives as an empty trimmed cell. A row may
/// yield more or fewer cells than the header, and both are preserved as-is.
fn parse_row_cells(line: &str) -> Vec<String> {
    line.split('|')
        .filter(|cell| !cell.is_empty())
        .map(|cell| cell.trim().to_string())
        .collect()
}
