//! Minimal CSV reader for work-item exports.
//!
//! Handles double-quoted fields containing commas. Quotes are stripped from
//! every cell rather than unescaped, which matches what tracker exports
//! produce in practice.

use crate::types::WorkItem;

/// Parse CSV text into rows keyed by the header line.
///
/// The whole input is trimmed before splitting. Missing trailing cells read
/// as empty strings and cells beyond the header width are ignored. Input
/// with fewer than two lines yields nothing.
///
/// # Examples
///
/// ```
/// use workdeck_domain::parse_csv;
///
/// let rows: Vec<_> = parse_csv("A,B\n1,\"x,y\"\n").collect();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].get("B"), "x,y");
/// ```
pub fn parse_csv(text: &str) -> impl Iterator<Item = WorkItem> + '_ {
    let mut lines = text.trim().split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line));

    let headers: Vec<String> = lines
        .next()
        .map(|header| split_csv_line(header).into_iter().map(clean_cell).collect())
        .unwrap_or_default();

    lines.map(move |line| {
        let values = split_csv_line(line);
        headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                let value = values.get(index).copied().map(clean_cell).unwrap_or_default();
                (header.clone(), value)
            })
            .collect()
    })
}

/// Split one CSV line on commas that sit outside double quotes.
///
/// A comma is a delimiter only when an even number of quote characters
/// follow it on the line, i.e. it is not inside an open quoted span.
pub fn split_csv_line(line: &str) -> Vec<&str> {
    let total_quotes = line.bytes().filter(|&b| b == b'"').count();
    let mut quotes_seen = 0;
    let mut cells = Vec::new();
    let mut cell_start = 0;

    for (index, byte) in line.bytes().enumerate() {
        match byte {
            b'"' => quotes_seen += 1,
            b',' if (total_quotes - quotes_seen) % 2 == 0 => {
                cells.push(&line[cell_start..index]);
                cell_start = index + 1;
            }
            _ => {}
        }
    }
    cells.push(&line[cell_start..]);

    cells
}

fn clean_cell(cell: &str) -> String {
    cell.replace('"', "").trim().to_string()
}
