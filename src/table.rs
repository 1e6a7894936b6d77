use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::TableGrid;

static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\|[\s\-:|]+\|$").expect("valid regex"));

/// Build a table from contiguous `|` rows.
///
/// Alignment rows are discarded and the first remaining row becomes the
/// header. Returns `None` for fewer than two lines or when no data row is
/// left. Short rows are padded with empty cells, extra cells are dropped.
pub fn assemble(lines: &[&str]) -> Option<TableGrid> {
    if lines.len() < 2 {
        return None;
    }

    let mut data = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !SEPARATOR_RE.is_match(line))
        .map(split_cells);

    let header = data.next()?;
    let columns = header.len();
    let rows = data
        .map(|mut row| {
            row.resize(columns, String::new());
            row
        })
        .collect();

    Some(TableGrid { header, rows })
}

fn split_cells(line: &str) -> Vec<String> {
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);
    line.split('|').map(|cell| cell.trim().to_string()).collect()
}
