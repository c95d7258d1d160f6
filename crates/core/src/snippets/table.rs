//! Markdown table scaffolding.

use serde::Deserialize;

use super::types::SnippetError;

/// How table cells are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Every column padded to its widest cell, dash-filled separator row.
    #[default]
    Aligned,
    /// Unpadded cells with a plain `---` separator.
    Simple,
}

impl TableFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TableFormat::Aligned => "aligned",
            TableFormat::Simple => "simple",
        }
    }
}

/// Dimensions and format for a placeholder table.
#[derive(Debug, Clone)]
pub struct TableSpec {
    pub columns: usize,
    pub rows: usize,
    pub format: TableFormat,
}

/// Build a placeholder table (`Header N` / `Cell R,C`).
///
/// # Errors
/// `EmptyTable` when `columns` or `rows` is zero.
pub fn scaffold(spec: &TableSpec) -> Result<String, SnippetError> {
    if spec.columns == 0 || spec.rows == 0 {
        return Err(SnippetError::EmptyTable { columns: spec.columns, rows: spec.rows });
    }

    let headers: Vec<String> =
        (1..=spec.columns).map(|c| format!("Header {c}")).collect();
    let rows: Vec<Vec<String>> = (1..=spec.rows)
        .map(|r| (1..=spec.columns).map(|c| format!("Cell {r},{c}")).collect())
        .collect();

    Ok(render(&headers, &rows, spec.format))
}

/// Render caller-supplied data as a markdown table. Ragged rows are padded
/// with empty cells; extra cells beyond the header count are dropped.
#[must_use]
pub fn render(headers: &[String], rows: &[Vec<String>], format: TableFormat) -> String {
    match format {
        TableFormat::Aligned => render_aligned(headers, rows),
        TableFormat::Simple => render_simple(headers, rows),
    }
}

fn render_simple(headers: &[String], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut out = String::new();

    out.push_str(&format!("| {} |\n", headers.join(" | ")));
    out.push_str(&format!("| {} |\n", vec!["---"; columns].join(" | ")));
    for row in rows {
        let cells: Vec<&str> =
            (0..columns).map(|c| row.get(c).map_or("", String::as_str)).collect();
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    out
}

fn render_aligned(headers: &[String], rows: &[Vec<String>]) -> String {
    let columns = headers.len();

    // Column width: widest of the header and every cell, minimum 3 so the
    // separator keeps at least three dashes.
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            let cell_max = rows
                .iter()
                .map(|row| row.get(c).map_or(0, |cell| cell.chars().count()))
                .max()
                .unwrap_or(0);
            headers[c].chars().count().max(cell_max).max(3)
        })
        .collect();

    let mut out = String::new();

    let header_cells: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{h:<width$}", width = *w))
        .collect();
    out.push_str(&format!("| {} |\n", header_cells.join(" | ")));

    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    out.push_str(&format!("|{}|\n", separators.join("|")));

    for row in rows {
        let cells: Vec<String> = (0..columns)
            .map(|c| {
                let cell = row.get(c).map_or("", String::as_str);
                format!("{cell:<width$}", width = widths[c])
            })
            .collect();
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaffold_simple() {
        let spec = TableSpec { columns: 2, rows: 2, format: TableFormat::Simple };
        let table = scaffold(&spec).unwrap();
        assert_eq!(
            table,
            "| Header 1 | Header 2 |\n\
             | --- | --- |\n\
             | Cell 1,1 | Cell 1,2 |\n\
             | Cell 2,1 | Cell 2,2 |\n"
        );
    }

    #[test]
    fn test_scaffold_aligned() {
        let spec = TableSpec { columns: 2, rows: 1, format: TableFormat::Aligned };
        let table = scaffold(&spec).unwrap();
        assert_eq!(
            table,
            "| Header 1 | Header 2 |\n\
             |----------|----------|\n\
             | Cell 1,1 | Cell 1,2 |\n"
        );
    }

    #[test]
    fn test_aligned_pads_to_widest_cell() {
        let headers = vec!["A".to_string(), "B".to_string()];
        let rows = vec![vec!["wide cell".to_string(), "x".to_string()]];
        let table = render(&headers, &rows, TableFormat::Aligned);
        assert_eq!(
            table,
            "| A         | B   |\n\
             |-----------|-----|\n\
             | wide cell | x   |\n"
        );
    }

    #[test]
    fn test_ragged_rows_padded() {
        let headers = vec!["A".to_string(), "B".to_string()];
        let rows = vec![vec!["only".to_string()]];
        let table = render(&headers, &rows, TableFormat::Simple);
        assert!(table.contains("| only |  |"));
    }

    #[test]
    fn test_empty_dimensions_rejected() {
        let spec = TableSpec { columns: 0, rows: 2, format: TableFormat::Simple };
        assert!(matches!(
            scaffold(&spec),
            Err(SnippetError::EmptyTable { columns: 0, rows: 2 })
        ));
    }
}
