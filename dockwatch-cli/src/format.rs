//! Plain-text rendering of the stats table.

use dockwatch_core::{ColumnId, MetricRow};

/// Gap between columns
const COLUMN_GAP: &str = "  ";

/// Renders rows as a left-aligned table with a header line.
///
/// Column widths fit the widest of the header label and the display
/// cells, so the output lines up like the `docker stats` original.
pub fn render_table(rows: &[MetricRow]) -> String {
    let columns = ColumnId::ALL;
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|&c| row.display_cell(c)).collect())
        .collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.label().len()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    render_line(
        &mut out,
        &columns.iter().map(|c| c.label().to_string()).collect::<Vec<_>>(),
        &widths,
    );
    for row in &cells {
        render_line(&mut out, row, &widths);
    }
    out
}

fn render_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (i, cell) in cells.iter().enumerate() {
        out.push_str(cell);
        if i == last {
            break;
        }
        out.push_str(&" ".repeat(widths[i] - cell.len()));
        out.push_str(COLUMN_GAP);
    }
    out.push('\n');
}
