//! Plain-text renderer for computed row models.
//!
//! This plays the "external renderer" role: it walks a slice of [`RowEntry`]
//! values and draws them, deciding indentation from `depth`, the
//! expand/collapse affordance from `has_children`/`is_expanded`, and the cell
//! presentation from each column's [`ColumnKind`]. The engine stays unaware
//! of all of it.

use trellis::{Column, ColumnKind, RowEntry};

const INDENT: &str = "  ";

/// Renders a row model as an aligned text table with a header line.
///
/// Child rows are indented in the first value-bearing column, and columns of
/// kind [`ColumnKind::Expander`] show a `>`/`v` affordance for collapsible
/// rows.
pub fn render_table<T>(columns: &[Column<T>], rows: &[RowEntry<'_, T>]) -> String {
    // Nesting is shown in the first column that actually carries values.
    let indent_column = columns.iter().position(|c| c.is_filterable());

    let header: Vec<String> = columns
        .iter()
        .map(|c| c.title().unwrap_or_default().to_string())
        .collect();

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|entry| {
            columns
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    let mut cell = render_cell(column, entry);
                    if Some(i) == indent_column && entry.depth > 0 {
                        cell = format!("{}{cell}", INDENT.repeat(entry.depth));
                    }
                    cell
                })
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let rule: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(rule));
    out.push('\n');
    for row in &body {
        push_line(&mut out, row, &widths);
    }
    out
}

fn render_cell<T>(column: &Column<T>, entry: &RowEntry<'_, T>) -> String {
    match column.kind() {
        ColumnKind::Expander => {
            if entry.has_children {
                if entry.is_expanded { "v" } else { ">" }.to_string()
            } else {
                String::new()
            }
        }
        ColumnKind::Action => "...".to_string(),
        _ => column
            .value_for(entry.record)
            .to_text()
            .unwrap_or_default(),
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
