//! Row filtering predicates.
//!
//! Two filter passes gate top-level rows: the global text filter (a
//! case-insensitive substring match across every filterable column) and the
//! per-column filters (equality, or a column's custom predicate). Children of
//! an expanded parent are never filtered; a matching parent shows its full
//! child sequence.

use std::collections::HashMap;

use crate::column::Column;
use crate::value::CellValue;

/// Global filter pass.
///
/// `needle` must already be lowercased; an empty needle passes everything.
/// A record passes if at least one filterable column's value, coerced to
/// text, contains the needle.
pub(crate) fn passes_global_filter<T>(record: &T, columns: &[Column<T>], needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    columns.iter().filter(|c| c.is_filterable()).any(|column| {
        column
            .value_for(record)
            .to_text()
            .is_some_and(|text| text.to_lowercase().contains(needle))
    })
}

/// Column filter pass.
///
/// Every entry must pass against its column. Entries naming a column id not
/// present in the descriptor set are advisory UI state referencing nothing;
/// they are ignored rather than failing the row.
pub(crate) fn passes_column_filters<T>(
    record: &T,
    columns: &[Column<T>],
    filters: &HashMap<String, CellValue>,
) -> bool {
    filters.iter().all(|(column_id, filter)| {
        match columns.iter().find(|c| c.id() == column_id) {
            Some(column) => column.matches_filter(record, filter),
            None => true,
        }
    })
}
