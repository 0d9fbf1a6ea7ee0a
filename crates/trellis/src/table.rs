//! Thin stateful wrapper around the engine.
//!
//! [`Table`] owns the records, the [`ViewState`] and a [`RowEngine`], guarding
//! them behind locks so a view can hold one shared handle and drive every
//! mutation through it. It adds no behavior of its own: mutators delegate to
//! [`ViewState`], and reads recompute the row model through the engine.

use parking_lot::RwLock;

use crate::engine::{RowEngine, RowEntry};
use crate::key::RowKey;
use crate::state::ViewState;
use crate::value::CellValue;

/// Stateful table holding records and view state for one view instance.
///
/// Computed rows borrow from the record storage, so reads use a scoped
/// callback instead of returning the entries: the lock is held exactly for
/// the duration of the closure.
///
/// # Example
///
/// ```
/// use trellis::{CellValue, Column, RowEngine, Table};
///
/// struct User {
///     name: String,
/// }
///
/// let table = Table::new(RowEngine::new(vec![
///     Column::new("name", |u: &User| CellValue::from(&u.name)).with_title("Name"),
/// ]))
/// .with_records(vec![User { name: "Ada".into() }, User { name: "Grace".into() }]);
///
/// table.set_global_filter("gra");
/// let names = table.with_visible_rows(|rows| {
///     rows.iter().map(|r| r.record.name.clone()).collect::<Vec<_>>()
/// });
/// assert_eq!(names, vec!["Grace"]);
/// ```
pub struct Table<T> {
    engine: RowEngine<T>,
    records: RwLock<Vec<T>>,
    state: RwLock<ViewState>,
}

impl<T> Table<T> {
    /// Creates an empty table driven by the given engine.
    pub fn new(engine: RowEngine<T>) -> Self {
        Self {
            engine,
            records: RwLock::new(Vec::new()),
            state: RwLock::new(ViewState::new()),
        }
    }

    /// Sets the initial records using builder style.
    pub fn with_records(self, records: Vec<T>) -> Self {
        *self.records.write() = records;
        self
    }

    /// Replaces the backing records.
    ///
    /// View state is kept as-is: keyed expansion and filters survive a data
    /// reload, positional keys survive as long as order does.
    pub fn set_records(&self, records: Vec<T>) {
        *self.records.write() = records;
    }

    /// Returns the number of backing top-level records (unfiltered).
    pub fn record_count(&self) -> usize {
        self.records.read().len()
    }

    /// Returns the engine driving this table.
    pub fn engine(&self) -> &RowEngine<T> {
        &self.engine
    }

    /// Returns a snapshot of the current view state.
    pub fn state(&self) -> ViewState {
        self.state.read().clone()
    }

    // =========================================================================
    // State mutators
    // =========================================================================

    /// Flips the expansion state of a row key.
    pub fn toggle_expanded(&self, key: RowKey) {
        self.state.write().toggle_expanded(key);
    }

    /// Replaces the global filter text.
    pub fn set_global_filter(&self, text: impl Into<String>) {
        self.state.write().set_global_filter(text);
    }

    /// Upserts one per-column filter; `None` removes the entry.
    pub fn set_column_filter(&self, column_id: impl Into<String>, value: Option<CellValue>) {
        self.state.write().set_column_filter(column_id, value);
    }

    /// Clears the global filter and all column filters.
    pub fn clear_filters(&self) {
        self.state.write().clear_filters();
    }

    // =========================================================================
    // Row model access
    // =========================================================================

    /// Computes the visible rows and hands them to `f`.
    ///
    /// The record storage is read-locked for the duration of the call; the
    /// entries borrow from it and cannot escape the closure.
    pub fn with_visible_rows<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[RowEntry<'_, T>]) -> R,
    {
        let records = self.records.read();
        let state = self.state.read();
        let rows = self.engine.visible_rows(&records, &state);
        f(&rows)
    }

    /// Returns the number of currently visible rows.
    pub fn visible_count(&self) -> usize {
        self.with_visible_rows(|rows| rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;

    struct User {
        id: u32,
        first_name: String,
        age: i64,
    }

    fn users() -> Vec<User> {
        vec![
            User { id: 1, first_name: "Tanner".into(), age: 29 },
            User { id: 2, first_name: "Kevin".into(), age: 40 },
            User { id: 3, first_name: "Olivia".into(), age: 35 },
        ]
    }

    fn table() -> Table<User> {
        Table::new(
            RowEngine::new(vec![
                Column::new("firstName", |u: &User| CellValue::from(&u.first_name))
                    .with_title("First Name"),
                Column::new("age", |u: &User| CellValue::from(u.age)).with_title("Age"),
            ])
            .with_row_id(|u: &User| u.id.to_string()),
        )
        .with_records(users())
    }

    #[test]
    fn test_counts() {
        let table = table();
        assert_eq!(table.record_count(), 3);
        assert_eq!(table.visible_count(), 3);
    }

    #[test]
    fn test_filter_through_wrapper() {
        let table = table();
        table.set_global_filter("kev");
        assert_eq!(table.visible_count(), 1);

        table.clear_filters();
        assert_eq!(table.visible_count(), 3);
    }

    #[test]
    fn test_column_filter_through_wrapper() {
        let table = table();
        table.set_column_filter("age", Some(CellValue::from(40)));
        let first = table.with_visible_rows(|rows| rows[0].record.first_name.clone());
        assert_eq!(first, "Kevin");

        table.set_column_filter("age", None);
        assert_eq!(table.visible_count(), 3);
    }

    #[test]
    fn test_state_survives_record_reload() {
        let table = table();
        table.set_global_filter("kev");
        table.toggle_expanded(RowKey::id("2"));

        table.set_records(users());

        let state = table.state();
        assert_eq!(state.global_filter(), "kev");
        assert!(state.is_expanded(&RowKey::id("2")));
        assert_eq!(table.visible_count(), 1);
    }
}
