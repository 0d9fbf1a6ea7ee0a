//! The row-model engine.
//!
//! [`RowEngine`] is the pure core of the crate: given an ordered slice of
//! records and a [`ViewState`], it produces the flattened, ordered sequence
//! of visible rows, each annotated with its key, depth, expansion status and
//! whether it has children. The engine owns no data and caches nothing; every
//! call recomputes the row model from scratch, which keeps it safe to invoke
//! on each state change.
//!
//! Hierarchy is exactly two levels deep, matching its consumers (orders and
//! their line items). Children of an expanded parent are emitted in full,
//! unfiltered, immediately after the parent; filtering applies to top-level
//! rows only.

use std::sync::Arc;

use crate::column::Column;
use crate::filter;
use crate::key::RowKey;
use crate::state::ViewState;

/// Type alias for a children provider function.
///
/// Returns the child records of a row; an empty slice means no children.
pub type ChildrenFn<T> = Arc<dyn for<'a> Fn(&'a T) -> &'a [T] + Send + Sync>;

/// Type alias for a row-id function.
pub type RowIdFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// One visible row in the computed row model.
///
/// Entries borrow their record from the input slice; the row model is a
/// derived, immutable snapshot, discarded and rebuilt on every recomputation
/// rather than patched in place.
#[derive(Debug)]
pub struct RowEntry<'a, T> {
    /// Stable identity of the row.
    pub key: RowKey,
    /// Nesting depth: 0 for top-level rows, 1 for children.
    pub depth: usize,
    /// The underlying record.
    pub record: &'a T,
    /// Whether this row is currently showing its children.
    ///
    /// Always `false` for rows without children, even if their key was
    /// forced into the expanded set.
    pub is_expanded: bool,
    /// Whether this row has a non-empty child sequence.
    pub has_children: bool,
}

/// Pure engine mapping `(records, ViewState)` to a visible-row sequence.
///
/// Configure it once with the column set, and optionally a children provider
/// and a row-id function, using the builder methods. Without a row-id
/// function, rows are keyed by position.
///
/// # Example
///
/// ```
/// use trellis::{CellValue, Column, RowEngine, ViewState};
///
/// struct Order {
///     id: String,
///     customer: String,
///     items: Vec<Order>,
/// }
///
/// let engine = RowEngine::new(vec![
///     Column::new("id", |o: &Order| CellValue::from(&o.id)).with_title("Order ID"),
///     Column::new("customer", |o: &Order| CellValue::from(&o.customer)).with_title("Customer"),
/// ])
/// .with_children(|o: &Order| o.items.as_slice())
/// .with_row_id(|o: &Order| o.id.clone());
///
/// let orders: Vec<Order> = vec![];
/// let state = ViewState::new();
/// let rows = engine.visible_rows(&orders, &state);
/// assert!(rows.is_empty());
/// ```
pub struct RowEngine<T> {
    columns: Vec<Column<T>>,
    children: Option<ChildrenFn<T>>,
    row_id: Option<RowIdFn<T>>,
}

impl<T> RowEngine<T> {
    /// Creates an engine over the given column set.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            children: None,
            row_id: None,
        }
    }

    /// Sets the children provider.
    ///
    /// A row has children iff the provider returns a non-empty slice for it.
    /// The provider is consulted for top-level rows only; the engine never
    /// nests deeper than one child level.
    pub fn with_children<F>(mut self, children: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> &'a [T] + Send + Sync + 'static,
    {
        self.children = Some(Arc::new(children));
        self
    }

    /// Sets the row-id function used to derive stable keys.
    pub fn with_row_id<F>(mut self, row_id: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.row_id = Some(Arc::new(row_id));
        self
    }

    /// Returns the column descriptors.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Looks up a column by id.
    pub fn column(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.id() == id)
    }

    /// Derives the key for a record at the given position.
    pub fn key_for(&self, record: &T, parent: Option<usize>, row: usize) -> RowKey {
        match &self.row_id {
            Some(row_id) => RowKey::Id(row_id(record)),
            None => RowKey::Position { parent, row },
        }
    }

    /// Computes the visible row model for the given records and state.
    ///
    /// The algorithm, in order:
    /// 1. Drop top-level records failing the global text filter.
    /// 2. Drop top-level records failing any per-column filter.
    /// 3. Emit each surviving record at depth 0 in input order; when its key
    ///    is expanded and it has children, emit every child at depth 1
    ///    immediately after, unfiltered and in original order.
    ///
    /// The relative order of surviving top-level records always equals their
    /// order in `records`; expansion never reorders siblings. Degenerate
    /// input (duplicate keys, filters naming unknown columns) degrades per
    /// the documented tie-breaks and never panics.
    pub fn visible_rows<'a>(&self, records: &'a [T], state: &ViewState) -> Vec<RowEntry<'a, T>> {
        let needle = state.global_filter().to_lowercase();
        let filters = state.column_filters();

        let mut rows = Vec::new();
        for (row_index, record) in records.iter().enumerate() {
            if !filter::passes_global_filter(record, &self.columns, &needle) {
                continue;
            }
            if !filter::passes_column_filters(record, &self.columns, filters) {
                continue;
            }

            let key = self.key_for(record, None, row_index);
            let children = match &self.children {
                Some(provider) => provider(record),
                None => &[],
            };
            let has_children = !children.is_empty();
            let is_expanded = has_children && state.is_expanded(&key);

            rows.push(RowEntry {
                key,
                depth: 0,
                record,
                is_expanded,
                has_children,
            });

            if is_expanded {
                for (child_index, child) in children.iter().enumerate() {
                    rows.push(RowEntry {
                        key: self.key_for(child, Some(row_index), child_index),
                        depth: 1,
                        record: child,
                        is_expanded: false,
                        has_children: false,
                    });
                }
            }
        }

        tracing::debug!(
            total = records.len(),
            visible = rows.len(),
            global_filter = !needle.is_empty(),
            column_filters = filters.len(),
            "row model recomputed"
        );

        rows
    }
}

impl<T> Clone for RowEngine<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            children: self.children.clone(),
            row_id: self.row_id.clone(),
        }
    }
}
