//! Column descriptors.
//!
//! A [`Column`] describes one field or slot displayed per row: a unique id,
//! an optional header title, an accessor that extracts the cell's value from
//! a record, and a [`ColumnKind`] the renderer uses to pick a presentation.
//! Columns without an accessor are structural (expander handles, action
//! menus) and carry no filterable value.

use std::sync::Arc;

use crate::value::CellValue;

/// Type alias for a column accessor function.
pub type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Type alias for a custom column filter predicate.
///
/// Receives the cell's value and the filter value; returns `true` if the row
/// passes. Overrides the default equality semantics for one column.
pub type FilterPredicate = Arc<dyn Fn(&CellValue, &CellValue) -> bool + Send + Sync>;

/// Presentation kind for a column, resolved by the external renderer.
///
/// The engine attaches no meaning to the kind beyond carrying it; it exists
/// so renderers can dispatch on a closed set of variants instead of
/// per-column draw callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnKind {
    /// Plain text cell.
    #[default]
    Text,
    /// Status badge (colored pill in the reference renderer).
    Badge,
    /// Icon cell (e.g. a sales-channel mark).
    Icon,
    /// Action slot (row menu button). Structural.
    Action,
    /// Expand/collapse handle. Structural.
    Expander,
}

/// Descriptor for one column of a tabular view.
///
/// # Example
///
/// ```
/// use trellis::{CellValue, Column, ColumnKind};
///
/// struct Order {
///     id: String,
///     status: String,
/// }
///
/// let columns = vec![
///     Column::structural("expander").with_kind(ColumnKind::Expander),
///     Column::new("id", |order: &Order| CellValue::from(&order.id)).with_title("Order ID"),
///     Column::new("status", |order: &Order| CellValue::from(&order.status))
///         .with_title("Status")
///         .with_kind(ColumnKind::Badge),
/// ];
///
/// assert!(columns[1].is_filterable());
/// assert!(!columns[0].is_filterable());
/// ```
pub struct Column<T> {
    id: String,
    title: Option<String>,
    kind: ColumnKind,
    accessor: Option<Accessor<T>>,
    filter_predicate: Option<FilterPredicate>,
}

impl<T> Column<T> {
    /// Creates a column with a value accessor.
    pub fn new<F>(id: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            title: None,
            kind: ColumnKind::Text,
            accessor: Some(Arc::new(accessor)),
            filter_predicate: None,
        }
    }

    /// Creates a structural column with no value.
    ///
    /// Structural columns mark purely decorative slots; they never match the
    /// global filter and a column filter targeting them never excludes rows.
    pub fn structural(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            kind: ColumnKind::Text,
            accessor: None,
            filter_predicate: None,
        }
    }

    /// Sets the header title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the presentation kind.
    pub fn with_kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets a custom filter predicate, replacing equality matching.
    pub fn with_filter_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&CellValue, &CellValue) -> bool + Send + Sync + 'static,
    {
        self.filter_predicate = Some(Arc::new(predicate));
        self
    }

    /// Returns the column id, unique within a column set.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the header title, or `None` for headerless columns.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the presentation kind.
    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// Returns `true` if this column carries a value accessor.
    pub fn is_filterable(&self) -> bool {
        self.accessor.is_some()
    }

    /// Extracts this column's value from a record.
    ///
    /// Structural columns always yield [`CellValue::None`].
    pub fn value_for(&self, record: &T) -> CellValue {
        match &self.accessor {
            Some(accessor) => accessor(record),
            None => CellValue::None,
        }
    }

    /// Evaluates a column-filter value against a record.
    ///
    /// Structural columns always pass (there is nothing to compare). With a
    /// custom predicate the predicate decides; otherwise the cell value must
    /// equal the filter value.
    pub(crate) fn matches_filter(&self, record: &T, filter: &CellValue) -> bool {
        if self.accessor.is_none() {
            return true;
        }
        let value = self.value_for(record);
        match &self.filter_predicate {
            Some(predicate) => predicate(&value, filter),
            None => value == *filter,
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            kind: self.kind,
            accessor: self.accessor.clone(),
            filter_predicate: self.filter_predicate.clone(),
        }
    }
}
