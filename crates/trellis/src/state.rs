//! Caller-owned view state.
//!
//! [`ViewState`] is the single mutable input to the engine: the expanded-row
//! set, the global text filter, and the per-column filter values. It is a
//! plain value object created once per view instance and mutated through the
//! entry points below; the engine itself never changes it. There is no
//! terminal state and nothing resets automatically.

use std::collections::{HashMap, HashSet};

use crate::key::RowKey;
use crate::value::CellValue;

/// Filter and expansion state driving a row model.
///
/// The three fields are independent: changing a filter never touches the
/// expanded set, and toggling expansion never touches the filters. In
/// particular, expansion is sticky across filter edits; rows hidden by a
/// filter stay expanded and reappear open when the filter releases them.
///
/// # Example
///
/// ```
/// use trellis::{CellValue, RowKey, ViewState};
///
/// let mut state = ViewState::new();
/// state.toggle_expanded(RowKey::id("#6709"));
/// state.set_global_filter("kevin");
/// state.set_column_filter("status", Some(CellValue::from("Fulfilled")));
///
/// assert!(state.is_expanded(&RowKey::id("#6709")));
/// assert_eq!(state.global_filter(), "kevin");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    expanded: HashSet<RowKey>,
    global_filter: String,
    column_filters: HashMap<String, CellValue>,
}

impl ViewState {
    /// Creates an empty view state: nothing expanded, no filters.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Expansion
    // =========================================================================

    /// Flips the expansion state of the given key.
    ///
    /// Two toggles of the same key restore the original state field-wise.
    /// Filter fields are untouched.
    pub fn toggle_expanded(&mut self, key: RowKey) {
        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
        }
    }

    /// Marks a key as expanded. No-op if already expanded.
    pub fn expand(&mut self, key: RowKey) {
        self.expanded.insert(key);
    }

    /// Marks a key as collapsed. No-op if not expanded.
    pub fn collapse(&mut self, key: &RowKey) {
        self.expanded.remove(key);
    }

    /// Collapses everything.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Returns `true` if the key is in the expanded set.
    ///
    /// Note that membership alone does not make child rows appear; a row
    /// also needs a non-empty children sequence.
    pub fn is_expanded(&self, key: &RowKey) -> bool {
        self.expanded.contains(key)
    }

    /// Returns the expanded-key set.
    pub fn expanded(&self) -> &HashSet<RowKey> {
        &self.expanded
    }

    // =========================================================================
    // Filters
    // =========================================================================

    /// Replaces the global filter text.
    ///
    /// The expanded set is untouched; expansion survives filter edits.
    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        self.global_filter = text.into();
    }

    /// Returns the current global filter text.
    pub fn global_filter(&self) -> &str {
        &self.global_filter
    }

    /// Upserts one per-column filter; `None` removes the entry.
    pub fn set_column_filter(&mut self, column_id: impl Into<String>, value: Option<CellValue>) {
        let column_id = column_id.into();
        match value {
            Some(value) => {
                self.column_filters.insert(column_id, value);
            }
            None => {
                self.column_filters.remove(&column_id);
            }
        }
    }

    /// Returns the filter value for a column, if one is set.
    pub fn column_filter(&self, column_id: &str) -> Option<&CellValue> {
        self.column_filters.get(column_id)
    }

    /// Returns all per-column filter entries.
    pub fn column_filters(&self) -> &HashMap<String, CellValue> {
        &self.column_filters
    }

    /// Clears the global filter and all column filters, leaving expansion.
    pub fn clear_filters(&mut self) {
        self.global_filter.clear();
        self.column_filters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_idempotent_pair() {
        let mut state = ViewState::new();
        state.set_global_filter("abc");
        state.set_column_filter("status", Some(CellValue::from("Pending")));

        let before = state.clone();
        state.toggle_expanded(RowKey::id("#6709"));
        assert_ne!(state, before);
        state.toggle_expanded(RowKey::id("#6709"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_filters_leave_expansion_alone() {
        let mut state = ViewState::new();
        state.toggle_expanded(RowKey::id("#6709"));
        let expanded_before = state.expanded().clone();

        state.set_global_filter("kevin");
        state.set_column_filter("status", Some(CellValue::from("Fulfilled")));
        state.set_column_filter("status", None);
        state.clear_filters();

        assert_eq!(state.expanded(), &expanded_before);
    }

    #[test]
    fn test_toggle_leaves_filters_alone() {
        let mut state = ViewState::new();
        state.set_global_filter("kevin");
        state.set_column_filter("status", Some(CellValue::from("Fulfilled")));

        state.toggle_expanded(RowKey::top_level(0));

        assert_eq!(state.global_filter(), "kevin");
        assert_eq!(
            state.column_filter("status"),
            Some(&CellValue::from("Fulfilled"))
        );
    }

    #[test]
    fn test_column_filter_upsert_and_remove() {
        let mut state = ViewState::new();
        state.set_column_filter("status", Some(CellValue::from("Pending")));
        state.set_column_filter("status", Some(CellValue::from("Fulfilled")));
        assert_eq!(
            state.column_filter("status"),
            Some(&CellValue::from("Fulfilled"))
        );
        assert_eq!(state.column_filters().len(), 1);

        state.set_column_filter("status", None);
        assert_eq!(state.column_filter("status"), None);
        assert!(state.column_filters().is_empty());
    }

    #[test]
    fn test_expand_collapse() {
        let mut state = ViewState::new();
        state.expand(RowKey::id("a"));
        state.expand(RowKey::id("a"));
        state.expand(RowKey::id("b"));
        assert_eq!(state.expanded().len(), 2);

        state.collapse(&RowKey::id("a"));
        assert!(!state.is_expanded(&RowKey::id("a")));
        assert!(state.is_expanded(&RowKey::id("b")));

        state.collapse_all();
        assert!(state.expanded().is_empty());
    }
}
