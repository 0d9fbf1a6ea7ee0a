//! Row selection tracking.
//!
//! The reference consumers carry a per-row checkbox column; this module
//! provides the state behind it. Like expansion, selection is keyed by
//! [`RowKey`] so it survives filtering and recomputation, and it is entirely
//! independent of the filter fields: hiding a selected row does not deselect
//! it.

use crate::key::RowKey;

/// How many rows can be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one row; selecting replaces the previous selection.
    Single,
    /// Any number of rows.
    #[default]
    Multi,
}

/// Tracks which row keys are selected.
///
/// Keys are kept in selection order, which gives deterministic iteration for
/// batch operations (e.g. "export selected").
///
/// # Example
///
/// ```
/// use trellis::{RowKey, SelectionMode, SelectionModel};
///
/// let mut selection = SelectionModel::new().with_mode(SelectionMode::Single);
/// selection.select(RowKey::id("#6709"));
/// selection.select(RowKey::id("#6708"));
///
/// assert!(!selection.is_selected(&RowKey::id("#6709")));
/// assert!(selection.is_selected(&RowKey::id("#6708")));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionModel {
    mode: SelectionMode,
    selected: Vec<RowKey>,
}

impl SelectionModel {
    /// Creates an empty multi-selection model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection mode using builder style.
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.set_mode(mode);
        self
    }

    /// Returns the current selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Changes the selection mode.
    ///
    /// Switching to [`SelectionMode::Single`] keeps only the most recently
    /// selected key.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        if mode == SelectionMode::Single && self.selected.len() > 1 {
            let last = self.selected.pop();
            self.selected.clear();
            self.selected.extend(last);
        }
    }

    /// Selects a key. Returns `true` if the selection changed.
    pub fn select(&mut self, key: RowKey) -> bool {
        if self.is_selected(&key) {
            return false;
        }
        if self.mode == SelectionMode::Single {
            self.selected.clear();
        }
        self.selected.push(key);
        true
    }

    /// Deselects a key. Returns `true` if the selection changed.
    pub fn deselect(&mut self, key: &RowKey) -> bool {
        let len = self.selected.len();
        self.selected.retain(|k| k != key);
        self.selected.len() != len
    }

    /// Toggles a key's selection state.
    pub fn toggle(&mut self, key: RowKey) {
        if !self.deselect(&key) {
            self.select(key);
        }
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Returns `true` if the key is selected.
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selected.contains(key)
    }

    /// Returns `true` if anything is selected.
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Returns the number of selected keys.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Returns the selected keys in selection order.
    pub fn selected_keys(&self) -> &[RowKey] {
        &self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_selection() {
        let mut selection = SelectionModel::new();
        assert!(selection.select(RowKey::id("a")));
        assert!(selection.select(RowKey::id("b")));
        assert!(!selection.select(RowKey::id("a")));

        assert_eq!(selection.selected_count(), 2);
        assert_eq!(
            selection.selected_keys(),
            &[RowKey::id("a"), RowKey::id("b")]
        );
    }

    #[test]
    fn test_single_mode_replaces() {
        let mut selection = SelectionModel::new().with_mode(SelectionMode::Single);
        selection.select(RowKey::id("a"));
        selection.select(RowKey::id("b"));

        assert_eq!(selection.selected_keys(), &[RowKey::id("b")]);
    }

    #[test]
    fn test_switch_to_single_keeps_most_recent() {
        let mut selection = SelectionModel::new();
        selection.select(RowKey::id("a"));
        selection.select(RowKey::id("b"));
        selection.set_mode(SelectionMode::Single);

        assert_eq!(selection.selected_keys(), &[RowKey::id("b")]);
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut selection = SelectionModel::new();
        selection.toggle(RowKey::top_level(0));
        assert!(selection.is_selected(&RowKey::top_level(0)));

        selection.toggle(RowKey::top_level(0));
        assert!(!selection.has_selection());

        selection.select(RowKey::id("a"));
        selection.clear();
        assert!(!selection.has_selection());
    }

    #[test]
    fn test_deselect_returns_change() {
        let mut selection = SelectionModel::new();
        selection.select(RowKey::id("a"));
        assert!(selection.deselect(&RowKey::id("a")));
        assert!(!selection.deselect(&RowKey::id("a")));
    }
}
