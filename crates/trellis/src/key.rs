//! Stable row identity.
//!
//! Expansion and selection state must survive filtering and recomputation, so
//! rows are tracked by a [`RowKey`] that stays the same for the same
//! underlying record across rebuilds of the row model.

/// Stable identifier for a row.
///
/// When the engine is configured with a row-id function, keys are derived
/// from it ([`RowKey::Id`]). Otherwise keys fall back to the row's position
/// in the source sequence ([`RowKey::Position`]), which is stable as long as
/// the backing data does not reorder.
///
/// # Duplicate keys
///
/// Key uniqueness within a hierarchy level is a caller contract. If two rows
/// resolve to the same key the engine does not fail: the rows share
/// expansion and selection state (set-membership semantics), and their
/// relative output order is still decided by input position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    /// Identity supplied by the caller's row-id function.
    Id(String),
    /// Positional identity: the row's index within its parent's sequence.
    Position {
        /// Source index of the parent row, or `None` for top-level rows.
        parent: Option<usize>,
        /// Index of the row within its level.
        row: usize,
    },
}

impl RowKey {
    /// Creates an id-based key.
    pub fn id(id: impl Into<String>) -> Self {
        RowKey::Id(id.into())
    }

    /// Creates a positional key for a top-level row.
    pub fn top_level(row: usize) -> Self {
        RowKey::Position { parent: None, row }
    }

    /// Creates a positional key for a child row.
    pub fn child(parent: usize, row: usize) -> Self {
        RowKey::Position {
            parent: Some(parent),
            row,
        }
    }

    /// Returns the caller-supplied id, if this is an id-based key.
    pub fn as_id(&self) -> Option<&str> {
        match self {
            RowKey::Id(id) => Some(id.as_str()),
            RowKey::Position { .. } => None,
        }
    }
}

impl From<&str> for RowKey {
    fn from(id: &str) -> Self {
        RowKey::Id(id.to_string())
    }
}

impl From<String> for RowKey {
    fn from(id: String) -> Self {
        RowKey::Id(id)
    }
}
