//! Trellis - a row-model engine for tabular views.
//!
//! Trellis turns an ordered sequence of row records into a filtered,
//! optionally hierarchically-expandable view, decoupled from how cells are
//! drawn. The caller supplies the records, a set of [`Column`] descriptors,
//! and a [`ViewState`] (global text filter, per-column filters, expanded-row
//! set); the engine returns an immutable snapshot of visible [`RowEntry`]
//! values annotated with key, depth, expansion status and child availability.
//! An external renderer walks the snapshot to draw rows and feeds user
//! gestures back into the state.
//!
//! # Core Types
//!
//! - [`Column`]: describes one field/slot to display per row
//! - [`CellValue`]: the filterable value a column extracts from a record
//! - [`RowKey`]: stable identity used to track expansion and selection
//! - [`ViewState`]: caller-owned filter/expansion state
//! - [`RowEngine`]: the pure `(records, state) -> rows` transformation
//! - [`RowEntry`]: one visible row in the computed model
//! - [`Table`]: thin stateful wrapper owning records and state
//! - [`SelectionModel`]: row selection keyed by [`RowKey`]
//!
//! # Example
//!
//! ```
//! use trellis::{CellValue, Column, RowEngine, RowKey, ViewState};
//!
//! struct Order {
//!     id: String,
//!     customer: String,
//!     line_items: Vec<Order>,
//! }
//!
//! let engine = RowEngine::new(vec![
//!     Column::new("id", |o: &Order| CellValue::from(&o.id)).with_title("Order ID"),
//!     Column::new("customer", |o: &Order| CellValue::from(&o.customer)).with_title("Customer"),
//! ])
//! .with_children(|o: &Order| o.line_items.as_slice())
//! .with_row_id(|o: &Order| o.id.clone());
//!
//! let orders = vec![Order {
//!     id: "#6709".into(),
//!     customer: "Olivia Cooper".into(),
//!     line_items: vec![Order {
//!         id: "PN-756760".into(),
//!         customer: String::new(),
//!         line_items: vec![],
//!     }],
//! }];
//!
//! let mut state = ViewState::new();
//! state.toggle_expanded(RowKey::id("#6709"));
//!
//! let rows = engine.visible_rows(&orders, &state);
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].depth, 0);
//! assert_eq!(rows[1].depth, 1);
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌───────────────┐    records, columns    ┌────────────┐
//! │    Caller     │───────────────────────>│  RowEngine │
//! │ (owns state)  │      ViewState         │  (pure)    │
//! └───────┬───────┘                        └──────┬─────┘
//!         │  toggle_expanded /                    │
//!         │  set_*_filter           Vec<RowEntry> │
//!         │                                       v
//!         │                               ┌────────────┐
//!         └──────── user gestures ────────│  Renderer  │
//!                                         │ (external) │
//!                                         └────────────┘
//! ```
//!
//! Every operation is synchronous, in-memory and terminating; the row model
//! is recomputed from scratch on each call and never patched in place.

mod column;
mod engine;
mod filter;
mod key;
mod selection;
mod state;
mod table;
mod value;

pub use column::{Accessor, Column, ColumnKind, FilterPredicate};
pub use engine::{ChildrenFn, RowEngine, RowEntry, RowIdFn};
pub use key::RowKey;
pub use selection::{SelectionMode, SelectionModel};
pub use state::ViewState;
pub use table::Table;
pub use value::CellValue;
