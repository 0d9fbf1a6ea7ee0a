//! The users view: a flat list deserialized from a static JSON fixture.

use serde::Deserialize;
use trellis::{CellValue, Column, RowEngine};

use crate::error::{Error, Result};

/// One user record from the fixture file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub visits: i64,
    pub progress: i64,
    pub status: String,
}

const USERS_FIXTURE: &str = include_str!("../fixtures/users.json");

/// Loads the user fixture bundled with the demo.
pub fn users() -> Result<Vec<User>> {
    serde_json::from_str(USERS_FIXTURE).map_err(|source| Error::fixture("users.json", source))
}

/// Builds the engine for the users view.
///
/// Flat list, no children provider; rows are keyed by the numeric user id.
pub fn user_engine() -> RowEngine<User> {
    RowEngine::new(vec![
        Column::new("firstName", |u: &User| CellValue::from(&u.first_name))
            .with_title("First Name"),
        Column::new("lastName", |u: &User| CellValue::from(&u.last_name)).with_title("Last Name"),
        Column::new("age", |u: &User| CellValue::from(u.age)).with_title("Age"),
        Column::new("visits", |u: &User| CellValue::from(u.visits)).with_title("Visits"),
    ])
    .with_row_id(|u: &User| u.id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis::{RowKey, ViewState};

    #[test]
    fn test_fixture_parses() {
        let users = users().expect("fixture should parse");
        assert_eq!(users.len(), 6);
        assert_eq!(users[0].first_name, "Tanner");
        assert_eq!(users[0].id, 1);
    }

    #[test]
    fn test_flat_view_has_no_hierarchy() {
        let users = users().unwrap();
        let mut state = ViewState::new();
        // Expansion is meaningless without a children provider.
        state.toggle_expanded(RowKey::id("1"));

        let rows = user_engine().visible_rows(&users, &state);
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.depth == 0 && !r.has_children && !r.is_expanded));
    }

    #[test]
    fn test_rows_keyed_by_user_id() {
        let users = users().unwrap();
        let rows = user_engine().visible_rows(&users, &ViewState::new());
        assert_eq!(rows[0].key, RowKey::id("1"));
        assert_eq!(rows[5].key, RowKey::id("6"));
    }

    #[test]
    fn test_numeric_column_filter() {
        let users = users().unwrap();
        let mut state = ViewState::new();
        state.set_column_filter("age", Some(CellValue::from(26)));

        let rows = user_engine().visible_rows(&users, &state);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.first_name, "Kevin");
    }
}
