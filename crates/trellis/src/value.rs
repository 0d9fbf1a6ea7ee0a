//! Cell values extracted from row records.
//!
//! Column accessors produce a [`CellValue`] for each record. The engine never
//! looks at a record's fields directly; everything it knows about a row comes
//! through these values, which is also what filtering operates on.

/// Tagged container for a single cell's value.
///
/// `CellValue` holds the filterable value a column accessor extracts from a
/// record. Equality between two values defines the default per-column filter
/// semantics; [`CellValue::to_text`] defines what the global substring filter
/// sees.
///
/// # Example
///
/// ```
/// use trellis::CellValue;
///
/// let value = CellValue::from("Fulfilled");
/// assert_eq!(value.as_str(), Some("Fulfilled"));
/// assert_eq!(value.to_text().as_deref(), Some("Fulfilled"));
///
/// let count = CellValue::from(3);
/// assert_eq!(count.as_int(), Some(3));
/// assert_eq!(count.to_text().as_deref(), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value. Structural columns always yield this.
    #[default]
    None,
    /// Text data.
    String(String),
    /// Integer data.
    Int(i64),
    /// Floating point data.
    Float(f64),
    /// Boolean data.
    Bool(bool),
}

impl CellValue {
    /// Returns `true` if this is `CellValue::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, CellValue::None)
    }

    /// Returns `true` if this contains some value.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Attempts to get the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the value as an owned string.
    pub fn into_string(self) -> Option<String> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Coerces the value to display text for substring matching.
    ///
    /// Returns `None` for `CellValue::None`, so valueless cells never match
    /// a non-empty global filter.
    pub fn to_text(&self) -> Option<String> {
        match self {
            CellValue::None => None,
            CellValue::String(s) => Some(s.clone()),
            CellValue::Int(n) => Some(n.to_string()),
            CellValue::Float(n) => Some(n.to_string()),
            CellValue::Bool(b) => Some(b.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::String(value.clone())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(value as i64)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Int(value as i64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<V> From<Option<V>> for CellValue
where
    V: Into<CellValue>,
{
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_impls() {
        assert_eq!(CellValue::from("a"), CellValue::String("a".into()));
        assert_eq!(CellValue::from(7i64), CellValue::Int(7));
        assert_eq!(CellValue::from(7u32), CellValue::Int(7));
        assert_eq!(CellValue::from(1.5), CellValue::Float(1.5));
        assert_eq!(CellValue::from(true), CellValue::Bool(true));
        assert_eq!(CellValue::from(None::<i64>), CellValue::None);
        assert_eq!(CellValue::from(Some("x")), CellValue::String("x".into()));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(CellValue::from("a").as_str(), Some("a"));
        assert_eq!(CellValue::from(7).as_int(), Some(7));
        assert_eq!(CellValue::from(7).as_str(), None);
        assert!(CellValue::None.is_none());
        assert!(CellValue::from(false).is_some());
    }

    #[test]
    fn test_to_text() {
        assert_eq!(CellValue::None.to_text(), None);
        assert_eq!(CellValue::from("Pending").to_text().as_deref(), Some("Pending"));
        assert_eq!(CellValue::from(42).to_text().as_deref(), Some("42"));
        assert_eq!(CellValue::from(true).to_text().as_deref(), Some("true"));
    }
}
