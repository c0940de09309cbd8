//! Schema type definitions
//!
//! Supported sorts:
//! - integer: 64-bit signed integer
//! - float: 64-bit floating point
//! - text: UTF-8 string
//! - bool: Boolean
//!
//! A sort is a closed set of value kinds; membership is a tagged-variant
//! check, never open-ended runtime inspection.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::contract::{require, ContractResult};

/// The set of value kinds a column may legally hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    /// 64-bit signed integer
    Integer,
    /// 64-bit floating point
    Float,
    /// UTF-8 string
    Text,
    /// Boolean
    Bool,
}

impl Sort {
    /// Returns the sort name for error messages and logs
    pub fn name(&self) -> &'static str {
        match self {
            Sort::Integer => "integer",
            Sort::Float => "float",
            Sort::Text => "text",
            Sort::Bool => "bool",
        }
    }

    /// Sort membership: is `value` one of this sort's kinds?
    pub fn admits(&self, value: &Value) -> bool {
        value.sort() == *self
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A runtime value held by one cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point
    Float(f64),
    /// UTF-8 string
    Text(String),
    /// Boolean
    Bool(bool),
}

impl Value {
    /// The sort this value belongs to
    pub fn sort(&self) -> Sort {
        match self {
            Value::Integer(_) => Sort::Integer,
            Value::Float(_) => Sort::Float,
            Value::Text(_) => Sort::Text,
            Value::Bool(_) => Sort::Bool,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// One column descriptor: name + sort. Immutable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    name: String,
    sort: Sort,
}

impl Header {
    /// Create a header
    pub fn new(name: impl Into<String>, sort: Sort) -> Self {
        Self {
            name: name.into(),
            sort,
        }
    }

    /// The column name, unique within a schema
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sort of values this column holds
    pub fn sort(&self) -> Sort {
        self.sort
    }
}

/// Ordered sequence of headers defining a table's shape
///
/// Invariant: column names are unique within the sequence. Equality is
/// structural: two schemas are equal iff their header sequences match
/// element-wise in name, sort, and order. Immutable once constructed; a
/// "new schema" is always produced by copying or appending headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    headers: Vec<Header>,
}

impl Schema {
    /// The schema with no columns
    pub fn empty() -> Self {
        Self {
            headers: Vec::new(),
        }
    }

    /// Builds a schema after checking column-name uniqueness.
    pub fn new(headers: Vec<Header>) -> ContractResult<Self> {
        let schema = Self { headers };
        require(
            schema.names_unique(),
            "schema column names are unique",
        )?;
        Ok(schema)
    }

    /// Returns a new schema with `header` appended; `self` is untouched.
    pub fn with_header(&self, header: Header) -> ContractResult<Self> {
        require(
            !self.contains_column(header.name()),
            "column.name() not in schema.column_names()",
        )?;
        let mut headers = self.headers.clone();
        headers.push(header);
        Ok(Self { headers })
    }

    /// The headers, in column order
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Count of columns
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// True when the schema has no columns
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Ordered column names, re-derived on every call (never cached)
    pub fn column_names(&self) -> Vec<&str> {
        self.headers.iter().map(|h| h.name()).collect()
    }

    /// True when a column with this name exists
    pub fn contains_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h.name() == name)
    }

    /// The header at `index`, if in range
    pub fn header_at(&self, index: usize) -> Option<&Header> {
        self.headers.get(index)
    }

    /// The header with this name, if present
    pub fn find_header(&self, name: &str) -> Option<&Header> {
        self.headers.iter().find(|h| h.name() == name)
    }

    fn names_unique(&self) -> bool {
        self.headers
            .iter()
            .enumerate()
            .all(|(i, h)| !self.headers[..i].iter().any(|prev| prev.name() == h.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Schema {
        Schema::new(vec![
            Header::new("id", Sort::Integer),
            Header::new("name", Sort::Text),
        ])
        .unwrap()
    }

    #[test]
    fn test_sort_names() {
        assert_eq!(Sort::Integer.name(), "integer");
        assert_eq!(Sort::Float.name(), "float");
        assert_eq!(Sort::Text.name(), "text");
        assert_eq!(Sort::Bool.name(), "bool");
    }

    #[test]
    fn test_sort_membership_is_exact() {
        assert!(Sort::Integer.admits(&Value::Integer(1)));
        assert!(!Sort::Integer.admits(&Value::Float(1.0)));
        assert!(!Sort::Float.admits(&Value::Integer(1)));
        assert!(Sort::Text.admits(&Value::from("a")));
        assert!(!Sort::Bool.admits(&Value::Text("true".into())));
    }

    #[test]
    fn test_schema_rejects_duplicate_names() {
        let result = Schema::new(vec![
            Header::new("id", Sort::Integer),
            Header::new("id", Sort::Text),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_with_header_appends_without_mutating() {
        let schema = sample_schema();
        let extended = schema.with_header(Header::new("age", Sort::Integer)).unwrap();

        assert_eq!(schema.column_names(), vec!["id", "name"]);
        assert_eq!(extended.column_names(), vec!["id", "name", "age"]);
    }

    #[test]
    fn test_with_header_rejects_collision() {
        let schema = sample_schema();
        assert!(schema.with_header(Header::new("id", Sort::Float)).is_err());
    }

    #[test]
    fn test_structural_equality() {
        let a = sample_schema();
        let b = Schema::empty()
            .with_header(Header::new("id", Sort::Integer))
            .unwrap()
            .with_header(Header::new("name", Sort::Text))
            .unwrap();

        // Different construction path, same structure
        assert_eq!(a, b);

        // Same names, different order
        let reversed = Schema::new(vec![
            Header::new("name", Sort::Text),
            Header::new("id", Sort::Integer),
        ])
        .unwrap();
        assert_ne!(a, reversed);

        // Same name, different sort
        let retyped = Schema::new(vec![
            Header::new("id", Sort::Float),
            Header::new("name", Sort::Text),
        ])
        .unwrap();
        assert_ne!(a, retyped);
    }

    #[test]
    fn test_lookup_helpers() {
        let schema = sample_schema();
        assert!(schema.contains_column("name"));
        assert!(!schema.contains_column("missing"));
        assert_eq!(schema.header_at(0), Some(&Header::new("id", Sort::Integer)));
        assert_eq!(schema.header_at(2), None);
        assert_eq!(
            schema.find_header("name").map(|h| h.sort()),
            Some(Sort::Text)
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let schema = sample_schema();
        let json = serde_json::to_string(&schema).unwrap();
        let back: Schema = serde_json::from_str(&json).unwrap();
        assert_eq!(schema, back);
    }
}
