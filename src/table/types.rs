//! Cell and Row types
//!
//! A row is validated once, at construction. Nothing mutates a row
//! afterwards, so `get_value` finding anything out of shape means the row's
//! own invariant was broken, which is reported as a postcondition violation
//! rather than caller error.

use std::sync::Arc;

use crate::contract::{ensure, require, ContractResult};
use crate::schema::{Schema, Value};

/// A single (column name, value) entry within a row. Immutable value.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    column: String,
    value: Value,
}

impl Cell {
    /// Create a cell
    pub fn new(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    /// The column name this cell belongs under
    pub fn column(&self) -> &str {
        &self.column
    }

    /// The stored value
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// One schema-conformant tuple of cells
///
/// The schema is a shared reference: rows across table versions may point at
/// the same `Schema` allocation. Sharing through `Arc` makes it impossible
/// for a transformation to mutate a schema still reachable from an existing
/// table.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    schema: Arc<Schema>,
    cells: Vec<Cell>,
}

impl Row {
    /// Builds a row after checking conformance against `schema`.
    ///
    /// Preconditions: one cell per header; cells align with the headers
    /// positionally and nominally; every value is admitted by its column's
    /// sort.
    pub fn new(schema: Arc<Schema>, cells: Vec<Cell>) -> ContractResult<Self> {
        require(
            cells.len() == schema.len(),
            "cells.len() == schema.len()",
        )?;
        for (cell, header) in cells.iter().zip(schema.headers()) {
            require(
                cell.column() == header.name(),
                "cells[i].column() == schema.headers()[i].name()",
            )?;
            require(
                header.sort().admits(cell.value()),
                "schema.headers()[i].sort() admits cells[i].value()",
            )?;
        }
        Ok(Self { schema, cells })
    }

    /// The schema this row conforms to
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The cells, in column order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Looks up the value stored under `column_name`.
    ///
    /// Precondition: the name appears in the row's schema. The remaining
    /// checks are data-integrity assertions on the row itself: exactly one
    /// matching cell, exactly one matching header, and a value admitted by
    /// that header's sort. Any of them failing indicates a corrupted row.
    pub fn get_value(&self, column_name: &str) -> ContractResult<&Value> {
        require(
            self.schema.contains_column(column_name),
            "column_name in row.schema().column_names()",
        )?;

        let matching_cells: Vec<&Cell> = self
            .cells
            .iter()
            .filter(|c| c.column() == column_name)
            .collect();
        ensure(
            matching_cells.len() == 1,
            "exactly one cell matches column_name",
        )?;

        let matching_headers: Vec<_> = self
            .schema
            .headers()
            .iter()
            .filter(|h| h.name() == column_name)
            .collect();
        ensure(
            matching_headers.len() == 1,
            "exactly one header matches column_name",
        )?;

        let cell = matching_cells[0];
        ensure(
            matching_headers[0].sort().admits(cell.value()),
            "cell value admitted by its header's sort",
        )?;
        Ok(cell.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::ContractError;
    use crate::schema::{Header, Sort};

    fn sample_schema() -> Arc<Schema> {
        Arc::new(
            Schema::new(vec![
                Header::new("id", Sort::Integer),
                Header::new("name", Sort::Text),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_row_construction_valid() {
        let row = Row::new(
            sample_schema(),
            vec![Cell::new("id", 1i64), Cell::new("name", "alice")],
        );
        assert!(row.is_ok());
    }

    #[test]
    fn test_row_rejects_arity_mismatch() {
        let result = Row::new(sample_schema(), vec![Cell::new("id", 1i64)]);
        assert!(matches!(
            result,
            Err(ContractError::PreconditionViolated { .. })
        ));
    }

    #[test]
    fn test_row_rejects_misaligned_cells() {
        // Right names, wrong order
        let result = Row::new(
            sample_schema(),
            vec![Cell::new("name", "alice"), Cell::new("id", 1i64)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_row_rejects_sort_mismatch() {
        let result = Row::new(
            sample_schema(),
            vec![Cell::new("id", "not-an-integer"), Cell::new("name", "alice")],
        );
        assert!(matches!(
            result,
            Err(ContractError::PreconditionViolated { .. })
        ));
    }

    #[test]
    fn test_get_value_found() {
        let row = Row::new(
            sample_schema(),
            vec![Cell::new("id", 7i64), Cell::new("name", "bob")],
        )
        .unwrap();

        assert_eq!(row.get_value("id").unwrap(), &Value::Integer(7));
        assert_eq!(row.get_value("name").unwrap(), &Value::from("bob"));
    }

    #[test]
    fn test_get_value_unknown_column_is_precondition() {
        let row = Row::new(
            sample_schema(),
            vec![Cell::new("id", 7i64), Cell::new("name", "bob")],
        )
        .unwrap();

        assert!(matches!(
            row.get_value("missing"),
            Err(ContractError::PreconditionViolated { .. })
        ));
    }

    #[test]
    fn test_rows_share_one_schema_allocation() {
        let schema = sample_schema();
        let a = Row::new(
            Arc::clone(&schema),
            vec![Cell::new("id", 1i64), Cell::new("name", "a")],
        )
        .unwrap();
        let b = Row::new(
            Arc::clone(&schema),
            vec![Cell::new("id", 2i64), Cell::new("name", "b")],
        )
        .unwrap();

        assert!(std::ptr::eq(a.schema(), b.schema()));
    }
}
