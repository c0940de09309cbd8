//! Table model for tabula
//!
//! # Design Principles
//!
//! - Every row's schema structurally equals the table's schema
//! - Tables are never mutated after construction; every transformation
//!   returns a new `Table` and leaves the original valid
//! - Header lists are re-derived from the schema on every call, never cached
//!
//! Control flow of every transformation: `require` preconditions on the
//! inputs, construct a fresh schema and/or fresh rows, `ensure`
//! postconditions on the result, return it. Either the full postcondition
//! set holds and a complete table is returned, or nothing is.

mod types;

pub use types::{Cell, Row};

use std::sync::Arc;

use crate::contract::{ensure, require, unsupported, ContractResult};
use crate::schema::{Header, Schema, Value};

/// An immutable pairing of one schema and its conformant rows
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    schema: Arc<Schema>,
    rows: Vec<Row>,
}

impl Table {
    /// The table with an empty schema and zero rows
    pub fn empty() -> Self {
        Self {
            schema: Arc::new(Schema::empty()),
            rows: Vec::new(),
        }
    }

    /// The table's schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The rows, in insertion order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Count of rows
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Count of columns
    pub fn ncols(&self) -> usize {
        self.schema.len()
    }

    /// Ordered column names, re-derived from the schema on every call
    pub fn header(&self) -> Vec<&str> {
        self.schema.column_names()
    }

    /// Returns a table with `rows` appended, preserving relative order.
    ///
    /// Precondition: every appended row's schema structurally equals this
    /// table's schema.
    pub fn add_rows(&self, rows: Vec<Row>) -> ContractResult<Table> {
        for row in &rows {
            require(
                row.schema() == self.schema(),
                "row.schema() == table.schema() for every appended row",
            )?;
        }

        let appended = rows.len();
        let mut all = self.rows.clone();
        all.extend(rows);
        let table = Table {
            schema: Arc::clone(&self.schema),
            rows: all,
        };

        ensure(
            table.schema() == self.schema(),
            "new table schema unchanged",
        )?;
        ensure(
            table.nrows() == self.nrows() + appended,
            "new nrows == old nrows + appended count",
        )?;
        Ok(table)
    }

    /// Returns a table with one additional column of literal values.
    ///
    /// `values` arrive already computed, one per existing row in row order:
    /// the column's type declaration is decoupled from how its values were
    /// produced. Contrast with [`Table::build_column`].
    pub fn add_column(&self, column: Header, values: Vec<Value>) -> ContractResult<Table> {
        require(
            !self.schema.contains_column(column.name()),
            "column.name() not in table.header()",
        )?;
        require(
            values.len() == self.nrows(),
            "values.len() == table.nrows()",
        )?;

        let schema = Arc::new(self.schema.with_header(column.clone())?);
        let mut rows = Vec::with_capacity(self.rows.len());
        for (row, value) in self.rows.iter().zip(values) {
            ensure(
                column.sort().admits(&value),
                "supplied value admitted by column.sort()",
            )?;
            let mut cells = row.cells().to_vec();
            cells.push(Cell::new(column.name(), value));
            rows.push(Row::new(Arc::clone(&schema), cells)?);
        }

        let table = Table { schema, rows };
        self.ensure_column_appended(&table, &column)?;
        Ok(table)
    }

    /// Returns a table with one additional derived column.
    ///
    /// `compute` runs once per existing row and sees the row as it exists
    /// before the new column is added; it cannot observe the column being
    /// built. A failing computation propagates and no partial table becomes
    /// observable.
    pub fn build_column<F>(&self, column: Header, compute: F) -> ContractResult<Table>
    where
        F: Fn(&Row) -> ContractResult<Value>,
    {
        require(
            !self.schema.contains_column(column.name()),
            "column.name() not in table.header()",
        )?;

        let schema = Arc::new(self.schema.with_header(column.clone())?);
        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let value = compute(row)?;
            ensure(
                column.sort().admits(&value),
                "computed value admitted by column.sort()",
            )?;
            let mut cells = row.cells().to_vec();
            cells.push(Cell::new(column.name(), value));
            rows.push(Row::new(Arc::clone(&schema), cells)?);
        }

        let table = Table { schema, rows };
        self.ensure_column_appended(&table, &column)?;
        Ok(table)
    }

    /// Returns the row at `index` (row order is insertion order, stable
    /// across append-only transformations).
    pub fn get_row(&self, index: usize) -> ContractResult<&Row> {
        require(index < self.nrows(), "index < table.nrows()")?;
        Ok(&self.rows[index])
    }

    /// Collects the values of the column at `index`, in row order.
    ///
    /// Every stored value is re-checked against the column's declared sort;
    /// a mismatch means a corrupted row and fails loudly as a postcondition
    /// violation rather than passing silently.
    pub fn get_column_by_index(&self, index: usize) -> ContractResult<Vec<Value>> {
        require(index < self.ncols(), "index < table.ncols()")?;

        let header = &self.schema.headers()[index];
        let mut values = Vec::with_capacity(self.nrows());
        for row in &self.rows {
            let cell = &row.cells()[index];
            ensure(
                header.sort().admits(cell.value()),
                "stored value admitted by the column's declared sort",
            )?;
            values.push(cell.value().clone());
        }
        Ok(values)
    }

    /// Collects the values of the named column, in row order.
    ///
    /// Per-row lookup delegates to [`Row::get_value`], including its
    /// integrity checks.
    pub fn get_column_by_name(&self, column_name: &str) -> ContractResult<Vec<Value>> {
        require(
            self.schema.contains_column(column_name),
            "column_name in table.header()",
        )?;

        let mut values = Vec::with_capacity(self.nrows());
        for row in &self.rows {
            values.push(row.get_value(column_name)?.clone());
        }
        Ok(values)
    }

    /// Vertical concatenation. Declared but not yet supported; semantics
    /// are deliberately undefined until specified.
    pub fn vcat(&self, _other: &Table) -> ContractResult<Table> {
        Err(unsupported("vcat"))
    }

    /// Horizontal concatenation. Declared but not yet supported.
    pub fn hcat(&self, _other: &Table) -> ContractResult<Table> {
        Err(unsupported("hcat"))
    }

    /// Bulk construction from literal values. Declared but not yet supported.
    pub fn values(_headers: Vec<Header>, _rows: Vec<Vec<Value>>) -> ContractResult<Table> {
        Err(unsupported("values"))
    }

    /// Cross join. Declared but not yet supported.
    pub fn cross_join(&self, _other: &Table) -> ContractResult<Table> {
        Err(unsupported("cross_join"))
    }

    /// Left join. Declared but not yet supported.
    pub fn left_join(&self, _other: &Table) -> ContractResult<Table> {
        Err(unsupported("left_join"))
    }

    /// Shared postconditions of add_column and build_column.
    fn ensure_column_appended(&self, table: &Table, column: &Header) -> ContractResult<()> {
        ensure(
            table.ncols() == self.ncols() + 1,
            "new ncols == old ncols + 1",
        )?;
        ensure(
            table.schema.header_at(self.ncols()) == Some(column),
            "appended column is last in the new schema",
        )?;
        for (i, header) in self.schema.headers().iter().enumerate() {
            ensure(
                table.schema.header_at(i) == Some(header),
                "pre-existing headers unchanged in name, sort, and position",
            )?;
        }
        ensure(table.nrows() == self.nrows(), "row count unchanged")?;
        Ok(())
    }
}
