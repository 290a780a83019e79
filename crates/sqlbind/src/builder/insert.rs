use std::sync::Arc;

use super::traits::{Mutation, Statement};
use crate::error::{Error, Result};
use crate::executor::Executor;
use crate::schema::Field;
use crate::statement::StatementState;
use crate::value::{QueryVariable, Value};

/// One row of values for an INSERT, keyed by the table's writable-field
/// witness (primary-key columns have no witness and cannot be set).
#[derive(Clone, Debug, Default)]
pub struct InsertRow<F: Field> {
    entries: Vec<(F, Value)>,
}

impl<F: Field> InsertRow<F> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a column value. Entry order becomes column order in the SQL.
    pub fn set(mut self, field: F, value: impl Into<Value>) -> Self {
        self.entries.push((field, value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn columns(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(field, _)| field.as_str()).collect()
    }
}

/// INSERT statement builder.
pub struct InsertBuilder {
    state: StatementState,
    executor: Option<Arc<dyn Executor>>,
}

impl InsertBuilder {
    /// Create an unbound builder for a batch of rows.
    ///
    /// Fails with [`Error::Validation`] on an empty batch. The column list
    /// comes from the first row only; later rows are assumed to share its
    /// column set and order, this is not validated.
    pub fn new<F: Field>(table: &str, rows: Vec<InsertRow<F>>) -> Result<Self> {
        Self::with_executor(table, rows, None)
    }

    /// Create an unbound builder for a single row.
    pub fn single<F: Field>(table: &str, row: InsertRow<F>) -> Self {
        Self::build(table, &[row], None)
    }

    pub(crate) fn single_with_executor<F: Field>(
        table: &str,
        row: InsertRow<F>,
        executor: Option<Arc<dyn Executor>>,
    ) -> Self {
        Self::build(table, &[row], executor)
    }

    pub(crate) fn with_executor<F: Field>(
        table: &str,
        rows: Vec<InsertRow<F>>,
        executor: Option<Arc<dyn Executor>>,
    ) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::validation(format!(
                "INSERT INTO {table} requires at least one row"
            )));
        }
        Ok(Self::build(table, &rows, executor))
    }

    fn build<F: Field>(
        table: &str,
        rows: &[InsertRow<F>],
        executor: Option<Arc<dyn Executor>>,
    ) -> Self {
        let columns = rows[0].columns();
        let mut variables = Vec::with_capacity(rows.len() * columns.len());
        let tuples: Vec<String> = rows
            .iter()
            .map(|row| {
                let markers: Vec<&str> = row.entries.iter().map(|_| "?").collect();
                for (_, value) in &row.entries {
                    variables.push(QueryVariable::Scalar(value.clone()));
                }
                format!("({})", markers.join(", "))
            })
            .collect();

        let mut state = StatementState::new();
        state.append(
            &format!(
                "INSERT INTO {table} ({}) VALUES {}",
                columns.join(", "),
                tuples.join(", ")
            ),
            variables,
        );
        Self { state, executor }
    }

    /// Bind an execution capability.
    pub fn bind(mut self, executor: Arc<dyn Executor>) -> Self {
        self.executor = Some(executor);
        self
    }
}

impl Statement for InsertBuilder {
    fn query(&self) -> &str {
        self.state.query()
    }

    fn variables(&self) -> &[QueryVariable] {
        self.state.variables()
    }

    fn executor(&self) -> Option<&Arc<dyn Executor>> {
        self.executor.as_ref()
    }
}

impl Mutation for InsertBuilder {}
