use std::marker::PhantomData;
use std::sync::Arc;

use super::traits::{QueryFilter, Statement};
use crate::error::{Error, Result};
use crate::executor::{Executor, Row, StatementOutput};
use crate::schema::{Field, JoinField, Schema};
use crate::statement::StatementState;
use crate::table::Table;
use crate::value::QueryVariable;

/// SELECT statement builder.
///
/// `F` is the field witness accepted by filters and the select list: the
/// table's own witness for a plain select, or [`JoinField`] for a joined
/// one.
pub struct SelectBuilder<F: Field> {
    state: StatementState,
    executor: Option<Arc<dyn Executor>>,
    marker: PhantomData<F>,
}

impl<F: Field> SelectBuilder<F> {
    /// Create an unbound builder selecting `fields`, or `*` when `fields`
    /// is empty.
    pub fn new(table: &str, fields: &[F]) -> Self {
        Self::with_executor(table, fields, None)
    }

    pub(crate) fn with_executor(
        table: &str,
        fields: &[F],
        executor: Option<Arc<dyn Executor>>,
    ) -> Self {
        let field_list = if fields.is_empty() {
            "*".to_owned()
        } else {
            fields
                .iter()
                .map(|field| field.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let mut state = StatementState::new();
        state.append(&format!("SELECT {field_list} FROM {table}"), Vec::new());
        Self {
            state,
            executor,
            marker: PhantomData,
        }
    }

    /// Bind an execution capability.
    pub fn bind(mut self, executor: Arc<dyn Executor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Append `GROUP BY <column>`.
    pub fn group_by(mut self, column: F) -> Self {
        self.state
            .append(&format!("GROUP BY {}", column.as_str()), Vec::new());
        self
    }

    /// Execute the statement and return the result rows untouched.
    pub async fn exec(&self) -> Result<Vec<Row>> {
        match self.dispatch().await? {
            (StatementOutput::Rows(rows), _fields) => Ok(rows),
            (StatementOutput::Write(_), _fields) => Err(Error::UnexpectedOutput {
                expected: "rows",
                got: "write metadata",
            }),
        }
    }
}

impl<L: Field, R: Field> SelectBuilder<JoinField<L, R>> {
    /// Append `INNER JOIN <table> ON <foreign_column> = <local_column>`.
    ///
    /// Available on builders created with [`Table::select_joined`], whose
    /// widened witness lets subsequent filter, ordering, and grouping calls
    /// reference the foreign table's columns.
    pub fn inner_join<J>(mut self, foreign: &Table<J>, foreign_column: R, local_column: L) -> Self
    where
        J: Schema<Field = R>,
    {
        self.state.append(
            &format!(
                "INNER JOIN {} ON {} = {}",
                foreign.name(),
                foreign_column.as_str(),
                local_column.as_str()
            ),
            Vec::new(),
        );
        self
    }
}

impl<F: Field> Statement for SelectBuilder<F> {
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

impl<F: Field> QueryFilter for SelectBuilder<F> {
    type Field = F;

    fn state_mut(&mut self) -> &mut StatementState {
        &mut self.state
    }
}
