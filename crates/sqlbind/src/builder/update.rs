use std::marker::PhantomData;
use std::sync::Arc;

use super::traits::{Mutation, QueryFilter, Statement};
use crate::error::{Error, Result};
use crate::executor::Executor;
use crate::schema::Field;
use crate::statement::StatementState;
use crate::value::{QueryVariable, Value};

/// A single `column = value` assignment for an UPDATE, keyed by the table's
/// writable-field witness.
#[derive(Clone, Debug)]
pub struct SetClause<F: Field> {
    field: F,
    value: Value,
}

impl<F: Field> SetClause<F> {
    pub fn new(field: F, value: impl Into<Value>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// UPDATE statement builder.
///
/// `F` is the witness accepted by the filter mixin, which covers every
/// column of the table, not only the writable ones.
pub struct UpdateBuilder<F: Field> {
    state: StatementState,
    executor: Option<Arc<dyn Executor>>,
    marker: PhantomData<F>,
}

impl<F: Field> UpdateBuilder<F> {
    /// Create an unbound builder from a list of assignments.
    ///
    /// Fails with [`Error::Validation`] on an empty list.
    pub fn new<W: Field>(table: &str, updates: Vec<SetClause<W>>) -> Result<Self> {
        Self::with_executor(table, updates, None)
    }

    /// Create an unbound builder from a single assignment.
    pub fn single<W: Field>(table: &str, update: SetClause<W>) -> Self {
        Self::build(table, &[update], None)
    }

    pub(crate) fn single_with_executor<W: Field>(
        table: &str,
        update: SetClause<W>,
        executor: Option<Arc<dyn Executor>>,
    ) -> Self {
        Self::build(table, &[update], executor)
    }

    pub(crate) fn with_executor<W: Field>(
        table: &str,
        updates: Vec<SetClause<W>>,
        executor: Option<Arc<dyn Executor>>,
    ) -> Result<Self> {
        if updates.is_empty() {
            return Err(Error::validation(format!(
                "UPDATE {table} requires at least one SET clause"
            )));
        }
        Ok(Self::build(table, &updates, executor))
    }

    fn build<W: Field>(
        table: &str,
        updates: &[SetClause<W>],
        executor: Option<Arc<dyn Executor>>,
    ) -> Self {
        let mut state = StatementState::new();
        state.append(&format!("UPDATE {table}"), Vec::new());

        let mut variables = Vec::with_capacity(updates.len());
        let assignments: Vec<String> = updates
            .iter()
            .map(|update| {
                variables.push(QueryVariable::Scalar(update.value.clone()));
                format!("{} = ?", update.field.as_str())
            })
            .collect();
        state.append(&format!("SET {}", assignments.join(", ")), variables);

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
}

impl<F: Field> Statement for UpdateBuilder<F> {
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

impl<F: Field> QueryFilter for UpdateBuilder<F> {
    type Field = F;

    fn state_mut(&mut self) -> &mut StatementState {
        &mut self.state
    }
}

impl<F: Field> Mutation for UpdateBuilder<F> {}
