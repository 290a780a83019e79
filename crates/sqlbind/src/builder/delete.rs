use std::marker::PhantomData;
use std::sync::Arc;

use super::traits::{Mutation, QueryFilter, Statement};
use crate::executor::Executor;
use crate::schema::Field;
use crate::statement::StatementState;
use crate::value::QueryVariable;

/// DELETE statement builder.
pub struct DeleteBuilder<F: Field> {
    state: StatementState,
    executor: Option<Arc<dyn Executor>>,
    marker: PhantomData<F>,
}

impl<F: Field> DeleteBuilder<F> {
    /// Create an unbound builder.
    pub fn new(table: &str) -> Self {
        Self::with_executor(table, None)
    }

    pub(crate) fn with_executor(table: &str, executor: Option<Arc<dyn Executor>>) -> Self {
        let mut state = StatementState::new();
        state.append(&format!("DELETE FROM {table}"), Vec::new());
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

impl<F: Field> Statement for DeleteBuilder<F> {
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

impl<F: Field> QueryFilter for DeleteBuilder<F> {
    type Field = F;

    fn state_mut(&mut self) -> &mut StatementState {
        &mut self.state
    }
}

impl<F: Field> Mutation for DeleteBuilder<F> {}
