//! Table facade: the entry point producing verb builders.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::builder::{
    DeleteBuilder, InsertBuilder, InsertRow, SelectBuilder, SetClause, UpdateBuilder,
};
use crate::error::Result;
use crate::executor::Executor;
use crate::schema::{JoinField, Schema};

/// A table name paired with an optional execution capability.
///
/// Every builder it produces is bound to the same name and capability. A
/// table without a capability still builds statements; only `exec()` needs
/// one.
pub struct Table<S: Schema> {
    name: String,
    executor: Option<Arc<dyn Executor>>,
    marker: PhantomData<S>,
}

impl<S: Schema> Table<S> {
    /// Create a table with no execution capability.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            executor: None,
            marker: PhantomData,
        }
    }

    /// Create a table bound to an execution capability.
    pub fn connected(name: impl Into<String>, executor: Arc<dyn Executor>) -> Self {
        Self {
            name: name.into(),
            executor: Some(executor),
            marker: PhantomData,
        }
    }

    /// The table name, as referenced by `inner_join`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prepare a SELECT of the given fields, or `*` when empty.
    pub fn select(&self, fields: &[S::Field]) -> SelectBuilder<S::Field> {
        SelectBuilder::with_executor(&self.name, fields, self.executor.clone())
    }

    /// Prepare a SELECT whose field witness also covers table `J`, for use
    /// with [`SelectBuilder::inner_join`].
    pub fn select_joined<J: Schema>(
        &self,
        fields: &[JoinField<S::Field, J::Field>],
    ) -> SelectBuilder<JoinField<S::Field, J::Field>> {
        SelectBuilder::with_executor(&self.name, fields, self.executor.clone())
    }

    /// Prepare a batch INSERT. Fails on an empty batch.
    pub fn insert(&self, rows: Vec<InsertRow<S::WriteField>>) -> Result<InsertBuilder> {
        InsertBuilder::with_executor(&self.name, rows, self.executor.clone())
    }

    /// Prepare a single-row INSERT.
    pub fn insert_one(&self, row: InsertRow<S::WriteField>) -> InsertBuilder {
        InsertBuilder::single_with_executor(&self.name, row, self.executor.clone())
    }

    /// Prepare an UPDATE from a list of assignments. Fails on an empty list.
    pub fn update(&self, updates: Vec<SetClause<S::WriteField>>) -> Result<UpdateBuilder<S::Field>> {
        UpdateBuilder::with_executor(&self.name, updates, self.executor.clone())
    }

    /// Prepare an UPDATE from a single assignment.
    pub fn update_one(&self, update: SetClause<S::WriteField>) -> UpdateBuilder<S::Field> {
        UpdateBuilder::single_with_executor(&self.name, update, self.executor.clone())
    }

    /// Prepare a DELETE.
    pub fn delete(&self) -> DeleteBuilder<S::Field> {
        DeleteBuilder::with_executor(&self.name, self.executor.clone())
    }
}

impl<S: Schema> Clone for Table<S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            executor: self.executor.clone(),
            marker: PhantomData,
        }
    }
}
