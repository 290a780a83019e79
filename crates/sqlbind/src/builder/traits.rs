//! Shared builder traits: execution plumbing and the query-filter mixin.

use std::sync::Arc;

use crate::clause::Condition;
use crate::error::{Error, Result};
use crate::executor::{Executor, FieldInfo, StatementOutput, WriteMetaData};
use crate::schema::Field;
use crate::statement::StatementState;
use crate::value::QueryVariable;

/// ORDER BY direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// Base trait for all verb builders: read access to the accumulated
/// statement and the dispatch path to the execution capability.
pub trait Statement: Sync {
    /// The accumulated SQL text.
    fn query(&self) -> &str;

    /// Bind values in placeholder order.
    fn variables(&self) -> &[QueryVariable];

    /// The bound execution capability, if any.
    fn executor(&self) -> Option<&Arc<dyn Executor>>;

    /// Hand the current statement to the capability.
    ///
    /// Fails with [`Error::NotConnected`] before any I/O when no capability
    /// is bound. Driver failures pass through untouched in
    /// [`Error::Driver`].
    fn dispatch(
        &self,
    ) -> impl std::future::Future<Output = Result<(StatementOutput, Vec<FieldInfo>)>> + Send {
        async move {
            let executor = self.executor().ok_or(Error::NotConnected)?;
            tracing::debug!(
                query = self.query(),
                bind_values = self.variables().len(),
                "executing statement"
            );
            executor
                .execute(self.query(), self.variables())
                .await
                .map_err(Error::Driver)
        }
    }
}

/// Trait for write builders (INSERT/UPDATE/DELETE).
pub trait Mutation: Statement {
    /// Execute and return the write metadata.
    fn exec(&self) -> impl std::future::Future<Output = Result<WriteMetaData>> + Send {
        async move {
            match self.dispatch().await? {
                (StatementOutput::Write(meta), _fields) => Ok(meta),
                (StatementOutput::Rows(_), _fields) => Err(Error::UnexpectedOutput {
                    expected: "write metadata",
                    got: "rows",
                }),
            }
        }
    }
}

/// Filter mixin shared by SELECT, UPDATE, and DELETE builders.
///
/// Every method appends a fragment; fragments are strictly additive and keep
/// call order. Calling [`filter`] twice appends two independent `WHERE`
/// fragments, it does not merge them.
///
/// [`filter`]: QueryFilter::filter
pub trait QueryFilter: Sized {
    /// The field witness accepted by this builder's filters.
    type Field: Field;

    /// The mutable statement accumulator backing this builder.
    fn state_mut(&mut self) -> &mut StatementState;

    /// Append `WHERE <fragment>` compiled from a leaf clause or an
    /// aggregation tree.
    fn filter(mut self, condition: impl Into<Condition<Self::Field>>) -> Self {
        let (fragment, values) = condition.into().compile();
        self.state_mut().append(&format!("WHERE {fragment}"), values);
        self
    }

    /// Append `ORDER BY <column> <direction>`.
    fn order_by(mut self, column: Self::Field, order: Order) -> Self {
        self.state_mut().append(
            &format!("ORDER BY {} {}", column.as_str(), order.as_str()),
            Vec::new(),
        );
        self
    }

    /// Append `LIMIT <amount>`.
    fn limit(mut self, amount: u64) -> Self {
        self.state_mut().append(&format!("LIMIT {amount}"), Vec::new());
        self
    }
}
