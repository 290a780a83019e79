//! Verb-specific statement builders.
//!
//! Each builder owns one [`StatementState`](crate::statement::StatementState)
//! and composes it from fragments; the shared WHERE/ORDER BY/LIMIT mixin
//! lives in [`traits::QueryFilter`]. Builders chain by value: mutating calls
//! consume and return the builder, so a single instance has a single owner
//! and cannot be mutated from two tasks.

pub mod delete;
pub mod insert;
pub mod select;
pub mod traits;
pub mod update;

pub use delete::DeleteBuilder;
pub use insert::{InsertBuilder, InsertRow};
pub use select::SelectBuilder;
pub use traits::{Mutation, Order, QueryFilter, Statement};
pub use update::{SetClause, UpdateBuilder};
