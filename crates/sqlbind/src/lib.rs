//! # sqlbind
//!
//! A typed, parameter-binding SQL statement builder.
//!
//! ## Features
//!
//! - **Typed columns**: tables are described by witness enums, so a filter
//!   on an undeclared column is a compile error, not a runtime surprise
//! - **Parameter-safe**: values never appear in the SQL text; every bound
//!   value travels in an ordered list matching the `?` placeholders one to
//!   one, including values from arbitrarily nested `AND`/`OR` trees
//! - **Additive builders**: every chained call appends a fragment in call
//!   order; owned-`self` chaining keeps each builder single-owner
//! - **Abstract execution**: statements reach a database only through the
//!   [`Executor`] capability, which a driver, pool, or test double supplies
//!
//! ## Example
//!
//! ```ignore
//! use sqlbind::{Clause, Field, InsertRow, Order, QueryFilter, Schema, Table};
//!
//! struct User;
//!
//! #[derive(Clone, Copy)]
//! enum UserField { Id, Username, Active }
//!
//! impl Field for UserField {
//!     fn as_str(&self) -> &'static str {
//!         match self {
//!             UserField::Id => "id",
//!             UserField::Username => "username",
//!             UserField::Active => "active",
//!         }
//!     }
//! }
//!
//! #[derive(Clone, Copy)]
//! enum UserData { Username, Active }
//! # // Field impl elided
//!
//! impl Schema for User {
//!     type Field = UserField;
//!     type WriteField = UserData;
//! }
//!
//! let users: Table<User> = Table::connected("users", pool);
//!
//! // SELECT username FROM users WHERE active = ? ORDER BY username ASC LIMIT 10
//! let rows = users
//!     .select(&[UserField::Username])
//!     .filter(Clause::eq(UserField::Active, true))
//!     .order_by(UserField::Username, Order::Asc)
//!     .limit(10)
//!     .exec()
//!     .await?;
//!
//! // INSERT INTO users (username, active) VALUES (?, ?)
//! let meta = users
//!     .insert_one(InsertRow::new().set(UserData::Username, "alice").set(UserData::Active, true))
//!     .exec()
//!     .await?;
//! ```

pub mod builder;
pub mod clause;
pub mod error;
pub mod executor;
pub mod schema;
pub mod statement;
pub mod table;
pub mod value;

pub use builder::{
    DeleteBuilder, InsertBuilder, InsertRow, Mutation, Order, QueryFilter, SelectBuilder,
    SetClause, Statement, UpdateBuilder,
};
pub use clause::{Aggregation, Chain, Clause, Comparator, Condition, Operator};
pub use error::{DriverError, Error, Result};
pub use executor::{Executor, FieldInfo, Row, StatementOutput, WriteMetaData};
pub use schema::{Field, JoinField, Schema};
pub use statement::StatementState;
pub use table::Table;
pub use value::{QueryVariable, Value};
