//! Execution capability boundary.
//!
//! The builders never talk to a database themselves; they hand the finished
//! query text and bind list to an [`Executor`] supplied by the caller (a
//! driver, a pool, a test double). Result rows pass through untouched.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DriverError;
use crate::value::QueryVariable;

/// A result row, passed through from the capability without deserialization.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Per-column metadata returned alongside a result set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Summary of a non-read statement's effect, returned instead of rows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteMetaData {
    pub affected_rows: u64,
    pub insert_id: u64,
    pub field_count: u64,
    pub info: String,
    pub server_status: u16,
    pub warning_status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed_rows: Option<u64>,
}

/// What an execution capability resolved to: rows for a read statement,
/// write metadata for everything else.
#[derive(Clone, Debug, PartialEq)]
pub enum StatementOutput {
    Rows(Vec<Row>),
    Write(WriteMetaData),
}

/// The single abstract capability through which statements reach a database.
///
/// Implementations own their concurrency, queuing, and timeout discipline;
/// the builders issue exactly one `execute` call per `exec()` and never
/// retry.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Transmit SQL text with `?` placeholders and its ordered bind values.
    async fn execute(
        &self,
        query: &str,
        variables: &[QueryVariable],
    ) -> std::result::Result<(StatementOutput, Vec<FieldInfo>), DriverError>;
}
