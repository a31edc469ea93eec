use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised by the query pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A filter or sort referenced an attribute the record schema doesn't have.
    #[error("unknown field: {field}")]
    UnknownField { field: String },
}

impl QueryError {
    pub fn unknown_field(field: &str) -> Self {
        Self::UnknownField { field: field.to_owned() }
    }
}

pub type Result<T> = StdResult<T, QueryError>;
