//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (not found, backend unavailable)
//! instead of downcasting opaque boxes.

use contactbook_core::ContactId;
use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No live record with this id.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Backend can't serve requests (poisoned lock, unreachable database).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// SQL / connection / timeout failure.
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Row data could not be mapped into a domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    pub fn contact_not_found(id: ContactId) -> Self {
        Self::NotFound { entity: "contact", id: id.to_string() }
    }

    /// Whether this error is a missing-record condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Maps a column read failure: undecodable values are corrupt rows, anything
    /// else goes through the regular `sqlx::Error` conversion.
    #[cfg(feature = "postgres")]
    pub fn from_column(column: &str, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => Self::DataCorruption {
                context: format!("contacts.{column}"),
                source: Box::new(err),
            },
            _ => err.into(),
        }
    }
}

/// `RowNotFound` maps to a generic `NotFound`; callers with an id in hand
/// should use [`StorageError::contact_not_found`] instead.
#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", id: "unknown".into() },
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::Unavailable(err.to_string())
            },
            _ => Self::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = StorageError::contact_not_found(42);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "not found: contact with id 42");
    }

    #[cfg(feature = "postgres")]
    #[test]
    fn undecodable_column_is_data_corruption() {
        let decode = sqlx::Error::ColumnDecode {
            index: "\"birthday\"".to_owned(),
            source: "invalid date".into(),
        };
        let err = StorageError::from_column("birthday", decode);
        assert!(matches!(
            err,
            StorageError::DataCorruption { ref context, .. } if context == "contacts.birthday"
        ));
        assert!(!err.is_not_found());

        let missing = StorageError::from_column("birthday", sqlx::Error::RowNotFound);
        assert!(missing.is_not_found());

        let pool = StorageError::from_column("id", sqlx::Error::PoolTimedOut);
        assert!(matches!(pool, StorageError::Unavailable(_)));
    }
}
