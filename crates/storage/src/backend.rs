//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use contactbook_core::{Contact, ContactId, ContactInput};

use crate::error::StorageError;
use crate::memory::InMemoryStore;
use crate::traits::ContactStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Memory(s) => <InMemoryStore as ContactStore>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as ContactStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Memory(InMemoryStore),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    pub fn in_memory() -> Self {
        Self::Memory(InMemoryStore::new())
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

impl From<InMemoryStore> for StorageBackend {
    fn from(store: InMemoryStore) -> Self {
        Self::Memory(store)
    }
}

#[async_trait]
impl ContactStore for StorageBackend {
    async fn list_contacts(&self) -> Result<Vec<Contact>, StorageError> {
        dispatch!(self, list_contacts())
    }

    async fn get_contact(&self, id: ContactId) -> Result<Option<Contact>, StorageError> {
        dispatch!(self, get_contact(id))
    }

    async fn create_contact(&self, input: ContactInput) -> Result<Contact, StorageError> {
        dispatch!(self, create_contact(input))
    }

    async fn update_contact(
        &self,
        id: ContactId,
        input: ContactInput,
    ) -> Result<Contact, StorageError> {
        dispatch!(self, update_contact(id, input))
    }

    async fn delete_contact(&self, id: ContactId) -> Result<(), StorageError> {
        dispatch!(self, delete_contact(id))
    }

    async fn count_contacts(&self) -> Result<usize, StorageError> {
        dispatch!(self, count_contacts())
    }
}
