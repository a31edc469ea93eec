//! Storage backend trait abstraction.

use async_trait::async_trait;
use contactbook_core::{Contact, ContactId, ContactInput};

use crate::error::StorageError;

/// CRUD operations on contacts.
///
/// Implementations own the records. `list_contacts` must hand back a
/// consistent snapshot: no half-applied write may be visible in it.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Snapshot of every live contact, in ascending id order.
    async fn list_contacts(&self) -> Result<Vec<Contact>, StorageError>;

    /// Get contact by ID.
    async fn get_contact(&self, id: ContactId) -> Result<Option<Contact>, StorageError>;

    /// Insert a contact under a freshly assigned id.
    async fn create_contact(&self, input: ContactInput) -> Result<Contact, StorageError>;

    /// Replace every mutable field. Missing id is `NotFound`, never an insert.
    async fn update_contact(
        &self,
        id: ContactId,
        input: ContactInput,
    ) -> Result<Contact, StorageError>;

    /// Remove a contact. Missing id is `NotFound`.
    async fn delete_contact(&self, id: ContactId) -> Result<(), StorageError>;

    /// Number of live contacts.
    async fn count_contacts(&self) -> Result<usize, StorageError>;
}
