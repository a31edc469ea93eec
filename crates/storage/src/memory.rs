//! In-memory contact store guarded by a single lock.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use contactbook_core::{Contact, ContactId, ContactInput};

use crate::error::StorageError;
use crate::traits::ContactStore;

#[derive(Debug)]
struct Records {
    contacts: BTreeMap<ContactId, Contact>,
    /// Next id to hand out. Only ever grows, so deleted ids are not reused.
    next_id: ContactId,
}

/// `BTreeMap`-backed store for development and tests.
///
/// Writes are serialized by the write lock. Readers clone a snapshot under
/// the read lock and release it before any filtering or sorting runs.
#[derive(Clone, Debug)]
pub struct InMemoryStore {
    records: Arc<RwLock<Records>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self { records: Arc::new(RwLock::new(Records { contacts: BTreeMap::new(), next_id: 1 })) }
    }

    /// Store pre-populated with `inputs`, ids assigned from 1 in order.
    pub fn with_contacts(inputs: impl IntoIterator<Item = ContactInput>) -> Self {
        let mut records = Records { contacts: BTreeMap::new(), next_id: 1 };
        for input in inputs {
            let contact = Contact::from_input(records.next_id, input);
            records.contacts.insert(contact.id, contact);
            records.next_id += 1;
        }
        Self { records: Arc::new(RwLock::new(records)) }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, StorageError> {
        self.records.read().map_err(|_| StorageError::Unavailable("lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, StorageError> {
        self.records.write().map_err(|_| StorageError::Unavailable("lock poisoned".into()))
    }
}

#[async_trait]
impl ContactStore for InMemoryStore {
    async fn list_contacts(&self) -> Result<Vec<Contact>, StorageError> {
        Ok(self.read()?.contacts.values().cloned().collect())
    }

    async fn get_contact(&self, id: ContactId) -> Result<Option<Contact>, StorageError> {
        Ok(self.read()?.contacts.get(&id).cloned())
    }

    async fn create_contact(&self, input: ContactInput) -> Result<Contact, StorageError> {
        let mut records = self.write()?;
        let id = records.next_id;
        records.next_id = id
            .checked_add(1)
            .ok_or_else(|| StorageError::Unavailable("contact id space exhausted".into()))?;
        let contact = Contact::from_input(id, input);
        records.contacts.insert(id, contact.clone());
        tracing::debug!(id, "contact created");
        Ok(contact)
    }

    async fn update_contact(
        &self,
        id: ContactId,
        input: ContactInput,
    ) -> Result<Contact, StorageError> {
        let mut records = self.write()?;
        let slot =
            records.contacts.get_mut(&id).ok_or_else(|| StorageError::contact_not_found(id))?;
        *slot = Contact::from_input(id, input);
        Ok(slot.clone())
    }

    async fn delete_contact(&self, id: ContactId) -> Result<(), StorageError> {
        let mut records = self.write()?;
        records.contacts.remove(&id).ok_or_else(|| StorageError::contact_not_found(id))?;
        tracing::debug!(id, "contact deleted");
        Ok(())
    }

    async fn count_contacts(&self) -> Result<usize, StorageError> {
        Ok(self.read()?.contacts.len())
    }
}
