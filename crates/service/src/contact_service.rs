use std::sync::Arc;

use contactbook_core::{Contact, ContactId, ContactInput, ListQuery, Page, PageLimits, query};
use contactbook_storage::{ContactStore, StorageBackend, StorageError};

use crate::ServiceError;

pub struct ContactService {
    storage: Arc<StorageBackend>,
    limits: PageLimits,
}

impl ContactService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>, limits: PageLimits) -> Self {
        Self { storage, limits }
    }

    pub fn storage_kind(&self) -> &'static str {
        self.storage.kind()
    }

    /// Filters, sorts and pages a snapshot of the store.
    ///
    /// The snapshot is taken first; the store is not touched while the
    /// pipeline runs.
    pub async fn list_contacts(&self, list: &ListQuery) -> Result<Page<Contact>, ServiceError> {
        let snapshot = self.storage.list_contacts().await?;
        let page_spec = list.page_spec(&self.limits);
        let page = query(&snapshot, &list.filter, &list.sort, page_spec)?;
        tracing::debug!(
            snapshot = snapshot.len(),
            total = page.meta.total,
            page = page.meta.page,
            size = page.meta.size,
            "listed contacts"
        );
        Ok(page)
    }

    pub async fn get_contact(&self, id: ContactId) -> Result<Contact, ServiceError> {
        self.storage
            .get_contact(id)
            .await?
            .ok_or_else(|| StorageError::contact_not_found(id).into())
    }

    pub async fn create_contact(&self, input: ContactInput) -> Result<Contact, ServiceError> {
        let input = validated(input)?;
        let contact = self.storage.create_contact(input).await?;
        tracing::info!(id = contact.id, "created contact");
        Ok(contact)
    }

    pub async fn update_contact(
        &self,
        id: ContactId,
        input: ContactInput,
    ) -> Result<Contact, ServiceError> {
        let input = validated(input)?;
        Ok(self.storage.update_contact(id, input).await?)
    }

    pub async fn delete_contact(&self, id: ContactId) -> Result<(), ServiceError> {
        self.storage.delete_contact(id).await?;
        tracing::info!(id, "deleted contact");
        Ok(())
    }
}

fn validated(input: ContactInput) -> Result<ContactInput, ServiceError> {
    let input = input.normalized();
    input.validate().map_err(ServiceError::InvalidInput)?;
    Ok(input)
}
