//! ContactStore implementation for PgStorage.

use async_trait::async_trait;
use contactbook_core::{Contact, ContactId, ContactInput};

use super::{CONTACT_COLUMNS, PgStorage, row_to_contact};
use crate::error::StorageError;
use crate::traits::ContactStore;

#[async_trait]
impl ContactStore for PgStorage {
    async fn list_contacts(&self) -> Result<Vec<Contact>, StorageError> {
        // single statement, so the snapshot is consistent
        let rows = sqlx::query(&format!("SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_contact).collect()
    }

    async fn get_contact(&self, id: ContactId) -> Result<Option<Contact>, StorageError> {
        let row = sqlx::query(&format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_contact).transpose()
    }

    async fn create_contact(&self, input: ContactInput) -> Result<Contact, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO contacts (first_name, last_name, email, phone, birthday)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(input.birthday)
        .fetch_one(&self.pool)
        .await?;
        let contact = row_to_contact(&row)?;
        tracing::debug!(id = contact.id, "contact created");
        Ok(contact)
    }

    async fn update_contact(
        &self,
        id: ContactId,
        input: ContactInput,
    ) -> Result<Contact, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE contacts
             SET first_name = $1, last_name = $2, email = $3, phone = $4, birthday = $5,
                 updated_at = NOW()
             WHERE id = $6
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(input.birthday)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => row_to_contact(&row),
            None => Err(StorageError::contact_not_found(id)),
        }
    }

    async fn delete_contact(&self, id: ContactId) -> Result<(), StorageError> {
        let result =
            sqlx::query("DELETE FROM contacts WHERE id = $1").bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::contact_not_found(id));
        }
        tracing::debug!(id, "contact deleted");
        Ok(())
    }

    async fn count_contacts(&self) -> Result<usize, StorageError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM contacts").fetch_one(&self.pool).await?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}
