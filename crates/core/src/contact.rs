//! Contact record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned contact identifier.
pub type ContactId = i64;

/// A single contact entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique identifier, assigned by the store on insert and never changed.
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Serialized as `YYYY-MM-DD`.
    pub birthday: NaiveDate,
}

impl Contact {
    #[must_use]
    pub fn from_input(id: ContactId, input: ContactInput) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            birthday: input.birthday,
        }
    }
}

/// Body of create and update requests: every mutable field of a [`Contact`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub birthday: NaiveDate,
}

impl ContactInput {
    /// Returns a copy with surrounding whitespace trimmed from string fields.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            birthday: self.birthday,
        }
    }

    /// Checks required fields. The error message is safe to show to callers.
    pub fn validate(&self) -> Result<(), String> {
        let required =
            [("firstName", &self.first_name), ("lastName", &self.last_name), ("email", &self.email)];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(format!("{name} must not be empty"));
            }
        }
        Ok(())
    }
}
