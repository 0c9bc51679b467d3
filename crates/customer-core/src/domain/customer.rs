//! Customer Entity
//!
//! A customer starts life as a draft (no id) and receives its id from the
//! remote store once created.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the remote store
pub type CustomerId = i64;

/// A customer record as exchanged with the remote store
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    /// Absent until the remote store assigns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

/// The server may hand back `null` for an unset text column
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Customer {
    /// A persisted customer
    pub fn new(id: CustomerId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            email: email.into(),
        }
    }

    /// A customer not yet known to the remote store
    pub fn draft(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn is_draft(&self) -> bool {
        self.id.is_none()
    }

    /// Both name and email are filled in.
    ///
    /// Only emptiness is checked; whitespace-only values pass.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }

    /// Copy of this record without its id, suitable for a create request
    pub fn to_draft(&self) -> Self {
        Self::draft(self.name.clone(), self.email.clone())
    }
}
