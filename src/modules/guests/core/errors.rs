// Typed failures of the guest store.
//
// Categories
// - Not found: the referenced id does not exist.
// - Already exists: a uniqueness rule would be broken. The conflicting row is always carried
//   along so that "create if missing" callers can reuse it.
// - Not empty: a delete was refused because guests still reference the row.

use crate::modules::guests::core::contact::{Contact, ContactId};
use crate::modules::guests::core::guest::{Guest, GuestId};
use crate::modules::guests::core::party::{Party, PartyId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuestStoreError {
    #[error("party not found: {0}")]
    PartyNotFound(PartyId),

    #[error("party not found: {0:?}")]
    PartyNameNotFound(String),

    #[error("guest not found: {0}")]
    GuestNotFound(GuestId),

    #[error("contact not found: {0}")]
    ContactNotFound(ContactId),

    #[error("contact not found for email {email:?} or phone {phone:?}")]
    ContactInfoNotFound { email: String, phone: String },

    #[error("party already exists: {:?}", existing.name)]
    PartyAlreadyExists { existing: Box<Party> },

    #[error("guest already exists: {:?} (id {})", existing.name, existing.id)]
    GuestAlreadyExists { existing: Box<Guest> },

    #[error("contact already exists (id {})", existing.id)]
    ContactAlreadyExists { existing: Box<Contact> },

    #[error("party not empty: {0}")]
    PartyNotEmpty(PartyId),

    #[error("contact not empty: {0}")]
    ContactNotEmpty(ContactId),
}

pub type StoreResult<T> = Result<T, GuestStoreError>;

impl GuestStoreError {
    pub fn party_conflict(existing: &Party) -> Self {
        Self::PartyAlreadyExists {
            existing: Box::new(existing.clone()),
        }
    }

    pub fn guest_conflict(existing: &Guest) -> Self {
        Self::GuestAlreadyExists {
            existing: Box::new(existing.clone()),
        }
    }

    pub fn contact_conflict(existing: &Contact) -> Self {
        Self::ContactAlreadyExists {
            existing: Box::new(existing.clone()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PartyNotFound(_)
                | Self::PartyNameNotFound(_)
                | Self::GuestNotFound(_)
                | Self::ContactNotFound(_)
                | Self::ContactInfoNotFound { .. }
        )
    }

    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::PartyAlreadyExists { .. }
                | Self::GuestAlreadyExists { .. }
                | Self::ContactAlreadyExists { .. }
        )
    }

    pub fn is_not_empty(&self) -> bool {
        matches!(self, Self::PartyNotEmpty(_) | Self::ContactNotEmpty(_))
    }
}
