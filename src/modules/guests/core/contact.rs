// Reachability information shared by one or more guests.
//
// Responsibilities
// - No two contacts share an email, and no two contacts share a phone number.

use crate::shared::core::primitives::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

pub type ContactId = EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub email: String,
    pub phone: String,
    pub phone_country_code: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Contact {
    /// True when either the email or the phone collides with this contact.
    pub fn matches_info(&self, email: &str, phone: &str) -> bool {
        self.email == email || self.phone == phone
    }
}
