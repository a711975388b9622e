// An individual attendee, linked to one party and one contact by id.
//
// Purpose
// - Represent the stored guest row. Related parties and contacts are referenced by value,
//   attaching them is the caller's job (see hydrated_guest).
//
// Responsibilities
// - Carry the guest fields and the draft shape used to create or update a guest.

use crate::modules::guests::core::contact::ContactId;
use crate::modules::guests::core::party::PartyId;
use crate::shared::core::primitives::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

pub type GuestId = EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    pub alias: String,
    pub contact_id: ContactId,
    pub party_id: PartyId,
    pub attending: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Caller supplied fields of a guest, without identity or timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDraft {
    pub name: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub contact_id: ContactId,
    #[serde(default)]
    pub party_id: PartyId,
    #[serde(default)]
    pub attending: bool,
}

impl Guest {
    pub fn from_draft(id: GuestId, draft: GuestDraft, at: Timestamp) -> Self {
        Self {
            id,
            name: draft.name,
            alias: draft.alias,
            contact_id: draft.contact_id,
            party_id: draft.party_id,
            attending: draft.attending,
            created_at: at,
            updated_at: at,
        }
    }

    pub fn apply_draft(&mut self, draft: GuestDraft, at: Timestamp) {
        self.name = draft.name;
        self.alias = draft.alias;
        self.contact_id = draft.contact_id;
        self.party_id = draft.party_id;
        self.attending = draft.attending;
        self.updated_at = at;
    }
}
