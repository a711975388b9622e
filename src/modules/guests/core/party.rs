// A named group of guests sharing an invite.
//
// Responsibilities
// - Carry the party name, which is unique across all parties.
// - Carry the party size, a capacity hint that is never enforced against the guest count.

use crate::shared::core::primitives::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

pub type PartyId = EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    pub party_size: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
