// Attach the party and contact a guest points at.
//
// Purpose
// - Presentation helper. The store keeps foreign keys by value and never hydrates.
//
// Responsibilities
// - Unset or dangling foreign keys hydrate to None instead of failing.

use crate::modules::guests::adapters::outbound::guest_repository::GuestRepository;
use crate::modules::guests::core::contact::Contact;
use crate::modules::guests::core::errors::StoreResult;
use crate::modules::guests::core::guest::Guest;
use crate::modules::guests::core::party::Party;
use crate::shared::core::primitives::UNSET_ID;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HydratedGuest {
    #[serde(flatten)]
    pub guest: Guest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<Party>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

impl From<Guest> for HydratedGuest {
    fn from(guest: Guest) -> Self {
        Self {
            guest,
            party: None,
            contact: None,
        }
    }
}

fn found<T>(result: StoreResult<T>) -> StoreResult<Option<T>> {
    match result {
        Ok(row) => Ok(Some(row)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn hydrate_guest<TRepository>(repository: &TRepository, guest: Guest) -> StoreResult<HydratedGuest>
where
    TRepository: GuestRepository + ?Sized,
{
    let party = match guest.party_id {
        UNSET_ID => None,
        party_id => found(repository.get_party_by_id(party_id).await)?,
    };
    let contact = match guest.contact_id {
        UNSET_ID => None,
        contact_id => found(repository.get_contact_by_id(contact_id).await)?,
    };
    Ok(HydratedGuest {
        guest,
        party,
        contact,
    })
}
