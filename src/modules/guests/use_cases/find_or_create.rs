// Find-or-create helpers used by the loading use cases.
//
// Responsibilities
// - Reuse an existing party (by name) or contact (by email or phone) before creating one.
// - Recover from a lost race between the lookup and the create by taking the row carried by the
//   conflict error.

use crate::modules::guests::adapters::outbound::guest_repository::GuestRepository;
use crate::modules::guests::core::contact::Contact;
use crate::modules::guests::core::errors::{GuestStoreError, StoreResult};
use crate::modules::guests::core::party::Party;

pub async fn find_or_create_party<TRepository>(
    repository: &TRepository,
    name: &str,
    party_size: u32,
) -> StoreResult<Party>
where
    TRepository: GuestRepository + ?Sized,
{
    match repository.get_party_by_name(name).await {
        Ok(party) => {
            tracing::info!(party_id = party.id, name, "party already exists, reusing it");
            Ok(party)
        }
        Err(e) if e.is_not_found() => match repository.create_party(name, party_size).await {
            Err(GuestStoreError::PartyAlreadyExists { existing }) => Ok(*existing),
            created => created,
        },
        Err(e) => Err(e),
    }
}

pub async fn find_or_create_contact<TRepository>(
    repository: &TRepository,
    email: &str,
    phone: &str,
    phone_country_code: &str,
) -> StoreResult<Contact>
where
    TRepository: GuestRepository + ?Sized,
{
    match repository.find_contact_by_info(email, phone).await {
        Ok(contact) => {
            tracing::info!(contact_id = contact.id, "contact already exists, reusing it");
            Ok(contact)
        }
        Err(e) if e.is_not_found() => {
            match repository
                .create_guest_contact(email, phone, phone_country_code)
                .await
            {
                Err(GuestStoreError::ContactAlreadyExists { existing }) => Ok(*existing),
                created => created,
            }
        }
        Err(e) => Err(e),
    }
}
