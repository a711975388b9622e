// Bulk import handler orchestrates loading a party of guests.
//
// Responsibilities
// - Size the party after the total number of guests in the command.
// - Find or create the party, then find or create each contact, then create its guests.
// - Return every created guest hydrated with its party and contact.
//
// Boundaries
// - Each store call is atomic, the import as a whole is not. Guests created before a failing
//   call stay in the store.

use crate::modules::guests::adapters::outbound::guest_repository::GuestRepository;
use crate::modules::guests::core::guest::GuestDraft;
use crate::modules::guests::use_cases::errors::ApplicationError;
use crate::modules::guests::use_cases::find_or_create::{find_or_create_contact, find_or_create_party};
use crate::modules::guests::use_cases::hydrate_guest::HydratedGuest;
use crate::modules::guests::use_cases::import_guests::command::ImportGuests;
use std::sync::Arc;

pub struct ImportGuestsHandler<TRepository>
where
    TRepository: GuestRepository + ?Sized + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> ImportGuestsHandler<TRepository>
where
    TRepository: GuestRepository + ?Sized + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: ImportGuests) -> Result<Vec<HydratedGuest>, ApplicationError> {
        if command.party.name.trim().is_empty() {
            return Err(ApplicationError::Validation("party name is required".into()));
        }
        let total = command.guest_count();
        if total == 0 {
            return Err(ApplicationError::Validation(
                "an import needs at least one guest".into(),
            ));
        }
        let party_size = u32::try_from(total)
            .map_err(|_| ApplicationError::Validation("too many guests in one import".into()))?;

        let party = find_or_create_party(&*self.repository, &command.party.name, party_size).await?;

        let mut imported = Vec::with_capacity(total);
        for contactable in command.contactables {
            let contact = find_or_create_contact(
                &*self.repository,
                &contactable.contact.email,
                &contactable.contact.phone,
                &contactable.contact.phone_country_code,
            )
            .await?;

            for guest in contactable.guests {
                let guest = self
                    .repository
                    .create_guest(GuestDraft {
                        name: guest.name,
                        alias: guest.alias,
                        contact_id: contact.id,
                        party_id: party.id,
                        attending: guest.attending,
                    })
                    .await?;
                imported.push(HydratedGuest {
                    guest,
                    party: Some(party.clone()),
                    contact: Some(contact.clone()),
                });
            }
        }

        tracing::info!(party_id = party.id, imported = imported.len(), "guests imported");
        Ok(imported)
    }
}
