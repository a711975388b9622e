// Single guest entry handler.
//
// Responsibilities
// - Find or create the party and the contact named in the command.
// - Create the guest in that party and contact.
// - When the same name already sits in that exact party and contact, update that guest instead,
//   so repeating the call is harmless. Any other name clash is reported.

use crate::modules::guests::adapters::outbound::guest_repository::GuestRepository;
use crate::modules::guests::core::errors::GuestStoreError;
use crate::modules::guests::core::guest::GuestDraft;
use crate::modules::guests::use_cases::errors::ApplicationError;
use crate::modules::guests::use_cases::find_or_create::{find_or_create_contact, find_or_create_party};
use crate::modules::guests::use_cases::hydrate_guest::HydratedGuest;
use crate::modules::guests::use_cases::put_guest::command::PutGuest;
use std::sync::Arc;

pub struct PutGuestHandler<TRepository>
where
    TRepository: GuestRepository + ?Sized + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> PutGuestHandler<TRepository>
where
    TRepository: GuestRepository + ?Sized + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: PutGuest) -> Result<HydratedGuest, ApplicationError> {
        if command.party_name.trim().is_empty() {
            return Err(ApplicationError::Validation("party name is required".into()));
        }
        if command.guest_name.trim().is_empty() {
            return Err(ApplicationError::Validation("guest name is required".into()));
        }

        let party =
            find_or_create_party(&*self.repository, &command.party_name, command.party_size).await?;
        let contact = find_or_create_contact(
            &*self.repository,
            &command.email,
            &command.phone,
            &command.phone_country_code,
        )
        .await?;

        let draft = GuestDraft {
            name: command.guest_name,
            alias: command.guest_alias,
            contact_id: contact.id,
            party_id: party.id,
            attending: command.attending,
        };
        let guest = match self.repository.create_guest(draft.clone()).await {
            Ok(guest) => guest,
            Err(GuestStoreError::GuestAlreadyExists { existing })
                if existing.party_id == party.id && existing.contact_id == contact.id =>
            {
                tracing::info!(guest_id = existing.id, "guest already entered, updating it");
                self.repository.update_guest(existing.id, draft).await?
            }
            Err(e) => return Err(e.into()),
        };

        Ok(HydratedGuest {
            guest,
            party: Some(party),
            contact: Some(contact),
        })
    }
}
