// Port for storing guests, parties and contacts.
//
// Purpose
// - Describe the store contract without tying callers to a backend.
//
// Responsibilities
// - Every call is atomic on its own. Two calls made in sequence are not.
// - Every read hands out owned copies, never references into the backing storage.
// - Every constraint violation returns a typed error and leaves the store unchanged.
//
// Boundaries
// - Foreign keys are stored as given. Whether a party or contact id points at a live row is
//   not checked here.

use crate::modules::guests::core::contact::{Contact, ContactId};
use crate::modules::guests::core::errors::StoreResult;
use crate::modules::guests::core::guest::{Guest, GuestDraft, GuestId};
use crate::modules::guests::core::party::{Party, PartyId};
use async_trait::async_trait;

#[async_trait]
pub trait GuestRepository: Send + Sync {
    // Parties

    async fn create_party(&self, name: &str, party_size: u32) -> StoreResult<Party>;

    async fn update_party(&self, party_id: PartyId, name: &str, party_size: u32) -> StoreResult<Party>;

    /// Refused with `PartyNotEmpty` while any guest references the party. Never cascades.
    async fn delete_party(&self, party_id: PartyId) -> StoreResult<()>;

    /// Moves every listed guest into the party, or none of them.
    async fn add_guests_to_party(&self, party_id: PartyId, guest_ids: &[GuestId]) -> StoreResult<()>;

    async fn get_party_by_id(&self, party_id: PartyId) -> StoreResult<Party>;

    async fn get_party_by_name(&self, name: &str) -> StoreResult<Party>;

    async fn list_all_parties(&self) -> StoreResult<Vec<Party>>;

    async fn list_guests_by_party(&self, party_id: PartyId) -> StoreResult<Vec<Guest>>;

    // Contacts

    async fn create_guest_contact(
        &self,
        email: &str,
        phone: &str,
        phone_country_code: &str,
    ) -> StoreResult<Contact>;

    async fn update_guest_contact(
        &self,
        contact_id: ContactId,
        email: &str,
        phone: &str,
        phone_country_code: &str,
    ) -> StoreResult<Contact>;

    async fn delete_guest_contact(&self, contact_id: ContactId) -> StoreResult<()>;

    /// First contact, by id, whose email or phone matches.
    async fn find_contact_by_info(&self, email: &str, phone: &str) -> StoreResult<Contact>;

    /// Matches on the email alone. An empty phone on a stored contact never counts as a match.
    async fn find_contact_by_email(&self, email: &str) -> StoreResult<Contact>;

    async fn find_contact_by_phone(&self, phone: &str) -> StoreResult<Contact>;

    async fn get_contact_by_id(&self, contact_id: ContactId) -> StoreResult<Contact>;

    async fn list_guests_for_contact(&self, contact_id: ContactId) -> StoreResult<Vec<Guest>>;

    // Guests

    async fn create_guest(&self, draft: GuestDraft) -> StoreResult<Guest>;

    async fn update_guest(&self, guest_id: GuestId, draft: GuestDraft) -> StoreResult<Guest>;

    async fn delete_guest(&self, guest_id: GuestId) -> StoreResult<()>;

    async fn get_guest_by_id(&self, guest_id: GuestId) -> StoreResult<Guest>;

    /// All or nothing: a single unknown id fails the whole call.
    async fn list_guests_by_ids(&self, guest_ids: &[GuestId]) -> StoreResult<Vec<Guest>>;

    async fn list_all_guests(&self) -> StoreResult<Vec<Guest>>;
}
