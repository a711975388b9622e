// In memory implementation of the GuestRepository port.
//
// Purpose
// - Hold guests, parties and contacts for the lifetime of the process.
//
// Responsibilities
// - Keep the three tables and their id counters behind one reader/writer lock. Reads share the
//   lock, writes take it exclusively, and each public call is a single critical section.
// - Run every uniqueness and reference check before the first write of a call.
// - Hand out clones so callers can never edit stored rows directly.
// - Assign ids from per table counters starting at 1. Ids are never reused.

use crate::modules::guests::adapters::outbound::guest_repository::GuestRepository;
use crate::modules::guests::core::conflicts::{
    GuestScope, find_batch_move_conflict, find_contact_by_info, find_guest_conflict,
    find_party_by_name,
};
use crate::modules::guests::core::contact::{Contact, ContactId};
use crate::modules::guests::core::errors::{GuestStoreError, StoreResult};
use crate::modules::guests::core::guest::{Guest, GuestDraft, GuestId};
use crate::modules::guests::core::party::{Party, PartyId};
use crate::shared::core::primitives::{EntityId, now};
use std::collections::{BTreeSet, HashMap};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryGuestRepository {
    tables: RwLock<GuestTables>,
}

impl InMemoryGuestRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

struct GuestTables {
    guests: HashMap<GuestId, Guest>,
    parties: HashMap<PartyId, Party>,
    contacts: HashMap<ContactId, Contact>,
    next_guest_id: GuestId,
    next_party_id: PartyId,
    next_contact_id: ContactId,
}

impl Default for GuestTables {
    fn default() -> Self {
        Self {
            guests: HashMap::new(),
            parties: HashMap::new(),
            contacts: HashMap::new(),
            next_guest_id: 1,
            next_party_id: 1,
            next_contact_id: 1,
        }
    }
}

fn take_id(counter: &mut EntityId) -> EntityId {
    let id = *counter;
    *counter += 1;
    id
}

fn sorted_by_id<T, F>(mut rows: Vec<T>, id: F) -> Vec<T>
where
    F: Fn(&T) -> EntityId,
{
    rows.sort_by_key(|row| id(row));
    rows
}

impl GuestTables {
    fn create_party(&mut self, name: &str, party_size: u32) -> StoreResult<Party> {
        if let Some(existing) = find_party_by_name(self.parties.values(), name, None) {
            tracing::debug!(party_id = existing.id, name, "party already exists");
            return Err(GuestStoreError::party_conflict(existing));
        }

        let at = now();
        let party = Party {
            id: take_id(&mut self.next_party_id),
            name: name.to_string(),
            party_size,
            created_at: at,
            updated_at: at,
        };
        self.parties.insert(party.id, party.clone());
        tracing::debug!(party_id = party.id, name, "party created");
        Ok(party)
    }

    fn update_party(&mut self, party_id: PartyId, name: &str, party_size: u32) -> StoreResult<Party> {
        if let Some(existing) = find_party_by_name(self.parties.values(), name, Some(party_id)) {
            tracing::debug!(party_id, conflicting_id = existing.id, name, "party name taken");
            return Err(GuestStoreError::party_conflict(existing));
        }

        let party = self
            .parties
            .get_mut(&party_id)
            .ok_or(GuestStoreError::PartyNotFound(party_id))?;
        party.name = name.to_string();
        party.party_size = party_size;
        party.updated_at = now();
        Ok(party.clone())
    }

    fn delete_party(&mut self, party_id: PartyId) -> StoreResult<()> {
        if !self.parties.contains_key(&party_id) {
            return Err(GuestStoreError::PartyNotFound(party_id));
        }
        if self.guests.values().any(|guest| guest.party_id == party_id) {
            tracing::debug!(party_id, "party still has guests");
            return Err(GuestStoreError::PartyNotEmpty(party_id));
        }

        self.parties.remove(&party_id);
        tracing::debug!(party_id, "party deleted");
        Ok(())
    }

    fn add_guests_to_party(&mut self, party_id: PartyId, guest_ids: &[GuestId]) -> StoreResult<()> {
        if !self.parties.contains_key(&party_id) {
            return Err(GuestStoreError::PartyNotFound(party_id));
        }

        let mut moving = BTreeSet::new();
        for guest_id in guest_ids {
            if !self.guests.contains_key(guest_id) {
                return Err(GuestStoreError::GuestNotFound(*guest_id));
            }
            moving.insert(*guest_id);
        }

        if let Some(existing) = find_batch_move_conflict(self.guests.values(), &moving, party_id) {
            tracing::debug!(party_id, conflicting_id = existing.id, "guest name taken in party");
            return Err(GuestStoreError::guest_conflict(existing));
        }

        let at = now();
        for guest in self
            .guests
            .values_mut()
            .filter(|guest| moving.contains(&guest.id) && guest.party_id != party_id)
        {
            guest.party_id = party_id;
            guest.updated_at = at;
        }
        tracing::debug!(party_id, moved = moving.len(), "guests added to party");
        Ok(())
    }

    fn get_party_by_id(&self, party_id: PartyId) -> StoreResult<Party> {
        self.parties
            .get(&party_id)
            .cloned()
            .ok_or(GuestStoreError::PartyNotFound(party_id))
    }

    fn get_party_by_name(&self, name: &str) -> StoreResult<Party> {
        find_party_by_name(self.parties.values(), name, None)
            .cloned()
            .ok_or_else(|| GuestStoreError::PartyNameNotFound(name.to_string()))
    }

    fn list_all_parties(&self) -> Vec<Party> {
        sorted_by_id(self.parties.values().cloned().collect(), |party| party.id)
    }

    fn list_guests_by_party(&self, party_id: PartyId) -> StoreResult<Vec<Guest>> {
        if !self.parties.contains_key(&party_id) {
            return Err(GuestStoreError::PartyNotFound(party_id));
        }
        Ok(self.guests_where(|guest| guest.party_id == party_id))
    }

    fn create_guest_contact(
        &mut self,
        email: &str,
        phone: &str,
        phone_country_code: &str,
    ) -> StoreResult<Contact> {
        if let Some(existing) = find_contact_by_info(self.contacts.values(), email, phone, None) {
            tracing::debug!(contact_id = existing.id, "contact already exists");
            return Err(GuestStoreError::contact_conflict(existing));
        }

        let at = now();
        let contact = Contact {
            id: take_id(&mut self.next_contact_id),
            email: email.to_string(),
            phone: phone.to_string(),
            phone_country_code: phone_country_code.to_string(),
            created_at: at,
            updated_at: at,
        };
        self.contacts.insert(contact.id, contact.clone());
        tracing::debug!(contact_id = contact.id, "contact created");
        Ok(contact)
    }

    fn update_guest_contact(
        &mut self,
        contact_id: ContactId,
        email: &str,
        phone: &str,
        phone_country_code: &str,
    ) -> StoreResult<Contact> {
        if let Some(existing) =
            find_contact_by_info(self.contacts.values(), email, phone, Some(contact_id))
        {
            tracing::debug!(contact_id, conflicting_id = existing.id, "contact info taken");
            return Err(GuestStoreError::contact_conflict(existing));
        }

        let contact = self
            .contacts
            .get_mut(&contact_id)
            .ok_or(GuestStoreError::ContactNotFound(contact_id))?;
        contact.email = email.to_string();
        contact.phone = phone.to_string();
        contact.phone_country_code = phone_country_code.to_string();
        contact.updated_at = now();
        Ok(contact.clone())
    }

    fn delete_guest_contact(&mut self, contact_id: ContactId) -> StoreResult<()> {
        if !self.contacts.contains_key(&contact_id) {
            return Err(GuestStoreError::ContactNotFound(contact_id));
        }
        if self.guests.values().any(|guest| guest.contact_id == contact_id) {
            tracing::debug!(contact_id, "contact still has guests");
            return Err(GuestStoreError::ContactNotEmpty(contact_id));
        }

        self.contacts.remove(&contact_id);
        tracing::debug!(contact_id, "contact deleted");
        Ok(())
    }

    fn find_contact_by_info(&self, email: &str, phone: &str) -> StoreResult<Contact> {
        find_contact_by_info(self.contacts.values(), email, phone, None)
            .cloned()
            .ok_or_else(|| GuestStoreError::ContactInfoNotFound {
                email: email.to_string(),
                phone: phone.to_string(),
            })
    }

    fn find_contact_where<F>(&self, predicate: F) -> Option<Contact>
    where
        F: Fn(&Contact) -> bool,
    {
        self.contacts
            .values()
            .filter(|&contact| predicate(contact))
            .min_by_key(|contact| contact.id)
            .cloned()
    }

    fn find_contact_by_email(&self, email: &str) -> StoreResult<Contact> {
        self.find_contact_where(|contact| contact.email == email)
            .ok_or_else(|| GuestStoreError::ContactInfoNotFound {
                email: email.to_string(),
                phone: String::new(),
            })
    }

    fn find_contact_by_phone(&self, phone: &str) -> StoreResult<Contact> {
        self.find_contact_where(|contact| contact.phone == phone)
            .ok_or_else(|| GuestStoreError::ContactInfoNotFound {
                email: String::new(),
                phone: phone.to_string(),
            })
    }

    fn get_contact_by_id(&self, contact_id: ContactId) -> StoreResult<Contact> {
        self.contacts
            .get(&contact_id)
            .cloned()
            .ok_or(GuestStoreError::ContactNotFound(contact_id))
    }

    fn list_guests_for_contact(&self, contact_id: ContactId) -> StoreResult<Vec<Guest>> {
        if !self.contacts.contains_key(&contact_id) {
            return Err(GuestStoreError::ContactNotFound(contact_id));
        }
        Ok(self.guests_where(|guest| guest.contact_id == contact_id))
    }

    fn create_guest(&mut self, draft: GuestDraft) -> StoreResult<Guest> {
        let scope = GuestScope {
            name: &draft.name,
            party_id: draft.party_id,
            contact_id: draft.contact_id,
        };
        if let Some(existing) = find_guest_conflict(self.guests.values(), scope, None) {
            tracing::debug!(guest_id = existing.id, name = %draft.name, "guest already exists");
            return Err(GuestStoreError::guest_conflict(existing));
        }

        let guest = Guest::from_draft(take_id(&mut self.next_guest_id), draft, now());
        self.guests.insert(guest.id, guest.clone());
        tracing::debug!(guest_id = guest.id, party_id = guest.party_id, "guest created");
        Ok(guest)
    }

    fn update_guest(&mut self, guest_id: GuestId, draft: GuestDraft) -> StoreResult<Guest> {
        let scope = GuestScope {
            name: &draft.name,
            party_id: draft.party_id,
            contact_id: draft.contact_id,
        };
        if let Some(existing) = find_guest_conflict(self.guests.values(), scope, Some(guest_id)) {
            tracing::debug!(guest_id, conflicting_id = existing.id, "guest name taken");
            return Err(GuestStoreError::guest_conflict(existing));
        }

        let guest = self
            .guests
            .get_mut(&guest_id)
            .ok_or(GuestStoreError::GuestNotFound(guest_id))?;
        guest.apply_draft(draft, now());
        Ok(guest.clone())
    }

    fn delete_guest(&mut self, guest_id: GuestId) -> StoreResult<()> {
        if self.guests.remove(&guest_id).is_none() {
            return Err(GuestStoreError::GuestNotFound(guest_id));
        }
        tracing::debug!(guest_id, "guest deleted");
        Ok(())
    }

    fn get_guest_by_id(&self, guest_id: GuestId) -> StoreResult<Guest> {
        self.guests
            .get(&guest_id)
            .cloned()
            .ok_or(GuestStoreError::GuestNotFound(guest_id))
    }

    fn list_guests_by_ids(&self, guest_ids: &[GuestId]) -> StoreResult<Vec<Guest>> {
        guest_ids
            .iter()
            .map(|guest_id| self.get_guest_by_id(*guest_id))
            .collect()
    }

    fn guests_where<P>(&self, predicate: P) -> Vec<Guest>
    where
        P: Fn(&Guest) -> bool,
    {
        sorted_by_id(
            self.guests.values().filter(|&guest| predicate(guest)).cloned().collect(),
            |guest| guest.id,
        )
    }
}

#[async_trait::async_trait]
impl GuestRepository for InMemoryGuestRepository {
    async fn create_party(&self, name: &str, party_size: u32) -> StoreResult<Party> {
        self.tables.write().await.create_party(name, party_size)
    }

    async fn update_party(&self, party_id: PartyId, name: &str, party_size: u32) -> StoreResult<Party> {
        self.tables.write().await.update_party(party_id, name, party_size)
    }

    async fn delete_party(&self, party_id: PartyId) -> StoreResult<()> {
        self.tables.write().await.delete_party(party_id)
    }

    async fn add_guests_to_party(&self, party_id: PartyId, guest_ids: &[GuestId]) -> StoreResult<()> {
        self.tables.write().await.add_guests_to_party(party_id, guest_ids)
    }

    async fn get_party_by_id(&self, party_id: PartyId) -> StoreResult<Party> {
        self.tables.read().await.get_party_by_id(party_id)
    }

    async fn get_party_by_name(&self, name: &str) -> StoreResult<Party> {
        self.tables.read().await.get_party_by_name(name)
    }

    async fn list_all_parties(&self) -> StoreResult<Vec<Party>> {
        Ok(self.tables.read().await.list_all_parties())
    }

    async fn list_guests_by_party(&self, party_id: PartyId) -> StoreResult<Vec<Guest>> {
        self.tables.read().await.list_guests_by_party(party_id)
    }

    async fn create_guest_contact(
        &self,
        email: &str,
        phone: &str,
        phone_country_code: &str,
    ) -> StoreResult<Contact> {
        self.tables
            .write()
            .await
            .create_guest_contact(email, phone, phone_country_code)
    }

    async fn update_guest_contact(
        &self,
        contact_id: ContactId,
        email: &str,
        phone: &str,
        phone_country_code: &str,
    ) -> StoreResult<Contact> {
        self.tables
            .write()
            .await
            .update_guest_contact(contact_id, email, phone, phone_country_code)
    }

    async fn delete_guest_contact(&self, contact_id: ContactId) -> StoreResult<()> {
        self.tables.write().await.delete_guest_contact(contact_id)
    }

    async fn find_contact_by_info(&self, email: &str, phone: &str) -> StoreResult<Contact> {
        self.tables.read().await.find_contact_by_info(email, phone)
    }

    async fn find_contact_by_email(&self, email: &str) -> StoreResult<Contact> {
        self.tables.read().await.find_contact_by_email(email)
    }

    async fn find_contact_by_phone(&self, phone: &str) -> StoreResult<Contact> {
        self.tables.read().await.find_contact_by_phone(phone)
    }

    async fn get_contact_by_id(&self, contact_id: ContactId) -> StoreResult<Contact> {
        self.tables.read().await.get_contact_by_id(contact_id)
    }

    async fn list_guests_for_contact(&self, contact_id: ContactId) -> StoreResult<Vec<Guest>> {
        self.tables.read().await.list_guests_for_contact(contact_id)
    }

    async fn create_guest(&self, draft: GuestDraft) -> StoreResult<Guest> {
        self.tables.write().await.create_guest(draft)
    }

    async fn update_guest(&self, guest_id: GuestId, draft: GuestDraft) -> StoreResult<Guest> {
        self.tables.write().await.update_guest(guest_id, draft)
    }

    async fn delete_guest(&self, guest_id: GuestId) -> StoreResult<()> {
        self.tables.write().await.delete_guest(guest_id)
    }

    async fn get_guest_by_id(&self, guest_id: GuestId) -> StoreResult<Guest> {
        self.tables.read().await.get_guest_by_id(guest_id)
    }

    async fn list_guests_by_ids(&self, guest_ids: &[GuestId]) -> StoreResult<Vec<Guest>> {
        self.tables.read().await.list_guests_by_ids(guest_ids)
    }

    async fn list_all_guests(&self) -> StoreResult<Vec<Guest>> {
        Ok(self.tables.read().await.guests_where(|_| true))
    }
}
