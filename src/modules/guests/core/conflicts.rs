// Uniqueness checks over the stored rows.
//
// Purpose
// - Decide whether a candidate party, contact or guest collides with an existing row.
//
// Responsibilities
// - Party names are unique across all parties (exact, case sensitive match).
// - Contacts collide when either the email or the phone matches.
// - Guests collide when the name matches and either the party or the contact matches.
// - Every helper can exclude the row being updated, and returns the lowest id on ties so that
//   results do not depend on map iteration order.
// - Never mutate anything.

use crate::modules::guests::core::contact::{Contact, ContactId};
use crate::modules::guests::core::guest::{Guest, GuestId};
use crate::modules::guests::core::party::{Party, PartyId};
use std::collections::BTreeSet;

/// Where a guest would live after a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestScope<'a> {
    pub name: &'a str,
    pub party_id: PartyId,
    pub contact_id: ContactId,
}

impl GuestScope<'_> {
    pub fn collides_with(&self, name: &str, party_id: PartyId, contact_id: ContactId) -> bool {
        self.name == name && (self.party_id == party_id || self.contact_id == contact_id)
    }
}

pub fn find_party_by_name<'a, I>(parties: I, name: &str, exclude: Option<PartyId>) -> Option<&'a Party>
where
    I: IntoIterator<Item = &'a Party>,
{
    parties
        .into_iter()
        .filter(|party| Some(party.id) != exclude)
        .filter(|party| party.name == name)
        .min_by_key(|party| party.id)
}

pub fn find_contact_by_info<'a, I>(
    contacts: I,
    email: &str,
    phone: &str,
    exclude: Option<ContactId>,
) -> Option<&'a Contact>
where
    I: IntoIterator<Item = &'a Contact>,
{
    contacts
        .into_iter()
        .filter(|contact| Some(contact.id) != exclude)
        .filter(|contact| contact.matches_info(email, phone))
        .min_by_key(|contact| contact.id)
}

pub fn find_guest_conflict<'a, I>(guests: I, scope: GuestScope<'_>, exclude: Option<GuestId>) -> Option<&'a Guest>
where
    I: IntoIterator<Item = &'a Guest>,
{
    guests
        .into_iter()
        .filter(|guest| Some(guest.id) != exclude)
        .filter(|guest| scope.collides_with(&guest.name, guest.party_id, guest.contact_id))
        .min_by_key(|guest| guest.id)
}

/// Checks a batch move of `moving` guests into `party_id` against the state the store would be
/// in after the whole batch is applied. Other members of the batch are compared with their new
/// party, so two batch members sharing a name collide with each other.
pub fn find_batch_move_conflict<'a, I>(
    guests: I,
    moving: &BTreeSet<GuestId>,
    party_id: PartyId,
) -> Option<&'a Guest>
where
    I: IntoIterator<Item = &'a Guest>,
    I::IntoIter: Clone,
{
    let guests = guests.into_iter();
    guests
        .clone()
        .filter(|guest| moving.contains(&guest.id))
        .filter_map(|moved| {
            let scope = GuestScope {
                name: &moved.name,
                party_id,
                contact_id: moved.contact_id,
            };
            guests
                .clone()
                .filter(|other| other.id != moved.id)
                .filter(|other| {
                    let other_party = if moving.contains(&other.id) {
                        party_id
                    } else {
                        other.party_id
                    };
                    scope.collides_with(&other.name, other_party, other.contact_id)
                })
                .min_by_key(|other| other.id)
        })
        .min_by_key(|other| other.id)
}
