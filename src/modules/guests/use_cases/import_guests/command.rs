// Command data type for loading a whole party of guests at once.
//
// Purpose
// - Express "this party, these contacts, these guests per contact" in one request.
//
// Responsibilities
// - Carry input data only. Independent of the transport layer.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportGuests {
    pub party: ImportParty,
    pub contactables: Vec<ImportContactable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportParty {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportContactable {
    pub contact: ImportContact,
    pub guests: Vec<ImportGuest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportContact {
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub phone_country_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportGuest {
    pub name: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub attending: bool,
}

impl ImportGuests {
    pub fn guest_count(&self) -> usize {
        self.contactables
            .iter()
            .map(|contactable| contactable.guests.len())
            .sum()
    }
}
