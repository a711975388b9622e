// Command data type for entering a single guest together with its party and contact.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutGuest {
    pub party_name: String,
    #[serde(default)]
    pub party_size: u32,
    pub guest_name: String,
    #[serde(default)]
    pub guest_alias: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub phone_country_code: String,
    #[serde(default)]
    pub attending: bool,
}
