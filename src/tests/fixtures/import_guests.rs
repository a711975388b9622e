// Shared test fixture for the ImportGuests command.
//
// The default command loads the "Lovelace" party: Ada and Byron share one contact, Charles has a
// separate one.

use crate::modules::guests::use_cases::import_guests::command::{
    ImportContact, ImportContactable, ImportGuest, ImportGuests, ImportParty,
};

pub struct ImportGuestsBuilder {
    inner: ImportGuests,
}

impl Default for ImportGuestsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn guest(name: &str, attending: bool) -> ImportGuest {
    ImportGuest {
        name: name.to_string(),
        alias: String::new(),
        attending,
    }
}

#[allow(dead_code)]
impl ImportGuestsBuilder {
    pub fn new() -> Self {
        Self {
            inner: ImportGuests {
                party: ImportParty {
                    name: "Lovelace".to_string(),
                },
                contactables: vec![
                    ImportContactable {
                        contact: ImportContact {
                            email: "ada@example.com".to_string(),
                            phone: "5550100".to_string(),
                            phone_country_code: "+44".to_string(),
                        },
                        guests: vec![guest("Ada", true), guest("Byron", false)],
                    },
                    ImportContactable {
                        contact: ImportContact {
                            email: "babbage@example.com".to_string(),
                            phone: "5550199".to_string(),
                            phone_country_code: "+44".to_string(),
                        },
                        guests: vec![guest("Charles", true)],
                    },
                ],
            },
        }
    }

    pub fn party_name(mut self, v: impl Into<String>) -> Self {
        self.inner.party.name = v.into();
        self
    }

    pub fn without_contactables(mut self) -> Self {
        self.inner.contactables.clear();
        self
    }

    pub fn contactable(mut self, email: &str, phone: &str, guest_names: &[&str]) -> Self {
        self.inner.contactables.push(ImportContactable {
            contact: ImportContact {
                email: email.to_string(),
                phone: phone.to_string(),
                phone_country_code: String::new(),
            },
            guests: guest_names.iter().map(|name| guest(name, false)).collect(),
        });
        self
    }

    pub fn build(self) -> ImportGuests {
        self.inner
    }
}

#[cfg(test)]
mod import_guests_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_builds_three_guests_over_two_contacts() {
        let command = ImportGuestsBuilder::default().build();
        assert_eq!(command.party.name, "Lovelace");
        assert_eq!(command.contactables.len(), 2);
        assert_eq!(command.guest_count(), 3);
    }

    #[rstest]
    fn setters_override_the_party_and_contactables() {
        let command = ImportGuestsBuilder::new()
            .party_name("Hopper")
            .without_contactables()
            .contactable("grace@example.com", "5550123", &["Grace", "Walter"])
            .build();
        assert_eq!(command.party.name, "Hopper");
        assert_eq!(command.guest_count(), 2);
        assert_eq!(command.contactables[0].contact.email, "grace@example.com");
    }
}
