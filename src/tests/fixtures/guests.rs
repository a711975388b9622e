// Shared test fixture for guest drafts.

use crate::modules::guests::core::contact::ContactId;
use crate::modules::guests::core::guest::GuestDraft;
use crate::modules::guests::core::party::PartyId;

pub struct GuestDraftBuilder {
    inner: GuestDraft,
}

impl Default for GuestDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl GuestDraftBuilder {
    pub fn new() -> Self {
        Self {
            inner: GuestDraft {
                name: "Teddy Test".to_string(),
                alias: "Ted".to_string(),
                contact_id: 0,
                party_id: 0,
                attending: false,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn alias(mut self, v: impl Into<String>) -> Self {
        self.inner.alias = v.into();
        self
    }

    pub fn contact_id(mut self, v: ContactId) -> Self {
        self.inner.contact_id = v;
        self
    }

    pub fn party_id(mut self, v: PartyId) -> Self {
        self.inner.party_id = v;
        self
    }

    pub fn attending(mut self, v: bool) -> Self {
        self.inner.attending = v;
        self
    }

    pub fn build(self) -> GuestDraft {
        self.inner
    }
}

#[cfg(test)]
mod guest_draft_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        assert_eq!(GuestDraftBuilder::default().build(), GuestDraftBuilder::new().build());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let draft = GuestDraftBuilder::new()
            .name("Ada")
            .alias("Countess")
            .contact_id(2)
            .party_id(3)
            .attending(true)
            .build();

        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.alias, "Countess");
        assert_eq!(draft.contact_id, 2);
        assert_eq!(draft.party_id, 3);
        assert!(draft.attending);
    }
}
