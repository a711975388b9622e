use crate::modules::guests::adapters::outbound::guest_repository::GuestRepository;
use crate::modules::guests::adapters::outbound::guest_repository_in_memory::InMemoryGuestRepository;
use crate::modules::guests::core::errors::GuestStoreError;
use crate::modules::guests::use_cases::errors::ApplicationError;
use crate::modules::guests::use_cases::import_guests::handler::ImportGuestsHandler;
use crate::tests::fixtures::import_guests::ImportGuestsBuilder;
use std::sync::Arc;

#[tokio::test]
async fn imports_a_party_and_reuses_it_on_the_next_import() {
    let repository = Arc::new(InMemoryGuestRepository::new());
    let handler = ImportGuestsHandler::new(repository.clone());

    let imported = handler.handle(ImportGuestsBuilder::new().build()).await.unwrap();

    assert_eq!(imported.len(), 3);
    let party = imported[0].party.clone().unwrap();
    assert_eq!(party.name, "Lovelace");
    assert_eq!(party.party_size, 3);
    assert_eq!(imported[0].contact, imported[1].contact);
    assert_ne!(imported[0].contact, imported[2].contact);

    let second = ImportGuestsBuilder::new()
        .without_contactables()
        .contactable("ada@example.com", "5550100", &["Annabella"])
        .build();
    let imported_again = handler.handle(second).await.unwrap();

    assert_eq!(imported_again[0].party, Some(party.clone()));
    assert_eq!(imported_again[0].contact, imported[0].contact);
    assert_eq!(repository.list_all_parties().await.unwrap().len(), 1);
    assert_eq!(
        repository.list_guests_by_party(party.id).await.unwrap().len(),
        4
    );
}

#[tokio::test]
async fn keeps_the_guests_created_before_a_failing_import_step() {
    let repository = Arc::new(InMemoryGuestRepository::new());
    let handler = ImportGuestsHandler::new(repository.clone());
    handler.handle(ImportGuestsBuilder::new().build()).await.unwrap();

    let clashing = ImportGuestsBuilder::new()
        .without_contactables()
        .contactable("grace@example.com", "5550222", &["Grace"])
        .contactable("ada@example.com", "5550100", &["Ada"])
        .build();
    let error = handler.handle(clashing).await.unwrap_err();

    assert!(matches!(
        error,
        ApplicationError::Store(GuestStoreError::GuestAlreadyExists { .. })
    ));
    let names: Vec<_> = repository
        .list_all_guests()
        .await
        .unwrap()
        .into_iter()
        .map(|guest| guest.name)
        .collect();
    assert_eq!(names, ["Ada", "Byron", "Charles", "Grace"]);
}
