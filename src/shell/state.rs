use crate::modules::guests::adapters::outbound::guest_repository::GuestRepository;
use crate::modules::guests::adapters::outbound::guest_repository_in_memory::InMemoryGuestRepository;
use crate::modules::guests::use_cases::import_guests::handler::ImportGuestsHandler;
use crate::modules::guests::use_cases::put_guest::handler::PutGuestHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn GuestRepository>,
    pub import_guests_handler: Arc<ImportGuestsHandler<dyn GuestRepository>>,
    pub put_guest_handler: Arc<PutGuestHandler<dyn GuestRepository>>,
}

impl AppState {
    pub fn new(repository: Arc<dyn GuestRepository>) -> Self {
        Self {
            import_guests_handler: Arc::new(ImportGuestsHandler::new(repository.clone())),
            put_guest_handler: Arc::new(PutGuestHandler::new(repository.clone())),
            repository,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryGuestRepository::new()))
    }
}
