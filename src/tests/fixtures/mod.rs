pub mod guests;
pub mod import_guests;
