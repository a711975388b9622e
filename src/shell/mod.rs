// Composition root for the guest list service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the store backend selected by the config.
// - Wire the store into use case handlers and the HTTP router.

pub mod config;
pub mod http;
pub mod state;
