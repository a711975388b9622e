pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod guests {
        pub mod core {
            pub mod conflicts;
            pub mod contact;
            pub mod errors;
            pub mod guest;
            pub mod party;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod find_or_create;
            pub mod hydrate_guest;
            pub mod import_guests {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod put_guest {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_parties {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_contacts {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_guests {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
            }
            pub mod outbound {
                pub mod guest_repository;
                pub mod guest_repository_in_memory;
            }
        }
    }
}

pub mod shell;
