pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod events;
            pub mod ports;
            pub mod user;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod create_user {
                pub mod attribution;
                pub mod command;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod activation_outbox;
                pub mod authorization;
                pub mod user_store_in_memory;
            }
        }
    }
    pub mod contents {
        pub mod core {
            pub mod headings;
        }
    }
}

pub mod shell;
