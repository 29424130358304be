pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod resource_store;
    }
}

pub mod modules {
    pub mod books {
        pub mod core {
            pub mod book;
            pub mod book_patch;
            pub mod service_type;
        }
        pub mod use_cases {
            pub mod book_handler;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
        }
    }
}

pub mod shell;
