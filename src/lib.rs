// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod core {
    pub mod cart;
    pub mod ports;
}

pub mod application {
    pub mod cart_manager;
    pub mod errors;
}

pub mod adapters {
    pub mod http_catalog;
    pub mod json_file_store;
    pub mod in_memory {
        pub mod in_memory_cart_store;
        pub mod in_memory_catalog;
    }
}

pub mod shell;
