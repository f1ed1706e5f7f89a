// file: src/client/mod.rs
// description: backend http client module exports

pub mod backend;

pub use backend::BackendClient;
