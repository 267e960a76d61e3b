//! In-memory backend for the Rota relief store.
//!
//! All state lives behind one `tokio::sync::RwLock`, so every mutating
//! operation is an atomic read-modify-write and concurrent transitions on
//! the same request or slot serialise cleanly.

mod store;

pub mod seed;

pub use store::MemStore;

#[cfg(test)]
mod tests;
