//! Adapters
//!
//! Concrete implementations of the ports.

mod file_store;
mod memory_store;
mod rng_source;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use rng_source::{DefaultRandom, RngSource};
