//! Repository Ports
//!
//! Abstract interfaces for persistence.

mod key_value_store;

pub use key_value_store::*;
