//! Service Ports
//!
//! Abstract interfaces for capabilities the core consumes.

mod random_source;

pub use random_source::*;
