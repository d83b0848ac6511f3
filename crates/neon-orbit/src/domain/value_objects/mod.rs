//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod goal;
mod screen;
mod theme;

pub use goal::*;
pub use screen::*;
pub use theme::*;
