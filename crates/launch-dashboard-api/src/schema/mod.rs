//! # GraphQL Schema Module
//!
//! Type system for the launch dashboard API.

pub mod enums;
pub mod inputs;
pub mod objects;

// Re-export all types
pub use enums::*;
pub use inputs::*;
pub use objects::*;
