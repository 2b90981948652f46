//! Combat systems

pub mod interaction;
pub mod removal;


// Re-export all systems
pub use interaction::*;
pub use removal::*;
