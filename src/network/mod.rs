//! Network layer - customer REST calls
//!
//! The Network actor receives commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
