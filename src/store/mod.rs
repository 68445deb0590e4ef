//!
//! Local notification state of the authenticated session
//!

pub mod dto;
mod notifications_store;
mod session_state;

pub use notifications_store::*;
pub use session_state::*;
