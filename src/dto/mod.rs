//!
//! Module with all dtos that are exchanged with the backend
//! and received from the realtime channel
//!

pub mod input;
pub mod output;
