mod dto;
mod reconciliation_service;
mod reconciliation_service_impl;

pub use dto::SyncOutcome;
pub use reconciliation_service::*;
pub use reconciliation_service_impl::*;
