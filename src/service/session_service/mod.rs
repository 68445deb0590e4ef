mod session_service;
mod session_service_impl;

pub use session_service::*;
pub use session_service_impl::*;
