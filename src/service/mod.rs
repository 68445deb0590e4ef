pub mod notifications_api_service;
pub mod realtime_service;
pub mod reconciliation_service;
pub mod session_service;
