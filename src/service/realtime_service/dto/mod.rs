mod realtime_event_kind;
mod realtime_service_config;

pub use realtime_event_kind::*;
pub use realtime_service_config::*;
