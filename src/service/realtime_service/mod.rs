mod dto;
mod error;
mod realtime_connector;
mod realtime_listener;
pub mod realtime_normalizer;
mod websocket_realtime_connector;

pub use dto::{RealtimeEventKind, RealtimeServiceConfig};
pub use error::*;
pub use realtime_connector::*;
pub use realtime_listener::*;
pub use websocket_realtime_connector::*;
