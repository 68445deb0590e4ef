mod notification;
mod notifications_page;
mod realtime_event;

pub use notification::*;
pub use notifications_page::*;
pub use realtime_event::*;
