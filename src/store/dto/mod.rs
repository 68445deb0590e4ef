mod notification;
mod notification_priority;
mod notification_type;
mod notifications_snapshot;

pub use notification::*;
pub use notification_priority::*;
pub use notification_type::*;
pub use notifications_snapshot::*;
