//!
//! Client side synchronization of college dashboard notifications.
//!
//! Notifications pushed over the realtime channel are added to the
//! session [store], user actions are applied optimistically and
//! reconciled with the REST backend by the [service] layer.
//!

pub mod dto;
pub mod service;
pub mod store;
