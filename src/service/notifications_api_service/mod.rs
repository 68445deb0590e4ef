mod dto;
mod error;
mod notifications_api_service;
mod notifications_api_service_impl;

pub use dto::{NotificationsApiServiceConfig, NotificationsList};
pub use error::*;
pub use notifications_api_service::*;
pub use notifications_api_service_impl::*;
