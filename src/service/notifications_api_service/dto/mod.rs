mod notifications_api_service_config;
mod notifications_list;

pub use notifications_api_service_config::*;
pub use notifications_list::*;
