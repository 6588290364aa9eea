mod fcm_push_service_config;
mod fcm_send_request;
mod push_notification;

pub use fcm_push_service_config::*;
pub use fcm_send_request::*;
pub use push_notification::*;
