mod dto;
mod error;
mod fcm_push_service;
mod push_service;

pub use dto::{FcmPushServiceConfig, PushNotification};
pub use error::*;
pub use fcm_push_service::*;
pub use push_service::*;
