mod comment_notifications_service;
mod comment_notifications_service_impl;

pub use comment_notifications_service::*;
pub use comment_notifications_service_impl::*;
