pub mod access_token_service;
pub mod comment_notifications_service;
pub mod comments_watcher_service;
pub mod push_service;
