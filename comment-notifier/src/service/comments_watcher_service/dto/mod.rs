mod comment_created_event;
mod comments_watcher_service_config;

pub use comment_created_event::*;
pub use comments_watcher_service_config::*;
