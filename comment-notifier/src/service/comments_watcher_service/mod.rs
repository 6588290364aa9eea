mod comments_watcher_service;
mod dto;

pub use comments_watcher_service::*;
pub use dto::CommentsWatcherServiceConfig;
