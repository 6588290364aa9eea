use std::time::Duration;

pub struct CommentsWatcherServiceConfig {
    /// Delay before change stream is reopened after failure
    pub retry_interval: Duration,
}
