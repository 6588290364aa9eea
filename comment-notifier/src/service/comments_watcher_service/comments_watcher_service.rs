use super::{dto::CommentCreatedEvent, CommentsWatcherServiceConfig};
use crate::service::comment_notifications_service::CommentNotificationsService;
use anyhow::anyhow;
use bson::{doc, Document};
use futures_util::StreamExt;
use mongodb::{change_stream::event::ResumeToken, Collection, Database};
use std::sync::Arc;
use tokio::{sync::oneshot, task::JoinHandle};

const COMMENTS: &str = "comments";

///
/// Dispatches every document inserted into `comments`
/// to [CommentNotificationsService], one at a time.
///
/// Change stream is reopened after failures and resumes
/// after the last processed event.
///
pub struct CommentsWatcherService {
    close_sender: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl CommentsWatcherService {
    pub fn new(
        config: CommentsWatcherServiceConfig,
        database: Database,
        comment_notifications_service: Arc<dyn CommentNotificationsService>,
    ) -> Self {
        let (close_sender, close_receiver) = oneshot::channel();
        let watcher = Watcher {
            config,
            collection: database.collection::<Document>(COMMENTS),
            consumer: Consumer {
                comment_notifications_service,
            },
            close_receiver,
            resume_token: None,
        };
        let handle = tokio::spawn(watcher.run());

        Self {
            close_sender,
            handle,
        }
    }

    ///
    /// Stops watching. Comment being processed is finished first.
    ///
    pub async fn close(self) {
        let _ = self.close_sender.send(());
        if let Err(err) = self.handle.await {
            tracing::error!(%err, "comments watcher task failed");
        }
    }
}

enum WatchEnd {
    Closed,
    StreamEnded,
}

struct Watcher {
    config: CommentsWatcherServiceConfig,
    collection: Collection<Document>,
    consumer: Consumer,
    close_receiver: oneshot::Receiver<()>,
    resume_token: Option<ResumeToken>,
}

impl Watcher {
    async fn run(mut self) {
        loop {
            match self.watch().await {
                Ok(WatchEnd::Closed) => break,
                Ok(WatchEnd::StreamEnded) => tracing::warn!("comments change stream ended"),
                Err(err) => tracing::warn!(%err, "comments change stream failed"),
            }

            tokio::select! {
                _ = &mut self.close_receiver => break,
                _ = tokio::time::sleep(self.config.retry_interval) => {}
            }
            tracing::info!("reopening comments change stream");
        }

        tracing::info!("comments watcher stopped");
    }

    /// Delivery is at most once: resume token moves past an event even when notifying failed.
    async fn watch(&mut self) -> Result<WatchEnd, mongodb::error::Error> {
        let mut watch = self
            .collection
            .watch()
            .pipeline([doc! { "$match": { "operationType": "insert" } }]);
        if let Some(resume_token) = self.resume_token.clone() {
            watch = watch.start_after(resume_token);
        }

        let mut change_stream = tokio::select! {
            _ = &mut self.close_receiver => return Ok(WatchEnd::Closed),
            change_stream = async { watch.await } => change_stream?,
        };
        tracing::info!(collection = COMMENTS, "watching for new comments");

        loop {
            let event = tokio::select! {
                _ = &mut self.close_receiver => return Ok(WatchEnd::Closed),
                event = change_stream.next() => event,
            };
            let Some(event) = event else {
                return Ok(WatchEnd::StreamEnded);
            };
            let event = event?;

            match event.full_document {
                Some(document) => self.consumer.consume(document).await,
                None => tracing::warn!("insert event without full document"),
            }

            self.resume_token = change_stream.resume_token();
        }
    }
}

struct Consumer {
    comment_notifications_service: Arc<dyn CommentNotificationsService>,
}

impl Consumer {
    #[tracing::instrument(name = "Comments Watcher", skip_all)]
    async fn consume(&self, document: Document) {
        tracing::info!("processing comment");

        match self.try_consume(document).await {
            Ok(()) => tracing::info!("comment processed"),
            Err(err) => tracing::warn!(%err, "failed to process comment"),
        }
    }

    async fn try_consume(&self, document: Document) -> anyhow::Result<()> {
        let event = CommentCreatedEvent::try_from(document)
            .map_err(|err| anyhow!("invalid comment: {err}"))?;

        self.comment_notifications_service
            .notify_vendor(&event.product_id, &event.comment_id, event.comment)
            .await?;

        Ok(())
    }
}
