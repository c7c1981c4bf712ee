use super::{NotificationFeed, NotificationFeedService, NotificationFeedServiceConfig};
use crate::{
    api::{NotificationFilter, NotificationsApi},
    dto::input,
    error::Error,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct NotificationFeedServiceImpl {
    config: NotificationFeedServiceConfig,

    notifications_api: Arc<dyn NotificationsApi>,
    feed: Arc<RwLock<NotificationFeed>>,
}

impl NotificationFeedServiceImpl {
    pub fn new(
        config: NotificationFeedServiceConfig,
        notifications_api: Arc<dyn NotificationsApi>,
        feed: Arc<RwLock<NotificationFeed>>,
    ) -> Self {
        Self {
            config,
            notifications_api,
            feed,
        }
    }

    async fn update_read(&self, id: i64, is_read: bool) -> Result<(), Error> {
        // Optimistic, the flag flips before the request settles
        let changed = {
            let mut feed = self.feed.write().await;
            if !feed.contains(id) {
                return Err(Error::NotificationNotExist);
            }
            feed.set_read(id, is_read)
        };

        match self.notifications_api.update_read(id, is_read).await {
            Ok(_) => {
                tracing::debug!(id, is_read, "updated read flag");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id, is_read, %err, "failed to update read flag");
                if changed {
                    let mut feed = self.feed.write().await;
                    feed.set_read(id, !is_read);
                }
                Err(Error::Api(err))
            }
        }
    }
}

#[async_trait]
impl NotificationFeedService for NotificationFeedServiceImpl {
    async fn mark_as_read(&self, id: i64) -> Result<(), Error> {
        self.update_read(id, true).await
    }

    async fn mark_as_unread(&self, id: i64) -> Result<(), Error> {
        self.update_read(id, false).await
    }

    async fn delete_notification(&self, id: i64) -> Result<(), Error> {
        // Whether the notification was unread is resolved inside remove,
        // the counter is adjusted there before the request is issued
        let removed = {
            let mut feed = self.feed.write().await;
            feed.remove(id)
        };
        let Some((idx, notification)) = removed else {
            return Err(Error::NotificationNotExist);
        };

        match self.notifications_api.delete_notification(id).await {
            Ok(()) => {
                tracing::info!(id, "notification deleted");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id, %err, "failed to delete notification");
                let mut feed = self.feed.write().await;
                feed.insert(idx, notification);
                Err(Error::Api(err))
            }
        }
    }

    async fn refresh(&self) -> Result<(), Error> {
        let notifications = self
            .notifications_api
            .find_notifications(self.config.refresh_limit, None)
            .await?;

        let mut feed = self.feed.write().await;
        feed.apply_refresh(notifications);
        tracing::info!(
            count = feed.len(),
            unread = feed.unread_count(),
            "feed refreshed"
        );

        Ok(())
    }

    async fn notifications(&self) -> Vec<input::Notification> {
        self.feed.read().await.notifications().to_vec()
    }

    async fn unread_count(&self) -> u32 {
        self.feed.read().await.unread_count()
    }

    async fn find_filtered(
        &self,
        filter: NotificationFilter,
    ) -> Result<Vec<input::Notification>, Error> {
        let notifications = self
            .notifications_api
            .find_notifications(self.config.refresh_limit, Some(filter))
            .await?;

        Ok(notifications)
    }

    async fn server_unread_count(&self) -> Result<u32, Error> {
        Ok(self.notifications_api.unread_count().await?)
    }
}
