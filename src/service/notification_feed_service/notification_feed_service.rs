use crate::{api::NotificationFilter, dto::input, error::Error};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationFeedService: Send + Sync {
    ///
    /// Mark notification as read, optimistically. The local flag and
    /// counter flip before the request settles and are rolled back
    /// when the request fails.
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when the id is not in the feed
    /// - [Error::Api] when the remote update fails, local state is reverted
    ///
    async fn mark_as_read(&self, id: i64) -> Result<(), Error>;

    ///
    /// Counterpart of [Self::mark_as_read], same optimistic semantics
    ///
    async fn mark_as_unread(&self, id: i64) -> Result<(), Error>;

    ///
    /// Delete notification, optimistically. A failed remote delete
    /// puts the notification back at its previous position.
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when the id is not in the feed
    /// - [Error::Api] when the remote delete fails, local state is reverted
    ///
    async fn delete_notification(&self, id: i64) -> Result<(), Error>;

    ///
    /// Re-fetch the recent list and recompute the unread counter from
    /// scratch, overwriting any optimistic drift
    ///
    async fn refresh(&self) -> Result<(), Error>;

    ///
    /// Snapshot of the current feed, newest first
    ///
    async fn notifications(&self) -> Vec<input::Notification>;

    async fn unread_count(&self) -> u32;

    ///
    /// Fetch a type filtered page without touching the shared feed
    ///
    async fn find_filtered(
        &self,
        filter: NotificationFilter,
    ) -> Result<Vec<input::Notification>, Error>;

    ///
    /// Authoritative unread count from the server
    ///
    async fn server_unread_count(&self) -> Result<u32, Error>;
}
