use super::Error;
use crate::dto::input;
use async_trait::async_trait;
use strum::AsRefStr;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsApi: Send + Sync {
    ///
    /// Fetch most recent notifications of the signed in seller,
    /// newest first
    ///
    async fn find_notifications(
        &self,
        limit: u32,
        filter: Option<NotificationFilter>,
    ) -> Result<Vec<input::Notification>, Error>;

    ///
    /// Partial update of the read flag
    ///
    /// ### Returns
    /// Updated notification
    ///
    async fn update_read(&self, id: i64, is_read: bool) -> Result<input::Notification, Error>;

    async fn delete_notification(&self, id: i64) -> Result<(), Error>;

    ///
    /// Server side count of unread notifications
    ///
    async fn unread_count(&self) -> Result<u32, Error>;
}

///
/// Values of the list endpoint filter query parameter.
/// OOS and low_stock both map to stock notifications on the server,
/// narrowed down by message content there.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum NotificationFilter {
    #[strum(serialize = "OOS")]
    OutOfStock,
    #[strum(serialize = "low_stock")]
    LowStock,
    #[strum(serialize = "approval")]
    Approval,
    #[strum(serialize = "order")]
    Order,
    #[strum(serialize = "payment")]
    Payment,
    #[strum(serialize = "dispute")]
    Dispute,
    #[strum(serialize = "return")]
    Return,
}
