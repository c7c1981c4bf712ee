use super::dto::ConnectionState;
use async_trait::async_trait;
use tokio::sync::watch;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationChannelService: Send + Sync {
    ///
    /// Open the notification channel for the signed in seller.
    /// No-op when the channel is already running or when there is no
    /// signed in seller. Connection failures are never returned, the
    /// channel retries with backoff and eventually gives up silently.
    ///
    async fn connect(&self);

    ///
    /// Close the channel and cancel any pending reconnect.
    /// Safe to call when the channel is already closed.
    ///
    async fn disconnect(&self);

    ///
    /// Watch receiver with the current connection state
    ///
    fn state(&self) -> watch::Receiver<ConnectionState>;
}
