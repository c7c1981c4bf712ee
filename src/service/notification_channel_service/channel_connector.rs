use crate::auth::Credentials;
use async_trait::async_trait;
use futures::stream::BoxStream;

///
/// Read only stream of raw text frames. The channel is push only,
/// the client never writes. The stream ends when the connection is
/// closed by the server.
///
pub type ChannelStream = BoxStream<'static, anyhow::Result<String>>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChannelConnector: Send + Sync {
    ///
    /// Open the notification socket for the given seller
    ///
    async fn connect(&self, credentials: &Credentials) -> anyhow::Result<ChannelStream>;
}
