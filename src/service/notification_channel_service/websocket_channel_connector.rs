use super::{ChannelConnector, ChannelStream};
use crate::auth::Credentials;
use anyhow::anyhow;
use async_trait::async_trait;
use futures::StreamExt;
use tokio_tungstenite::{connect_async, tungstenite::Message};

///
/// Production connector, opens a websocket addressed per seller with
/// the bearer token passed as a query parameter.
///
pub struct WebSocketChannelConnector {
    ws_base_url: String,
}

impl WebSocketChannelConnector {
    pub fn new(ws_base_url: String) -> Self {
        let ws_base_url = ws_base_url.trim_end_matches('/').to_string();

        Self { ws_base_url }
    }

    fn endpoint(&self, credentials: &Credentials) -> String {
        format!(
            "{}/ws/seller/{}?token={}",
            self.ws_base_url, credentials.seller_id, credentials.token,
        )
    }
}

#[async_trait]
impl ChannelConnector for WebSocketChannelConnector {
    async fn connect(&self, credentials: &Credentials) -> anyhow::Result<ChannelStream> {
        let (socket, _) = connect_async(self.endpoint(credentials)).await?;

        // Write half is dropped, the channel is push only
        let (_, read) = socket.split();

        let stream = read.filter_map(|message| async {
            match message {
                Ok(Message::Text(frame)) => Some(Ok(frame)),
                Ok(Message::Binary(_)) => {
                    // Not part of the protocol, isolated like any malformed frame
                    tracing::warn!("dropping binary frame");
                    None
                }
                // Tungstenite answers pings internally
                Ok(Message::Ping(_) | Message::Pong(_)) => None,
                Ok(Message::Close(_)) => None,
                Ok(Message::Frame(_)) => None,
                Err(err) => Some(Err(anyhow!("failed to read frame: {err}"))),
            }
        });

        Ok(stream.boxed())
    }
}
