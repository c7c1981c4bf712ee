use super::Notification;
use serde::Deserialize;

///
/// Inbound frame of the notification socket.
/// Only the "notification" kind carries a payload, every other kind
/// is decoded to [ChannelFrame::Unsupported] and dropped by the channel.
///
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChannelFrame {
    Notification { data: Notification },
    #[serde(other)]
    Unsupported,
}
