///
/// State of the notification channel. Owned exclusively by the
/// channel, consumers observe it through a watch receiver.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Reconnecting(u32),
}
