use std::time::Duration;

#[derive(Debug, Clone)]
pub struct NotificationChannelServiceConfig {
    ///
    /// Backoff before reconnect attempt n is n * base delay
    ///
    pub reconnect_base_delay: Duration,
    pub reconnect_max_attempts: u32,

    ///
    /// How many most recent notifications the refresh on connect fetches
    ///
    pub refresh_limit: u32,
}
