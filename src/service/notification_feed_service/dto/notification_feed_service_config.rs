#[derive(Debug, Clone)]
pub struct NotificationFeedServiceConfig {
    ///
    /// How many most recent notifications a refresh fetches
    ///
    pub refresh_limit: u32,
}
