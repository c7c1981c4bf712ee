use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UnreadCount {
    pub unread_count: u32,
}
