use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub message: Option<String>,
    pub order_id: Option<i64>,
    pub product_id: Option<i64>,
    pub sku: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub priority: NotificationPriority,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

///
/// Closed set of notification kinds.
/// Kinds unknown to the client fold into [NotificationType::Other]
/// so a new server side kind never breaks decoding.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum NotificationType {
    Order,
    Stock,
    Approval,
    Payment,
    Return,
    Dispute,
    Other,
}

impl From<String> for NotificationType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "order" => Self::Order,
            "stock" => Self::Stock,
            "approval" => Self::Approval,
            "payment" => Self::Payment,
            "return" => Self::Return,
            "dispute" => Self::Dispute,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum NotificationPriority {
    High,
    Medium,
    Low,
    #[default]
    Unset,
}

impl From<String> for NotificationPriority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Unset,
        }
    }
}
