mod notification_feed_service_config;

pub use notification_feed_service_config::*;
