pub mod bulk_import_service;
pub mod notification_channel_service;
pub mod notification_feed_service;
