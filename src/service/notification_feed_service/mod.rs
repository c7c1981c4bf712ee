mod dto;
mod notification_feed;
mod notification_feed_service;
mod notification_feed_service_impl;

pub use dto::NotificationFeedServiceConfig;
pub use notification_feed::*;
pub use notification_feed_service::*;
pub use notification_feed_service_impl::*;
