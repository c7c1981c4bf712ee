mod channel_connector;
mod channel_state_machine;
mod dto;
mod notification_channel_service;
mod notification_channel_service_impl;
mod websocket_channel_connector;

pub use channel_connector::*;
pub use dto::{ConnectionState, NotificationChannelServiceConfig};
pub use notification_channel_service::*;
pub use notification_channel_service_impl::*;
pub use websocket_channel_connector::*;
