mod connection_state;
mod notification_channel_service_config;

pub use connection_state::*;
pub use notification_channel_service_config::*;
