mod error;
mod notifications_api;
mod products_api;
mod rest_api_client;

pub use error::*;
pub use notifications_api::*;
pub use products_api::*;
pub use rest_api_client::*;
