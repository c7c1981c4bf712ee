mod credentials;
mod role;

pub use credentials::*;
pub use role::*;
