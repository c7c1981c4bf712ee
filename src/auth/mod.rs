mod dto;
mod session_store;
mod session_store_impl;

pub use dto::*;
pub use session_store::*;
pub use session_store_impl::*;
