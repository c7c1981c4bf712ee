//!
//! Module with all dtos that are passed between server and client
//!

pub mod input;
pub mod output;
