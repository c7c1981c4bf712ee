pub mod api;
pub mod application;
pub mod auth;
pub mod dto;
pub mod error;
pub mod service;
