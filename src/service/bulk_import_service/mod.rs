mod bulk_import_service;
mod bulk_import_service_impl;
mod csv_line;
mod dto;
mod error;

pub use bulk_import_service::*;
pub use bulk_import_service_impl::*;
pub use dto::{BulkImportBatch, BulkImportRow};
pub use error::Error;
