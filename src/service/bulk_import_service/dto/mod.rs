mod bulk_import_batch;
mod bulk_import_row;

pub use bulk_import_batch::*;
pub use bulk_import_row::*;
