mod bulk_upload_request;
mod read_update;

pub use bulk_upload_request::*;
pub use read_update::*;
