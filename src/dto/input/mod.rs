mod bulk_upload_report;
mod channel_frame;
mod notification;
mod unread_count;

pub use bulk_upload_report::*;
pub use channel_frame::*;
pub use notification::*;
pub use unread_count::*;
