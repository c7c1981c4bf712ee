///
/// Single multipart upload: the original csv file plus images
/// attached to rows, keyed by row index on the wire.
///
#[derive(Debug)]
pub struct BulkUploadRequest {
    pub csv_file_name: String,
    pub csv_content: String,
    pub images: Vec<RowImages>,
}

#[derive(Debug)]
pub struct RowImages {
    pub row_index: usize,
    pub images: Vec<ImageAttachment>,
}

///
/// Image file picked on the client side.
/// Attachment order is preserved, the first image of a row is the cover.
///
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
