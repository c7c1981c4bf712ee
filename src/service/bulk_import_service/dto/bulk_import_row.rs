use crate::dto::output::ImageAttachment;
use std::collections::HashMap;

///
/// Single parsed row of a bulk upload csv. Row index is the zero
/// based index of the data row, headers excluded, and keys the image
/// fields on submit.
///
/// An invalid row stays in the batch so it can be shown and corrected,
/// it only blocks the final submit.
///
#[derive(Debug, Clone)]
pub struct BulkImportRow {
    pub row_index: usize,
    pub name: String,
    pub price: Option<f64>,
    pub fields: HashMap<String, String>,
    pub invalid_reason: Option<String>,
    pub images: Vec<ImageAttachment>,
}

impl BulkImportRow {
    pub fn is_valid(&self) -> bool {
        self.invalid_reason.is_none()
    }

    ///
    /// First attached image, used as the cover image
    ///
    pub fn primary_image(&self) -> Option<&ImageAttachment> {
        self.images.first()
    }
}
